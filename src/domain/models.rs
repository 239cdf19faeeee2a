use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level of a story.
///
/// The remote API sends the level as a capitalised string. Anything outside
/// the three known values is kept verbatim in [`Level::Other`] so it can
/// still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Other(String),
}

impl Level {
    /// The three levels a user can filter on, in ascending rank.
    pub const KNOWN: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    /// Sort rank of the level. Unknown levels rank after `Advanced`.
    pub fn rank(&self) -> u8 {
        match self {
            Level::Beginner => 0,
            Level::Intermediate => 1,
            Level::Advanced => 2,
            Level::Other(_) => 3,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::Other(raw) => raw,
        }
    }
}

impl From<String> for Level {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Beginner" => Level::Beginner,
            "Intermediate" => Level::Intermediate,
            "Advanced" => Level::Advanced,
            _ => Level::Other(value),
        }
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        match level {
            Level::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary entry of the story collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub level: Level,
}

/// Full story as returned by the story-by-id endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDetail {
    pub id: String,
    pub title: String,
    pub content: String,
    pub level: Level,
}

/// A word/meaning pair belonging to one story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub id: String,
    pub word: String,
    pub meaning: String,
    pub story_id: String,
}

/// Level filter applied to the story list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Only(Level),
}

impl LevelFilter {
    pub fn matches(&self, level: &Level) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Only(wanted) => wanted == level,
        }
    }

    /// Next filter in the cycle `All → Beginner → Intermediate → Advanced → All`.
    pub fn next(&self) -> Self {
        match self {
            LevelFilter::All => LevelFilter::Only(Level::Beginner),
            LevelFilter::Only(Level::Beginner) => LevelFilter::Only(Level::Intermediate),
            LevelFilter::Only(Level::Intermediate) => LevelFilter::Only(Level::Advanced),
            LevelFilter::Only(_) => LevelFilter::All,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            LevelFilter::All => "All",
            LevelFilter::Only(level) => level.as_str(),
        }
    }
}

/// Direction of the level sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}
