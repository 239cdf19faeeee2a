//! Filtered and sorted view of the story collection.
//!
//! The projection is a pure function of the collection, the level filter
//! and the sort order. [`ProjectionCache`] memoises it so the list view can
//! ask for it on every frame without re-sorting.

use super::models::{LevelFilter, SortOrder, Story};
use std::cmp::Ordering;

/// Filters `stories` by `filter` and sorts the result by level rank.
///
/// The sort is stable in both directions: descending flips the comparator,
/// so stories of equal rank keep their original relative order.
///
/// # Examples
///
/// ```
/// use storydeck::domain::{project_stories, Level, LevelFilter, SortOrder, Story};
///
/// let stories = vec![
///     Story { id: "1".into(), title: "Cat".into(), level: Level::Advanced },
///     Story { id: "2".into(), title: "Dog".into(), level: Level::Beginner },
/// ];
/// let view = project_stories(&stories, &LevelFilter::All, SortOrder::Ascending);
/// assert_eq!(view[0].title, "Dog");
/// assert_eq!(view[1].title, "Cat");
/// ```
pub fn project_stories(stories: &[Story], filter: &LevelFilter, order: SortOrder) -> Vec<Story> {
    let mut projected: Vec<Story> = stories
        .iter()
        .filter(|story| filter.matches(&story.level))
        .cloned()
        .collect();

    projected.sort_by(|a, b| compare_rank(a, b, order));
    projected
}

fn compare_rank(a: &Story, b: &Story, order: SortOrder) -> Ordering {
    let ascending = a.level.rank().cmp(&b.level.rank());
    match order {
        SortOrder::Ascending => ascending,
        SortOrder::Descending => ascending.reverse(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ProjectionKey {
    revision: u64,
    filter: LevelFilter,
    order: SortOrder,
}

/// Memoised projection keyed by `(revision, filter, order)`.
///
/// `revision` identifies the loaded collection; callers bump it whenever a
/// new collection replaces the old one.
#[derive(Debug, Default)]
pub struct ProjectionCache {
    key: Option<ProjectionKey>,
    stories: Vec<Story>,
    recomputations: usize,
}

impl ProjectionCache {
    pub fn get(
        &mut self,
        revision: u64,
        stories: &[Story],
        filter: &LevelFilter,
        order: SortOrder,
    ) -> &[Story] {
        let key = ProjectionKey {
            revision,
            filter: filter.clone(),
            order,
        };

        if self.key.as_ref() != Some(&key) {
            self.stories = project_stories(stories, filter, order);
            self.key = Some(key);
            self.recomputations += 1;
        }

        &self.stories
    }

    /// Number of times the projection was actually recomputed.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
