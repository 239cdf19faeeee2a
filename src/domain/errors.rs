use thiserror::Error;

/// Failure of a single remote read.
///
/// None of these are shown to the user as-is; each view collapses them into
/// one fixed message and logs the cause.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no story id given")]
    MissingId,
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Shown when the story collection cannot be loaded.
pub const STORIES_FAILED_MESSAGE: &str = "Could not fetch stories. Please try again later.";
/// Shown when the story or its vocabulary cannot be loaded.
pub const STORY_FAILED_MESSAGE: &str = "Could not fetch the story. Please check the ID.";
/// Shown when the detail view is opened without an identifier.
pub const MISSING_ID_MESSAGE: &str = "No story id was given.";
