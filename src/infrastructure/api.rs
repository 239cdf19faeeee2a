//! Remote story API client.

use crate::domain::{FetchError, FetchResult, Story, StoryDetail, VocabEntry};
use reqwest::blocking::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://n8n-prod.sengsalee.dev/webhook/";

const LIST_STORIES_PATH: &str = "get-all-story/";
const STORY_BY_ID_PATH: &str = "get-story-by-id";
const VOCAB_BY_STORY_PATH: &str = "get-vocab-by-story-id";

/// Read access to the story catalogue.
pub trait StoryApi {
    fn list_stories(&self) -> FetchResult<Vec<Story>>;
    fn story_by_id(&self, id: &str) -> FetchResult<StoryDetail>;
    fn vocab_by_story_id(&self, story_id: &str) -> FetchResult<Vec<VocabEntry>>;
}

#[derive(Serialize)]
struct StoryRequest<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct VocabRequest<'a> {
    story_id: &'a str,
}

/// [`StoryApi`] over JSON/HTTP with a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpStoryApi {
    client: Client,
    base_url: String,
}

impl HttpStoryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> FetchResult<T> {
        let url = self.endpoint(path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send()?;
        decode(response)
    }
}

impl Default for HttpStoryApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl StoryApi for HttpStoryApi {
    fn list_stories(&self) -> FetchResult<Vec<Story>> {
        let url = self.endpoint(LIST_STORIES_PATH);
        debug!(%url, "GET");
        let response = self.client.get(&url).send()?;
        decode(response)
    }

    fn story_by_id(&self, id: &str) -> FetchResult<StoryDetail> {
        if id.is_empty() {
            return Err(FetchError::MissingId);
        }
        self.post(STORY_BY_ID_PATH, &StoryRequest { id })
    }

    fn vocab_by_story_id(&self, story_id: &str) -> FetchResult<Vec<VocabEntry>> {
        if story_id.is_empty() {
            return Err(FetchError::MissingId);
        }
        self.post(VOCAB_BY_STORY_PATH, &VocabRequest { story_id })
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> FetchResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
}
