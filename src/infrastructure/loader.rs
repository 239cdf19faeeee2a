//! Background fetch workers.
//!
//! The UI thread never blocks on the network: each activation hands a
//! [`FetchRequest`] to the [`Loader`], which runs it on a worker thread and
//! sends the [`FetchOutcome`] back over a channel.

use super::api::StoryApi;
use crate::domain::{FetchError, FetchResult, Story, StoryDetail, VocabEntry};
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::Arc;
use std::thread;
use tracing::{debug, info_span, warn};

pub type SharedApi = Arc<dyn StoryApi + Send + Sync>;

/// A remote read the UI wants performed.
///
/// `request` is the sequence number the issuing view assigned; it travels
/// with the outcome so stale responses can be told apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Stories { request: u64 },
    Detail { request: u64, story_id: String },
}

#[derive(Debug)]
pub enum FetchOutcome {
    Stories {
        request: u64,
        result: FetchResult<Vec<Story>>,
    },
    Detail {
        request: u64,
        story_id: String,
        result: FetchResult<(StoryDetail, Vec<VocabEntry>)>,
    },
}

pub struct Loader {
    api: SharedApi,
    sender: Sender<FetchOutcome>,
}

impl Loader {
    /// Creates a loader and the receiving end its outcomes arrive on.
    pub fn new(api: SharedApi) -> (Self, Receiver<FetchOutcome>) {
        let (sender, receiver) = unbounded();
        (Self { api, sender }, receiver)
    }

    /// Runs `request` on a fresh worker thread.
    pub fn dispatch(&self, request: FetchRequest) {
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();

        thread::spawn(move || {
            let outcome = run_request(api.as_ref(), request);
            if sender.send(outcome).is_err() {
                debug!("outcome dropped, receiver closed");
            }
        });
    }
}

/// Performs `request` synchronously.
pub fn run_request(api: &(dyn StoryApi + Send + Sync), request: FetchRequest) -> FetchOutcome {
    match request {
        FetchRequest::Stories { request } => {
            let _span = info_span!("list_stories", request).entered();
            let result = api.list_stories();
            if let Err(err) = &result {
                warn!(%err, "story list fetch failed");
            }
            FetchOutcome::Stories { request, result }
        }
        FetchRequest::Detail { request, story_id } => {
            let _span = info_span!("story_detail", request, %story_id).entered();
            let result = fetch_detail(api, &story_id);
            if let Err(err) = &result {
                warn!(%err, "story detail fetch failed");
            }
            FetchOutcome::Detail {
                request,
                story_id,
                result,
            }
        }
    }
}

/// Fetches a story and its vocabulary concurrently.
///
/// Both requests are always joined. A story failure takes precedence over a
/// vocabulary failure; either one fails the whole fetch.
pub fn fetch_detail(
    api: &(dyn StoryApi + Send + Sync),
    story_id: &str,
) -> FetchResult<(StoryDetail, Vec<VocabEntry>)> {
    if story_id.is_empty() {
        return Err(FetchError::MissingId);
    }

    let (story, vocab) = thread::scope(|scope| {
        let vocab = scope.spawn(|| api.vocab_by_story_id(story_id));
        let story = api.story_by_id(story_id);
        (story, vocab.join())
    });

    let vocab = match vocab {
        Ok(result) => result,
        Err(panic) => std::panic::resume_unwind(panic),
    };

    Ok((story?, vocab?))
}
