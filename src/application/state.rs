//! Application state for the two story views.
//!
//! Each view owns a [`LoadState`] and the sequence number of the last
//! request it issued. Fetch outcomes carrying an older number are dropped,
//! so a slow response can never overwrite the view the user has moved on to.

use super::routes::Route;
use crate::domain::{
    FetchResult, LevelFilter, MISSING_ID_MESSAGE, ProjectionCache, STORIES_FAILED_MESSAGE,
    STORY_FAILED_MESSAGE, SortOrder, Story, StoryDetail, VocabEntry,
};
use crate::infrastructure::{FetchOutcome, FetchRequest};
use tracing::{debug, info};

/// Lifecycle of a remote-backed view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// Holds the fixed user-facing message, never the underlying cause.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Which view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail,
}

/// State of the story list view.
#[derive(Debug)]
pub struct ListView {
    pub state: LoadState<Vec<Story>>,
    pub filter: LevelFilter,
    pub order: SortOrder,
    /// Index into the projected list.
    pub selected: usize,
    revision: u64,
    request: u64,
    cache: ProjectionCache,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            state: LoadState::Loading,
            filter: LevelFilter::All,
            order: SortOrder::Ascending,
            selected: 0,
            revision: 0,
            request: 0,
            cache: ProjectionCache::default(),
        }
    }
}

impl ListView {
    /// Starts a fresh load of the story collection.
    pub fn activate(&mut self) -> FetchRequest {
        self.request += 1;
        self.state = LoadState::Loading;
        info!(request = self.request, "loading story list");
        FetchRequest::Stories {
            request: self.request,
        }
    }

    /// Commits a fetch result. Returns `false` if it was stale and ignored.
    pub fn apply(&mut self, request: u64, result: FetchResult<Vec<Story>>) -> bool {
        if request != self.request {
            debug!(request, latest = self.request, "ignoring stale story list");
            return false;
        }

        self.state = match result {
            Ok(stories) => {
                info!(count = stories.len(), "story list ready");
                self.revision += 1;
                LoadState::Ready(stories)
            }
            Err(_) => LoadState::Failed(STORIES_FAILED_MESSAGE.to_string()),
        };
        self.clamp_selection();
        true
    }

    /// The filtered and sorted stories; empty unless the list is ready.
    pub fn visible(&mut self) -> &[Story] {
        match &self.state {
            LoadState::Ready(stories) => self.cache.get(self.revision, stories, &self.filter, self.order),
            _ => &[],
        }
    }

    pub fn selected_story(&mut self) -> Option<Story> {
        let selected = self.selected;
        self.visible().get(selected).cloned()
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.clamp_selection();
    }

    pub fn reset_filter(&mut self) {
        self.filter = LevelFilter::All;
        self.clamp_selection();
    }

    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        self.clamp_selection();
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

/// A loaded story together with its vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryPage {
    pub story: StoryDetail,
    pub vocab: Vec<VocabEntry>,
}

/// State of the story detail view.
#[derive(Debug)]
pub struct DetailView {
    pub story_id: String,
    pub state: LoadState<StoryPage>,
    /// Vertical scroll offset of the story page, in lines.
    pub scroll: u16,
    /// Largest useful offset, set by the renderer from the wrapped page height.
    scroll_limit: u16,
    request: u64,
}

impl Default for DetailView {
    fn default() -> Self {
        Self {
            story_id: String::new(),
            state: LoadState::Loading,
            scroll: 0,
            scroll_limit: u16::MAX,
            request: 0,
        }
    }
}

impl DetailView {
    /// Starts loading `story_id`.
    ///
    /// An empty identifier fails immediately and yields no request.
    pub fn activate(&mut self, story_id: &str) -> Option<FetchRequest> {
        self.request += 1;
        self.story_id = story_id.to_string();
        self.scroll = 0;
        self.scroll_limit = u16::MAX;

        if story_id.is_empty() {
            info!("story view opened without an id");
            self.state = LoadState::Failed(MISSING_ID_MESSAGE.to_string());
            return None;
        }

        info!(request = self.request, story_id, "loading story");
        self.state = LoadState::Loading;
        Some(FetchRequest::Detail {
            request: self.request,
            story_id: self.story_id.clone(),
        })
    }

    /// Commits a fetch result. Returns `false` if it was stale and ignored.
    pub fn apply(
        &mut self,
        request: u64,
        story_id: &str,
        result: FetchResult<(StoryDetail, Vec<VocabEntry>)>,
    ) -> bool {
        if request != self.request || story_id != self.story_id {
            debug!(request, latest = self.request, story_id, "ignoring stale story");
            return false;
        }

        self.state = match result {
            Ok((story, vocab)) => {
                info!(story_id, vocab = vocab.len(), "story ready");
                LoadState::Ready(StoryPage { story, vocab })
            }
            Err(_) => LoadState::Failed(STORY_FAILED_MESSAGE.to_string()),
        };
        true
    }

    pub fn scroll_down(&mut self) {
        if self.scroll < self.scroll_limit {
            self.scroll += 1;
        }
    }

    /// Caps the scroll offset; the current offset is pulled back if needed.
    pub fn set_scroll_limit(&mut self, limit: u16) {
        self.scroll_limit = limit;
        self.scroll = self.scroll.min(limit);
    }

    pub fn scroll_limit(&self) -> u16 {
        self.scroll_limit
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

/// Main application state holding both views.
///
/// # Examples
///
/// ```
/// use storydeck::application::{App, Route, Screen};
///
/// let mut app = App::default();
/// let request = app.navigate(Route::List);
/// assert!(request.is_some());
/// assert_eq!(app.screen, Screen::List);
/// ```
#[derive(Debug)]
pub struct App {
    pub screen: Screen,
    pub list: ListView,
    pub detail: DetailView,
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::List,
            list: ListView::default(),
            detail: DetailView::default(),
        }
    }
}

impl App {
    /// Shows the view for `route`, returning the fetch it needs.
    ///
    /// The list keeps its data, filter and selection across visits to a
    /// story; it is only fetched again if it has never loaded successfully.
    pub fn navigate(&mut self, route: Route) -> Option<FetchRequest> {
        debug!(%route, "navigate");
        match route {
            Route::List => {
                self.screen = Screen::List;
                if self.list.state.ready().is_some() {
                    None
                } else {
                    Some(self.list.activate())
                }
            }
            Route::Story(id) => {
                self.screen = Screen::Detail;
                self.detail.activate(&id)
            }
        }
    }

    pub fn route(&self) -> Route {
        match self.screen {
            Screen::List => Route::List,
            Screen::Detail => Route::Story(self.detail.story_id.clone()),
        }
    }

    /// Opens the story under the list cursor, if any.
    pub fn open_selected(&mut self) -> Option<FetchRequest> {
        let story = self.list.selected_story()?;
        self.navigate(Route::Story(story.id))
    }

    pub fn go_home(&mut self) -> Option<FetchRequest> {
        self.navigate(Route::List)
    }

    /// Reactivates the current view.
    pub fn reload(&mut self) -> Option<FetchRequest> {
        match self.screen {
            Screen::List => Some(self.list.activate()),
            Screen::Detail => {
                let id = self.detail.story_id.clone();
                self.detail.activate(&id)
            }
        }
    }

    /// Routes a finished fetch to the view that issued it.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool {
        match outcome {
            FetchOutcome::Stories { request, result } => self.list.apply(request, result),
            FetchOutcome::Detail {
                request,
                story_id,
                result,
            } => self.detail.apply(request, &story_id, result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FetchError, Level};
    use crate::infrastructure::loader::tests::{FakeApi, vocab};
    use crate::infrastructure::run_request;
    use reqwest::StatusCode;

    fn story(id: &str, title: &str, level: Level) -> Story {
        Story {
            id: id.to_string(),
            title: title.to_string(),
            level,
        }
    }

    fn detail(id: &str) -> StoryDetail {
        StoryDetail {
            id: id.to_string(),
            title: "Cat".to_string(),
            content: "The cat sat.".to_string(),
            level: Level::Beginner,
        }
    }

    fn loaded_app(stories: Vec<Story>) -> App {
        let mut app = App::default();
        let request = match app.navigate(Route::List) {
            Some(FetchRequest::Stories { request }) => request,
            other => panic!("expected stories request, got {other:?}"),
        };
        assert!(app.list.apply(request, Ok(stories)));
        app
    }

    fn detail_request(request: Option<FetchRequest>) -> (u64, String) {
        match request {
            Some(FetchRequest::Detail { request, story_id }) => (request, story_id),
            other => panic!("expected detail request, got {other:?}"),
        }
    }

    fn titles(stories: &[Story]) -> Vec<&str> {
        stories.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert_eq!(app.screen, Screen::List);
        assert!(app.list.state.is_loading());
        assert_eq!(app.list.filter, LevelFilter::All);
        assert_eq!(app.list.order, SortOrder::Ascending);
    }

    #[test]
    fn test_list_failure_uses_fixed_message() {
        let mut app = App::default();
        let request = app.navigate(Route::List);
        let Some(FetchRequest::Stories { request }) = request else {
            panic!("expected stories request");
        };
        app.list
            .apply(request, Err(FetchError::Status(StatusCode::SERVICE_UNAVAILABLE)));
        assert_eq!(
            app.list.state,
            LoadState::Failed(STORIES_FAILED_MESSAGE.to_string())
        );
        assert!(app.list.visible().is_empty());
    }

    #[test]
    fn test_list_projection_follows_filter_and_order() {
        let mut app = loaded_app(vec![
            story("1", "Cat", Level::Advanced),
            story("2", "Dog", Level::Beginner),
        ]);
        assert_eq!(titles(app.list.visible()), vec!["Dog", "Cat"]);

        app.list.toggle_order();
        assert_eq!(titles(app.list.visible()), vec!["Cat", "Dog"]);

        app.list.cycle_filter();
        app.list.cycle_filter();
        assert_eq!(app.list.filter, LevelFilter::Only(Level::Intermediate));
        assert!(app.list.visible().is_empty());
        assert!(app.list.state.ready().is_some());
    }

    #[test]
    fn test_selection_is_clamped_when_projection_shrinks() {
        let mut app = loaded_app(vec![
            story("1", "B1", Level::Beginner),
            story("2", "B2", Level::Beginner),
            story("3", "A1", Level::Advanced),
        ]);
        app.list.select_next();
        app.list.select_next();
        app.list.select_next();
        assert_eq!(app.list.selected, 2);

        app.list.cycle_filter();
        assert_eq!(app.list.selected, 1);
        assert_eq!(app.list.selected_story().unwrap().title, "B2");

        app.list.reset_filter();
        app.list.select_previous();
        app.list.select_previous();
        app.list.select_previous();
        assert_eq!(app.list.selected, 0);
    }

    #[test]
    fn test_stale_list_outcome_is_ignored() {
        let mut app = App::default();
        let first = app.list.activate();
        let second = app.reload();

        let FetchRequest::Stories { request: old } = first else {
            panic!("expected stories request");
        };
        let Some(FetchRequest::Stories { request: new }) = second else {
            panic!("expected stories request");
        };

        assert!(!app.list.apply(old, Ok(vec![story("1", "Old", Level::Beginner)])));
        assert!(app.list.state.is_loading());

        assert!(app.list.apply(new, Ok(vec![story("2", "New", Level::Beginner)])));
        assert_eq!(titles(app.list.visible()), vec!["New"]);
    }

    #[test]
    fn test_open_selected_story_issues_detail_request() {
        let mut app = loaded_app(vec![
            story("1", "Cat", Level::Advanced),
            story("2", "Dog", Level::Beginner),
        ]);
        let (_, story_id) = detail_request(app.open_selected());
        assert_eq!(story_id, "2");
        assert_eq!(app.screen, Screen::Detail);
        assert!(app.detail.state.is_loading());
        assert_eq!(app.route(), Route::Story("2".to_string()));
    }

    #[test]
    fn test_open_selected_with_empty_projection_does_nothing() {
        let mut app = loaded_app(vec![story("1", "Cat", Level::Advanced)]);
        app.list.cycle_filter();
        assert!(app.open_selected().is_none());
        assert_eq!(app.screen, Screen::List);
    }

    #[test]
    fn test_detail_ready_with_empty_vocab() {
        let mut app = App::default();
        let (request, story_id) = detail_request(app.navigate(Route::Story("7".to_string())));
        assert!(app.detail.apply(request, &story_id, Ok((detail("7"), Vec::new()))));

        let page = app.detail.state.ready().unwrap();
        assert_eq!(page.story.id, "7");
        assert!(page.vocab.is_empty());
    }

    #[test]
    fn test_detail_story_failure_fails_view() {
        let api = FakeApi {
            fail_story: true,
            vocab: vec![vocab("v1", "cat", "42")],
            ..FakeApi::default()
        };
        let mut app = App::default();
        let request = app.navigate(Route::Story("42".to_string())).unwrap();
        assert!(app.apply_outcome(run_request(&api, request)));
        assert_eq!(
            app.detail.state,
            LoadState::Failed(STORY_FAILED_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_detail_without_id_fails_without_request() {
        let mut app = App::default();
        assert!(app.navigate(Route::Story(String::new())).is_none());
        assert_eq!(
            app.detail.state,
            LoadState::Failed(MISSING_ID_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_stale_detail_outcome_is_ignored() {
        let mut app = App::default();
        let (old_request, old_id) = detail_request(app.navigate(Route::Story("1".to_string())));
        let (new_request, new_id) = detail_request(app.navigate(Route::Story("2".to_string())));

        assert!(!app.detail.apply(old_request, &old_id, Ok((detail("1"), Vec::new()))));
        assert!(app.detail.state.is_loading());

        assert!(app.detail.apply(new_request, &new_id, Ok((detail("2"), Vec::new()))));
        assert_eq!(app.detail.state.ready().unwrap().story.id, "2");
    }

    #[test]
    fn test_go_home_keeps_loaded_list() {
        let mut app = loaded_app(vec![
            story("1", "Cat", Level::Advanced),
            story("2", "Dog", Level::Beginner),
        ]);
        app.list.toggle_order();
        app.list.select_next();
        app.open_selected();

        assert!(app.go_home().is_none());
        assert_eq!(app.screen, Screen::List);
        assert_eq!(app.list.order, SortOrder::Descending);
        assert_eq!(app.list.selected, 1);
    }

    #[test]
    fn test_go_home_refetches_failed_list() {
        let mut app = App::default();
        let Some(FetchRequest::Stories { request }) = app.navigate(Route::List) else {
            panic!("expected stories request");
        };
        app.list
            .apply(request, Err(FetchError::Status(StatusCode::BAD_GATEWAY)));
        app.navigate(Route::Story("1".to_string()));

        assert!(matches!(app.go_home(), Some(FetchRequest::Stories { .. })));
        assert!(app.list.state.is_loading());
    }

    #[test]
    fn test_reload_detail_restarts_same_story() {
        let mut app = App::default();
        let (request, story_id) = detail_request(app.navigate(Route::Story("9".to_string())));
        app.detail
            .apply(request, &story_id, Err(FetchError::Status(StatusCode::NOT_FOUND)));
        app.detail.scroll_down();

        let (_, reloaded) = detail_request(app.reload());
        assert_eq!(reloaded, "9");
        assert_eq!(app.detail.scroll, 0);
        assert!(app.detail.state.is_loading());
    }

    #[test]
    fn test_detail_scroll_saturates() {
        let mut view = DetailView::default();
        view.scroll_up();
        assert_eq!(view.scroll, 0);
        view.scroll_down();
        view.scroll_down();
        view.scroll_up();
        assert_eq!(view.scroll, 1);
    }

    #[test]
    fn test_detail_scroll_stops_at_limit() {
        let mut view = DetailView::default();
        view.set_scroll_limit(3);
        for _ in 0..10 {
            view.scroll_down();
        }
        assert_eq!(view.scroll, 3);

        view.scroll_up();
        assert_eq!(view.scroll, 2);

        view.set_scroll_limit(1);
        assert_eq!(view.scroll, 1);
    }

    #[test]
    fn test_activate_resets_scroll_limit() {
        let mut view = DetailView::default();
        view.set_scroll_limit(0);
        view.activate("5");
        view.scroll_down();
        assert_eq!(view.scroll, 1);
        assert_eq!(view.scroll_limit(), u16::MAX);
    }
}
