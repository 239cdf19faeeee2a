use crate::application::{App, Screen};
use crate::infrastructure::FetchRequest;
use crossterm::event::{KeyCode, KeyModifiers};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Fetch(FetchRequest),
}

impl From<Option<FetchRequest>> for Action {
    fn from(request: Option<FetchRequest>) -> Self {
        request.map(Action::Fetch).unwrap_or(Action::None)
    }
}

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) -> Action {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            return Action::Quit;
        }

        match app.screen {
            Screen::List => Self::handle_list_mode(app, key),
            Screen::Detail => Self::handle_detail_mode(app, key),
        }
    }

    fn handle_list_mode(app: &mut App, key: KeyCode) -> Action {
        match key {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Up | KeyCode::Char('k') => app.list.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.list.select_next(),
            KeyCode::Char('f') => app.list.cycle_filter(),
            KeyCode::Char('F') => app.list.reset_filter(),
            KeyCode::Char('s') => app.list.toggle_order(),
            KeyCode::Enter => return app.open_selected().into(),
            KeyCode::Char('r') => return app.reload().into(),
            _ => {}
        }
        Action::None
    }

    fn handle_detail_mode(app: &mut App, key: KeyCode) -> Action {
        match key {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Up | KeyCode::Char('k') => app.detail.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => app.detail.scroll_down(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => return app.go_home().into(),
            KeyCode::Char('r') => return app.reload().into(),
            _ => {}
        }
        Action::None
    }
}
