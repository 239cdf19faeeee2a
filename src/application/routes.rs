//! Navigable views addressed by path.

use std::fmt;

/// The two views the client can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    List,
    /// `/story/<id>`; the id may be empty.
    Story(String),
}

impl Route {
    /// Parses a path. Anything that is not a story path falls back to the list.
    ///
    /// ```
    /// use storydeck::application::Route;
    ///
    /// assert_eq!(Route::parse("/story/42"), Route::Story("42".to_string()));
    /// assert_eq!(Route::parse("/nowhere"), Route::List);
    /// ```
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        match trimmed.strip_prefix("/story") {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                let id = rest.trim_start_matches('/').trim_end_matches('/');
                Route::Story(id.to_string())
            }
            _ => Route::List,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => f.write_str("/"),
            Route::Story(id) => write!(f, "/story/{id}"),
        }
    }
}
