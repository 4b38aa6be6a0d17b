//! Hash Routes
//!
//! `#/project/{id}` opens a project detail page; any other hash (including
//! section anchors like `#skills`) stays on the home page.

const PROJECT_PREFIX: &str = "#/project/";

/// Element id targeted by a section anchor like `#skills`
///
/// `None` for route hashes (`#/...`) and empty anchors.
pub fn section_anchor(href: &str) -> Option<&str> {
    href.strip_prefix('#')
        .filter(|id| !id.is_empty() && !id.starts_with('/'))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Project(u32),
}

impl Route {
    pub fn from_hash(hash: &str) -> Self {
        hash.strip_prefix(PROJECT_PREFIX)
            .map(|rest| rest.trim_end_matches('/'))
            .and_then(|id| id.parse().ok())
            .map(Route::Project)
            .unwrap_or(Route::Home)
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Project(id) => format!("{}{}", PROJECT_PREFIX, id),
        }
    }

    /// Route of the current page
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|hash| Route::from_hash(&hash))
            .unwrap_or_default()
    }
}
