//! Global Portfolio Store
//!
//! Reactive wrapper around `PortfolioState`, provided once via context.
//! Reads track only the fields they touch; writes go through the entry
//! points below, which notify exactly the fields a transition changed.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, BackendSource, GitHubSource};
use crate::config::{DataSource, PortfolioConfig};
use crate::data;
use crate::error::FetchError;
use crate::models::{Project, Skill, TimelineEvent};
use crate::state::{
    Completion, FetchTicket, LoadState, PortfolioData, PortfolioState, PortfolioStateStoreFields,
};

#[derive(Clone, Copy)]
pub struct PortfolioStore {
    state: Store<PortfolioState>,
    config: StoredValue<PortfolioConfig>,
}

impl PortfolioStore {
    /// Store seeded with the compiled-in skills and timeline
    pub fn new(config: PortfolioConfig) -> Self {
        let state = PortfolioState::with_static(data::default_skills(), data::default_timeline())
            .with_member_order(config.member_order);
        Self {
            state: Store::new(state),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> PortfolioConfig {
        self.config.get_value()
    }

    // ========================
    // Entry points
    // ========================

    /// Reload from the configured source
    pub fn refresh(&self) {
        match self.config.with_value(PortfolioConfig::data_source) {
            DataSource::Backend(url) => self.load_backend(url),
            DataSource::GitHub => self.fetch_projects(),
        }
    }

    /// Reload projects from GitHub
    pub fn fetch_projects(&self) {
        let ticket = self.begin_fetch();
        let config = self.config.get_value();
        let store = *self;
        spawn_local(async move {
            let source = GitHubSource::new(&config);
            let result = api::load_projects(&source, config.failure_policy).await;
            store.complete_projects(ticket, result);
        });
    }

    /// Reload projects, skills and timeline from the backend
    pub fn fetch_portfolio_data(&self) {
        match self.config.with_value(PortfolioConfig::data_source) {
            DataSource::Backend(url) => self.load_backend(url),
            DataSource::GitHub => {
                log::warn!(target: "store", "no backend configured, loading projects from GitHub");
                self.fetch_projects();
            }
        }
    }

    fn load_backend(&self, url: String) {
        let ticket = self.begin_fetch();
        let store = *self;
        spawn_local(async move {
            let result = BackendSource::new(url).try_fetch_portfolio().await;
            store.complete_portfolio(ticket, result);
        });
    }

    /// No projects held and no fetch in flight (untracked)
    pub fn needs_load(&self) -> bool {
        self.state.with_untracked(|s| s.project_count() == 0 && !s.is_loading())
    }

    pub fn reset_data(&self) {
        self.state.write_untracked().reset();
        self.state.projects().notify();
        self.state.skills().notify();
        self.state.timeline().notify();
        self.state.load().notify();
    }

    // ========================
    // Transitions
    // ========================

    fn begin_fetch(&self) -> FetchTicket {
        let ticket = self.state.write_untracked().begin_fetch();
        self.state.load().notify();
        ticket
    }

    fn complete_projects(&self, ticket: FetchTicket, result: Result<Vec<Project>, FetchError>) -> Completion {
        let completion = self.state.write_untracked().complete_projects(ticket, result);
        match completion {
            Completion::Applied => {
                self.state.projects().notify();
                self.notify_status();
            }
            Completion::Stale => log::warn!(target: "store", "project fetch superseded by a newer one"),
        }
        completion
    }

    fn complete_portfolio(&self, ticket: FetchTicket, result: Result<PortfolioData, FetchError>) -> Completion {
        let completion = self.state.write_untracked().complete_portfolio(ticket, result);
        match completion {
            Completion::Applied => {
                self.state.projects().notify();
                self.state.skills().notify();
                self.state.timeline().notify();
                self.notify_status();
            }
            Completion::Stale => log::warn!(target: "store", "portfolio fetch superseded by a newer one"),
        }
        completion
    }

    fn notify_status(&self) {
        self.state.load().notify();
        self.state.loaded_once().notify();
    }

    // ========================
    // Tracked reads
    // ========================

    pub fn projects(&self) -> Vec<Project> {
        self.state.projects().get()
    }

    pub fn project(&self, id: u32) -> Option<Project> {
        self.state.projects().with(|projects| projects.iter().find(|p| p.id == id).cloned())
    }

    pub fn skills(&self) -> Vec<Skill> {
        self.state.skills().get()
    }

    pub fn skills_by_category(&self) -> Vec<(String, Vec<Skill>)> {
        self.state.skills().track();
        self.state.with_untracked(|s| s.skills_by_category())
    }

    pub fn timeline_sorted(&self) -> Vec<TimelineEvent> {
        self.state.timeline().track();
        self.state.with_untracked(|s| s.timeline_sorted())
    }

    pub fn project_count(&self) -> usize {
        self.state.projects().with(Vec::len)
    }

    pub fn has_data(&self) -> bool {
        self.state.projects().track();
        self.state.skills().track();
        self.state.timeline().track();
        self.state.with_untracked(|s| s.has_data())
    }

    pub fn has_loaded(&self) -> bool {
        self.state.loaded_once().get()
    }

    /// A fetch succeeded and returned no projects
    pub fn has_no_projects(&self) -> bool {
        self.state.projects().track();
        self.state.load().track();
        self.state.loaded_once().track();
        self.state.with_untracked(|s| s.has_no_projects())
    }

    pub fn load_state(&self) -> LoadState {
        self.state.load().get()
    }

    pub fn is_loading(&self) -> bool {
        self.state.load().with(|load| *load == LoadState::Loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.load().with(|load| match load {
            LoadState::Error(message) => Some(message.clone()),
            _ => None,
        })
    }
}

/// Get the portfolio store from context
pub fn use_portfolio_store() -> PortfolioStore {
    expect_context::<PortfolioStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, title: &str) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: "desc".to_string(),
            tags: vec!["Code".to_string()],
            link: format!("https://github.com/example/{}", title),
            stars: None,
            updated_at: None,
        }
    }

    fn with_store<R>(f: impl FnOnce(PortfolioStore) -> R) -> R {
        let owner = Owner::new();
        owner.with(|| f(PortfolioStore::new(PortfolioConfig::default())))
    }

    #[test]
    fn test_initial_store() {
        with_store(|store| {
            assert!(store.needs_load());
            assert!(store.has_data());
            assert!(!store.has_loaded());
            assert!(!store.has_no_projects());
            assert_eq!(store.load_state(), LoadState::Idle);
            assert!(!store.skills_by_category().is_empty());
            assert_eq!(store.timeline_sorted()[0].period, "2023 - Présent");
        });
    }

    #[test]
    fn test_store_applies_only_newest_fetch() {
        with_store(|store| {
            let older = store.begin_fetch();
            let newer = store.begin_fetch();
            assert!(store.is_loading());
            assert!(!store.needs_load());

            let stale = store.complete_projects(older, Ok(vec![project(1, "old")]));
            assert_eq!(stale, Completion::Stale);
            assert!(store.is_loading());
            assert_eq!(store.project_count(), 0);

            let applied = store.complete_projects(newer, Ok(vec![project(1, "new"), project(2, "cli")]));
            assert_eq!(applied, Completion::Applied);
            assert!(!store.is_loading());
            assert_eq!(store.project(2).map(|p| p.title), Some("cli".to_string()));
            assert!(store.has_loaded());
        });
    }

    #[test]
    fn test_store_error_keeps_projects() {
        with_store(|store| {
            let ticket = store.begin_fetch();
            store.complete_projects(ticket, Ok(vec![project(1, "a")]));

            let ticket = store.begin_fetch();
            store.complete_projects(ticket, Err(FetchError::NotFound));

            assert_eq!(store.error(), Some(FetchError::NotFound.user_message()));
            assert_eq!(store.projects(), vec![project(1, "a")]);
            assert!(!store.has_no_projects());
        });
    }

    #[test]
    fn test_store_portfolio_completion_and_reset() {
        with_store(|store| {
            let ticket = store.begin_fetch();
            let data = PortfolioData {
                projects: Vec::new(),
                skills: vec![Skill::new("Rust", 7, "Langages")],
                timeline: Vec::new(),
            };
            assert_eq!(store.complete_portfolio(ticket, Ok(data)), Completion::Applied);
            assert_eq!(store.skills().len(), 1);
            assert!(store.has_no_projects());

            store.reset_data();
            assert!(!store.has_data());
            assert!(store.needs_load());
        });
    }
}
