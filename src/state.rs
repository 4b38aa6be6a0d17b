//! Portfolio State
//!
//! Authoritative in-memory portfolio data and the load lifecycle.
//! Mutated only through its own entry points; read through slices and
//! derived views.

use reactive_stores::Store;

use crate::config::MemberOrder;
use crate::error::FetchError;
use crate::models::{Project, Skill, TimelineEvent};
use crate::views;

/// Load lifecycle: `Idle -> Loading -> {Loaded, Error}`, restartable from any state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// Handle identifying one fetch start
///
/// Only the completion carrying the newest ticket is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What `complete_*` did with a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer fetch started after this one, result dropped
    Stale,
}

/// Full payload of the portfolio backend
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PortfolioData {
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub timeline: Vec<TimelineEvent>,
}

/// Field-level reactive access comes from the `Store` derive; each field is
/// notified separately by `PortfolioStore`.
#[derive(Debug, Clone, Default, Store)]
pub struct PortfolioState {
    projects: Vec<Project>,
    skills: Vec<Skill>,
    timeline: Vec<TimelineEvent>,
    load: LoadState,
    /// Ticket of the newest fetch start
    generation: u64,
    /// At least one fetch has completed (success or error)
    loaded_once: bool,
    member_order: MemberOrder,
}

impl PortfolioState {
    /// State seeded with the compiled-in skills and timeline
    pub fn with_static(skills: Vec<Skill>, timeline: Vec<TimelineEvent>) -> Self {
        Self {
            skills,
            timeline,
            ..Default::default()
        }
    }

    pub fn with_member_order(mut self, order: MemberOrder) -> Self {
        self.member_order = order;
        self
    }

    // ========================
    // Read surface
    // ========================

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn timeline(&self) -> &[TimelineEvent] {
        &self.timeline
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Any collection is non-empty
    pub fn has_data(&self) -> bool {
        !self.projects.is_empty() || !self.skills.is_empty() || !self.timeline.is_empty()
    }

    /// A fetch has completed at least once, whatever its outcome
    pub fn has_loaded(&self) -> bool {
        self.loaded_once
    }

    /// A fetch succeeded with zero projects
    ///
    /// False while loading, after a failure and before the first fetch.
    pub fn has_no_projects(&self) -> bool {
        self.loaded_once && self.load == LoadState::Loaded && self.projects.is_empty()
    }

    pub fn skills_by_category(&self) -> Vec<(String, Vec<Skill>)> {
        views::skills_by_category(&self.skills, self.member_order)
    }

    pub fn timeline_sorted(&self) -> Vec<TimelineEvent> {
        views::timeline_sorted(&self.timeline)
    }

    // ========================
    // Mutations
    // ========================

    /// Enter `Loading`, clearing any previous error
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.load = LoadState::Loading;
        FetchTicket(self.generation)
    }

    /// Apply a project fetch result
    ///
    /// Success replaces the whole project list. Failure keeps the previous list.
    pub fn complete_projects(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Project>, FetchError>,
    ) -> Completion {
        self.complete(ticket, result, |state, projects| state.projects = projects)
    }

    /// Apply a full backend fetch result, replacing all three collections on success
    pub fn complete_portfolio(
        &mut self,
        ticket: FetchTicket,
        result: Result<PortfolioData, FetchError>,
    ) -> Completion {
        self.complete(ticket, result, |state, data| {
            state.projects = data.projects;
            state.skills = data.skills;
            state.timeline = data.timeline;
        })
    }

    fn complete<T>(
        &mut self,
        ticket: FetchTicket,
        result: Result<T, FetchError>,
        apply: impl FnOnce(&mut Self, T),
    ) -> Completion {
        if ticket.0 != self.generation {
            log::debug!(target: "store", "dropping stale fetch #{} (current #{})", ticket.0, self.generation);
            return Completion::Stale;
        }
        self.loaded_once = true;
        match result {
            Ok(value) => {
                apply(self, value);
                self.load = LoadState::Loaded;
            }
            Err(err) => {
                log::error!(target: "store", "fetch failed: {}", err);
                self.load = LoadState::Error(err.user_message());
            }
        }
        Completion::Applied
    }

    /// Clear every collection and the error, leaving `Loading` untouched
    pub fn reset(&mut self) {
        self.projects.clear();
        self.skills.clear();
        self.timeline.clear();
        if matches!(self.load, LoadState::Error(_)) {
            self.load = LoadState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn project(id: u32, title: &str) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: "desc".to_string(),
            tags: vec!["Code".to_string()],
            link: format!("https://github.com/example/{}", title),
            stars: Some(0),
            updated_at: None,
        }
    }

    fn static_state() -> PortfolioState {
        PortfolioState::with_static(data::default_skills(), data::default_timeline())
    }

    #[test]
    fn test_initial_state() {
        let state = static_state();
        assert_eq!(state.load_state(), &LoadState::Idle);
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.project_count(), 0);
        assert!(state.has_data());
        assert!(!state.has_loaded());
        assert!(!PortfolioState::default().has_data());
    }

    #[test]
    fn test_successful_fetch_replaces_projects() {
        let mut state = static_state();

        let first = state.begin_fetch();
        assert!(state.is_loading());
        state.complete_projects(first, Ok(vec![project(1, "a"), project(2, "b")]));

        let second = state.begin_fetch();
        let outcome = state.complete_projects(second, Ok(vec![project(1, "c")]));

        assert_eq!(outcome, Completion::Applied);
        assert_eq!(state.load_state(), &LoadState::Loaded);
        assert_eq!(state.projects(), &[project(1, "c")]);
        assert!(state.has_loaded());
    }

    #[test]
    fn test_failed_fetch_keeps_previous_projects() {
        let mut state = static_state();
        let ticket = state.begin_fetch();
        state.complete_projects(ticket, Ok(vec![project(1, "a")]));

        let ticket = state.begin_fetch();
        state.complete_projects(ticket, Err(FetchError::Unreachable("connection refused".to_string())));

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some(FetchError::Unreachable(String::new()).user_message().as_str()));
        assert_eq!(state.projects(), &[project(1, "a")]);
    }

    #[test]
    fn test_retry_clears_error() {
        let mut state = static_state();
        let ticket = state.begin_fetch();
        state.complete_projects(ticket, Err(FetchError::NotFound));
        assert!(state.error().is_some());

        state.begin_fetch();

        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let mut state = static_state();
        let ticket = state.begin_fetch();
        state.complete_projects(ticket, Ok(Vec::new()));

        assert_eq!(state.load_state(), &LoadState::Loaded);
        assert_eq!(state.error(), None);
        assert_eq!(state.project_count(), 0);
    }

    #[test]
    fn test_zero_projects_only_after_successful_fetch() {
        let mut state = static_state();
        assert!(!state.has_no_projects());

        let ticket = state.begin_fetch();
        assert!(!state.has_no_projects());

        state.complete_projects(ticket, Err(FetchError::Server { status: 503 }));
        assert!(state.has_loaded());
        assert!(!state.has_no_projects());

        let ticket = state.begin_fetch();
        assert!(!state.has_no_projects());
        state.complete_projects(ticket, Ok(Vec::new()));
        assert!(state.has_no_projects());

        let ticket = state.begin_fetch();
        state.complete_projects(ticket, Ok(vec![project(1, "a")]));
        assert!(!state.has_no_projects());
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut state = static_state();
        let older = state.begin_fetch();
        let newer = state.begin_fetch();

        assert_eq!(state.complete_projects(older, Ok(vec![project(1, "old")])), Completion::Stale);
        assert!(state.is_loading());
        assert_eq!(state.project_count(), 0);

        assert_eq!(state.complete_projects(newer, Ok(vec![project(1, "new")])), Completion::Applied);
        assert_eq!(state.projects(), &[project(1, "new")]);

        // Late arrival of an already superseded fetch changes nothing
        assert_eq!(state.complete_projects(older, Err(FetchError::NotFound)), Completion::Stale);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_complete_portfolio_replaces_all_collections() {
        let mut state = static_state();
        let ticket = state.begin_fetch();
        let data = PortfolioData {
            projects: vec![project(1, "api")],
            skills: vec![Skill::new("Rust", 7, "Langages")],
            timeline: vec![TimelineEvent::new("2024", "Stage", "Acme", "")],
        };

        state.complete_portfolio(ticket, Ok(data));

        assert_eq!(state.project_count(), 1);
        assert_eq!(state.skills().len(), 1);
        assert_eq!(state.timeline().len(), 1);
    }

    #[test]
    fn test_reset_clears_data_and_error_only() {
        let mut state = static_state();
        let ticket = state.begin_fetch();
        state.complete_projects(ticket, Err(FetchError::Server { status: 502 }));

        state.reset();

        assert!(!state.has_data());
        assert_eq!(state.error(), None);
        assert_eq!(state.load_state(), &LoadState::Idle);

        state.begin_fetch();
        state.reset();
        assert!(state.is_loading());
    }

    #[test]
    fn test_project_lookup_and_derived_views() {
        let mut state = static_state();
        let ticket = state.begin_fetch();
        state.complete_projects(ticket, Ok(vec![project(1, "a"), project(2, "b")]));

        assert_eq!(state.project(2).map(|p| p.title.as_str()), Some("b"));
        assert!(state.project(3).is_none());
        assert_eq!(state.skills_by_category()[0].0, "Langages");
        assert_eq!(state.timeline_sorted()[0].period, "2023 - Présent");
    }
}
