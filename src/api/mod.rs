//! Data Source Adapters
//!
//! Remote sources of portfolio data, organized by upstream.

mod backend;
mod github;

use async_trait::async_trait;

use crate::config::FailurePolicy;
use crate::error::FetchError;
use crate::models::Project;

pub use backend::BackendSource;
pub use github::GitHubSource;

/// Description used when the upstream has none
pub const DEFAULT_DESCRIPTION: &str = "Pas de description disponible.";

/// Tag used when a project has neither language nor topics
pub const DEFAULT_TAG: &str = "Code";

/// Anything that can produce the project list
#[async_trait(?Send)]
pub trait ProjectSource {
    /// Fetch projects, reporting failures
    async fn try_fetch_projects(&self) -> Result<Vec<Project>, FetchError>;

    /// Fetch projects, failures are logged and become an empty list
    async fn fetch_projects(&self) -> Vec<Project> {
        match self.try_fetch_projects().await {
            Ok(projects) => projects,
            Err(err) => {
                log::error!(target: "api", "project fetch failed, showing none: {}", err);
                Vec::new()
            }
        }
    }
}

/// Fetch projects under a failure policy
pub async fn load_projects<S>(source: &S, policy: FailurePolicy) -> Result<Vec<Project>, FetchError>
where
    S: ProjectSource + ?Sized,
{
    match policy {
        FailurePolicy::FallbackEmpty => Ok(source.fetch_projects().await),
        FailurePolicy::Propagate => source.try_fetch_projects().await,
    }
}

fn description_or_default(description: Option<String>) -> String {
    description
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Completion, PortfolioState};
    use std::cell::Cell;

    /// Source answering from a fixed result
    struct FakeSource {
        result: Result<Vec<Project>, FetchError>,
        calls: Cell<usize>,
    }

    impl FakeSource {
        fn new(result: Result<Vec<Project>, FetchError>) -> Self {
            Self { result, calls: Cell::new(0) }
        }
    }

    #[async_trait(?Send)]
    impl ProjectSource for FakeSource {
        async fn try_fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    fn project(id: u32, title: &str) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            tags: vec![DEFAULT_TAG.to_string()],
            link: format!("https://github.com/example/{}", title),
            stars: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_description_fallback() {
        assert_eq!(description_or_default(None), DEFAULT_DESCRIPTION);
        assert_eq!(description_or_default(Some(String::new())), DEFAULT_DESCRIPTION);
        assert_eq!(description_or_default(Some("  ".to_string())), "  ");
        assert_eq!(description_or_default(Some("CLI".to_string())), "CLI");
    }

    #[tokio::test]
    async fn test_fallback_policy_hides_failures() {
        let source = FakeSource::new(Err(FetchError::Server { status: 500 }));
        let result = load_projects(&source, FailurePolicy::FallbackEmpty).await;
        assert_eq!(result, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn test_propagate_policy_reports_failures() {
        let source = FakeSource::new(Err(FetchError::NotFound));
        let result = load_projects(&source, FailurePolicy::Propagate).await;
        assert_eq!(result, Err(FetchError::NotFound));
    }

    #[tokio::test]
    async fn test_double_fetch_converges() {
        let source = FakeSource::new(Ok(vec![project(1, "a"), project(2, "b")]));

        let mut once = PortfolioState::default();
        let ticket = once.begin_fetch();
        once.complete_projects(ticket, load_projects(&source, FailurePolicy::Propagate).await);

        let mut twice = PortfolioState::default();
        let first = twice.begin_fetch();
        assert!(twice.is_loading());
        let second = twice.begin_fetch();
        let first_result = load_projects(&source, FailurePolicy::Propagate).await;
        let second_result = load_projects(&source, FailurePolicy::Propagate).await;
        assert_eq!(twice.complete_projects(first, first_result), Completion::Stale);
        assert_eq!(twice.complete_projects(second, second_result), Completion::Applied);

        assert_eq!(source.calls.get(), 3);
        assert_eq!(once.projects(), twice.projects());
        assert!(!twice.is_loading());
    }
}
