//! Application Configuration
//!
//! Compiled-in defaults with build-time overrides:
//! - `PORTFOLIO_GITHUB_OWNER`
//! - `PORTFOLIO_API_BASE`
//! - `PORTFOLIO_BACKEND_URL`
//! - `PORTFOLIO_PER_PAGE`
//! - `PORTFOLIO_FAILURE_POLICY` (`fallback-empty` | `propagate`)
//! - `PORTFOLIO_SKILL_ORDER` (`input` | `alphabetical`)

use std::str::FromStr;

/// Upstream page-size ceiling, a single page is requested
pub const MAX_PAGE_SIZE: u8 = 100;

pub const DEFAULT_GITHUB_OWNER: &str = "Alex16JA";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// What the store does when a data source fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Failures become an empty project list, no error is shown
    FallbackEmpty,
    /// Failures surface as the store error message (retry banner)
    #[default]
    Propagate,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fallback-empty" | "fallback" => Ok(FailurePolicy::FallbackEmpty),
            "propagate" => Ok(FailurePolicy::Propagate),
            other => Err(format!("unknown failure policy: {}", other)),
        }
    }
}

/// Ordering of skills inside each category group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberOrder {
    /// Keep the input order
    #[default]
    Input,
    /// Alphabetical by name, case-insensitive
    Alphabetical,
}

impl FromStr for MemberOrder {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "input" => Ok(MemberOrder::Input),
            "alphabetical" | "alpha" => Ok(MemberOrder::Alphabetical),
            other => Err(format!("unknown skill order: {}", other)),
        }
    }
}

/// Where `refresh` loads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Full payload from the portfolio backend
    Backend(String),
    /// Project list only, from the GitHub API
    GitHub,
}

/// Raw build-time override values
#[derive(Debug, Clone, Copy, Default)]
struct Overrides<'a> {
    owner: Option<&'a str>,
    api_base: Option<&'a str>,
    backend: Option<&'a str>,
    per_page: Option<&'a str>,
    failure_policy: Option<&'a str>,
    skill_order: Option<&'a str>,
}

/// Hero banner text
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub description: String,
    pub cv_link: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Alexandre Pham".to_string(),
            title: "Développeur Full-Stack".to_string(),
            description: "Étudiant en BUT 3 Informatique passionné par le développement web, \
                          les architectures cloud et l'intelligence artificielle."
                .to_string(),
            cv_link: "/CV_Alexandre_PHAM_2025.pdf".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioConfig {
    pub github_owner: String,
    pub api_base: String,
    per_page: u8,
    pub failure_policy: FailurePolicy,
    pub member_order: MemberOrder,
    /// Full-data backend (`/api/data`); GitHub is used when unset
    pub backend_url: Option<String>,
    pub profile: Profile,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            github_owner: DEFAULT_GITHUB_OWNER.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            per_page: MAX_PAGE_SIZE,
            failure_policy: FailurePolicy::default(),
            member_order: MemberOrder::default(),
            backend_url: None,
            profile: Profile::default(),
        }
    }
}

impl PortfolioConfig {
    /// Defaults overridden by build-time environment variables
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(Overrides {
            owner: option_env!("PORTFOLIO_GITHUB_OWNER"),
            api_base: option_env!("PORTFOLIO_API_BASE"),
            backend: option_env!("PORTFOLIO_BACKEND_URL"),
            per_page: option_env!("PORTFOLIO_PER_PAGE"),
            failure_policy: option_env!("PORTFOLIO_FAILURE_POLICY"),
            skill_order: option_env!("PORTFOLIO_SKILL_ORDER"),
        })
    }

    /// Blank values are ignored; unparsable ones are logged and ignored
    fn with_overrides(mut self, overrides: Overrides<'_>) -> Self {
        if let Some(owner) = non_blank(overrides.owner) {
            self.github_owner = owner.to_string();
        }
        if let Some(api_base) = non_blank(overrides.api_base) {
            self.api_base = api_base.trim_end_matches('/').to_string();
        }
        self.backend_url = non_blank(overrides.backend).map(str::to_string).or(self.backend_url);
        if let Some(per_page) = parse_override::<u8>("PORTFOLIO_PER_PAGE", overrides.per_page) {
            self = self.with_per_page(per_page);
        }
        if let Some(policy) = parse_override("PORTFOLIO_FAILURE_POLICY", overrides.failure_policy) {
            self = self.with_failure_policy(policy);
        }
        if let Some(order) = parse_override("PORTFOLIO_SKILL_ORDER", overrides.skill_order) {
            self.member_order = order;
        }
        self
    }

    /// Backend when a URL is configured, GitHub otherwise
    pub fn data_source(&self) -> DataSource {
        match &self.backend_url {
            Some(url) => DataSource::Backend(url.clone()),
            None => DataSource::GitHub,
        }
    }

    pub fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Page size, clamped to `1..=100`
    pub fn with_per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_override<T>(name: &str, value: Option<&str>) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = non_blank(value)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            log::warn!(target: "config", "ignoring {}={:?}: {}", name, value, err);
            None
        }
    }
}
