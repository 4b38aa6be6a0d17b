//! GitHub Source
//!
//! Lists an owner's public repositories and maps them to projects.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

use super::{description_or_default, ProjectSource, DEFAULT_TAG};
use crate::config::PortfolioConfig;
use crate::error::FetchError;
use crate::models::Project;

/// Topics kept per project, after the language
const MAX_TOPICS: usize = 4;

/// Characters escaped in the owner path segment
const OWNER_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Repository record as returned by `GET /users/{owner}/repos`
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    pub stargazers_count: u32,
    pub updated_at: DateTime<Utc>,
    pub fork: bool,
}

impl GitHubRepo {
    fn validate(&self) -> Result<(), FetchError> {
        if self.name.trim().is_empty() {
            return Err(FetchError::Malformed(format!("repository {} has no name", self.id)));
        }
        if self.html_url.trim().is_empty() {
            return Err(FetchError::Malformed(format!("repository {} has no url", self.name)));
        }
        Ok(())
    }

    /// Language first, then up to four topics; `["Code"]` when both are missing
    fn tags(&self) -> Vec<String> {
        let mut tags = Vec::new();
        if let Some(language) = self.language.as_deref().filter(|l| !l.is_empty()) {
            tags.push(language.to_string());
        }
        if let Some(topics) = &self.topics {
            tags.extend(topics.iter().take(MAX_TOPICS).cloned());
        }
        if tags.is_empty() {
            tags.push(DEFAULT_TAG.to_string());
        }
        tags
    }
}

/// Parse and validate a repository listing. Any bad record rejects the whole body.
pub fn decode_repos(body: &str) -> Result<Vec<GitHubRepo>, FetchError> {
    let repos: Vec<GitHubRepo> = serde_json::from_str(body)?;
    for repo in &repos {
        repo.validate()?;
    }
    Ok(repos)
}

/// Drop forks and number the rest 1..=N in upstream order
pub fn map_repos(repos: Vec<GitHubRepo>) -> Vec<Project> {
    repos
        .into_iter()
        .filter(|repo| !repo.fork)
        .enumerate()
        .map(|(index, repo)| {
            let tags = repo.tags();
            Project {
                id: index as u32 + 1,
                title: repo.name,
                description: description_or_default(repo.description),
                tags,
                link: repo.html_url,
                stars: Some(repo.stargazers_count),
                updated_at: Some(repo.updated_at),
            }
        })
        .collect()
}

pub struct GitHubSource {
    client: reqwest::Client,
    url: String,
    per_page: u8,
}

impl GitHubSource {
    pub fn new(config: &PortfolioConfig) -> Self {
        let owner = utf8_percent_encode(&config.github_owner, OWNER_SEGMENT);
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/users/{}/repos", config.api_base.trim_end_matches('/'), owner),
            per_page: config.per_page(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl ProjectSource for GitHubSource {
    async fn try_fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
        let per_page = self.per_page.to_string();
        log::info!(target: "github", "listing repositories from {}", self.url());

        let response = self
            .client
            .get(&self.url)
            .query(&[("sort", "updated"), ("direction", "desc"), ("per_page", per_page.as_str())])
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if let Some(err) = FetchError::from_status(status.as_u16(), status.canonical_reason(), &body) {
            return Err(err);
        }

        let repos = decode_repos(&body)?;
        let total = repos.len();
        let projects = map_repos(repos);
        log::info!(target: "github", "loaded {} projects ({} forks skipped)", projects.len(), total - projects.len());
        Ok(projects)
    }
}
