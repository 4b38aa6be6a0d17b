//! Portfolio Backend Source
//!
//! Full portfolio payload (`projects`, `skills`, `timeline`) served by the
//! portfolio API at `/api/data`.

use async_trait::async_trait;
use serde::Deserialize;

use super::{description_or_default, ProjectSource};
use crate::error::FetchError;
use crate::models::{Project, Skill, TimelineEvent, MAX_SKILL_LEVEL};
use crate::state::PortfolioData;

#[derive(Deserialize)]
struct WireProject {
    titre: String,
    description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    lien_github: String,
}

#[derive(Deserialize)]
struct WireSkill {
    nom: String,
    niveau: u8,
    categorie: String,
    icon: Option<String>,
}

#[derive(Deserialize)]
struct WireEvent {
    annee: String,
    titre: String,
    etablissement: String,
    description: String,
}

#[derive(Deserialize)]
struct WirePayload {
    projects: Vec<WireProject>,
    skills: Vec<WireSkill>,
    timeline: Vec<WireEvent>,
}

/// Parse and validate the backend payload
///
/// Projects are renumbered 1..=N like every other source.
pub fn decode_portfolio(body: &str) -> Result<PortfolioData, FetchError> {
    let payload: WirePayload = serde_json::from_str(body)?;

    let projects = payload
        .projects
        .into_iter()
        .enumerate()
        .map(|(index, p)| Project {
            id: index as u32 + 1,
            title: p.titre,
            description: description_or_default(p.description),
            tags: p.tags,
            link: p.lien_github,
            stars: None,
            updated_at: None,
        })
        .collect();

    let skills = payload
        .skills
        .into_iter()
        .map(|s| {
            if s.niveau > MAX_SKILL_LEVEL {
                return Err(FetchError::Malformed(format!("skill {} has level {}", s.nom, s.niveau)));
            }
            let skill = Skill::new(s.nom, s.niveau, s.categorie);
            Ok(match s.icon {
                Some(icon) => skill.with_icon(icon),
                None => skill,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let timeline = payload
        .timeline
        .into_iter()
        .map(|e| TimelineEvent::new(e.annee, e.titre, e.etablissement, e.description))
        .collect();

    Ok(PortfolioData { projects, skills, timeline })
}

pub struct BackendSource {
    client: reqwest::Client,
    url: String,
}

impl BackendSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub async fn try_fetch_portfolio(&self) -> Result<PortfolioData, FetchError> {
        log::info!(target: "backend", "loading portfolio data from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if let Some(err) = FetchError::from_status(status.as_u16(), status.canonical_reason(), &body) {
            return Err(err);
        }

        let data = decode_portfolio(&body)?;
        log::info!(
            target: "backend",
            "portfolio data loaded: {} projects, {} skills, {} timeline events",
            data.projects.len(),
            data.skills.len(),
            data.timeline.len()
        );
        Ok(data)
    }
}

#[async_trait(?Send)]
impl ProjectSource for BackendSource {
    async fn try_fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
        self.try_fetch_portfolio().await.map(|data| data.projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "projects": [
            {"id": 7, "titre": "TaskFlow", "description": "Gestion de projets",
             "tags": ["Angular", "Node.js"], "lien_github": "https://github.com/a/taskflow",
             "image_placeholder": ""},
            {"id": 9, "titre": "SecureChat", "description": null,
             "tags": [], "lien_github": "https://github.com/a/securechat"}
        ],
        "skills": [
            {"nom": "Python", "niveau": 9, "categorie": "Langages"},
            {"nom": "Docker", "niveau": 8, "categorie": "DevOps"}
        ],
        "timeline": [
            {"annee": "2023 - 2026", "titre": "BUT Informatique",
             "etablissement": "IUT", "description": "Formation"}
        ]
    }"#;

    #[test]
    fn test_decode_payload() {
        let data = decode_portfolio(PAYLOAD).unwrap();

        assert_eq!(data.projects.len(), 2);
        assert_eq!(data.projects[0].id, 1);
        assert_eq!(data.projects[1].id, 2);
        assert_eq!(data.projects[1].description, "Pas de description disponible.");
        assert_eq!(data.skills[0], Skill::new("Python", 9, "Langages"));
        assert_eq!(data.timeline[0].institution, "IUT");
    }

    #[test]
    fn test_out_of_range_level_is_malformed() {
        let body = r#"{"projects": [], "skills": [{"nom": "X", "niveau": 11, "categorie": "Y"}], "timeline": []}"#;
        assert!(matches!(decode_portfolio(body), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn test_missing_collection_is_malformed() {
        let body = r#"{"projects": [], "skills": []}"#;
        assert!(matches!(decode_portfolio(body), Err(FetchError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let source = BackendSource::new("http://127.0.0.1:1/api/data");
        assert!(matches!(source.try_fetch_portfolio().await, Err(FetchError::Unreachable(_))));
        assert!(source.fetch_projects().await.is_empty());
    }
}
