//! Frontend Models
//!
//! Portfolio data structures shared by the store, the data sources and the views.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Highest skill proficiency level
pub const MAX_SKILL_LEVEL: u8 = 10;

/// Project shown in the portfolio grid
///
/// `id` is a dense 1-based index assigned per load cycle, never an upstream identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: String,
    pub stars: Option<u32>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// How recently a project was updated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Recent,
    Active,
    Dormant,
    Unknown,
}

impl Freshness {
    pub fn label(&self) -> &'static str {
        match self {
            Freshness::Recent => "Récent",
            Freshness::Active => "Actif",
            Freshness::Dormant => "En pause",
            Freshness::Unknown => "",
        }
    }
}

impl Project {
    pub fn freshness(&self, now: DateTime<Utc>) -> Freshness {
        let Some(updated_at) = self.updated_at else {
            return Freshness::Unknown;
        };
        let age = now.signed_duration_since(updated_at);
        if age < Duration::days(30) {
            Freshness::Recent
        } else if age < Duration::days(365) {
            Freshness::Active
        } else {
            Freshness::Dormant
        }
    }
}

/// Skill entry, level is kept within 0..=10
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: String,
    pub icon: Option<String>,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u8, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: level.min(MAX_SKILL_LEVEL),
            category: category.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Career timeline entry
///
/// `period` is free text: "2023", "2019-2020", "2023 - Présent", "Avril 2025 - Juin 2025".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub period: String,
    pub title: String,
    pub institution: String,
    pub description: String,
}

impl TimelineEvent {
    pub fn new(
        period: impl Into<String>,
        title: impl Into<String>,
        institution: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            period: period.into(),
            title: title.into(),
            institution: institution.into(),
            description: description.into(),
        }
    }
}

/// Technology badge on a project write-up
#[derive(Debug, Clone, PartialEq)]
pub struct TechStack {
    pub name: &'static str,
    pub icon: Option<&'static str>,
}

/// Long-form write-up for a project detail page, keyed by repository name
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub repository: &'static str,
    /// Markdown
    pub description: &'static str,
    pub screenshots: &'static [&'static str],
    pub stack: &'static [TechStack],
    /// Markdown
    pub retrospective: Option<&'static str>,
}
