//! Component-Local Interaction State
//!
//! Skill category filter, hovered project and active timeline entry.
//! Each component owns its own copy; nothing here is shared or persisted.

use crate::models::Skill;

/// Filter value meaning "no category filter"
pub const ALL_CATEGORIES: &str = "Toutes";

/// Selected skill category, `None` = all
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillFilter {
    active: Option<String>,
}

impl SkillFilter {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Select a category; the "Toutes" sentinel clears the filter
    pub fn select(&mut self, category: &str) {
        self.active = if category == ALL_CATEGORIES {
            None
        } else {
            Some(category.to_string())
        };
    }

    /// Whether a filter button for `category` is the active one
    pub fn is_selected(&self, category: &str) -> bool {
        match &self.active {
            None => category == ALL_CATEGORIES,
            Some(active) => active == category,
        }
    }

    /// Skills of the active category, exact label match
    pub fn apply(&self, skills: &[Skill]) -> Vec<Skill> {
        match &self.active {
            None => skills.to_vec(),
            Some(category) => skills.iter().filter(|s| &s.category == category).cloned().collect(),
        }
    }
}

/// Filter buttons: the sentinel first, then each category in first-seen order
pub fn categories(skills: &[Skill]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for skill in skills {
        if !categories.iter().any(|c| *c == skill.category) {
            categories.push(skill.category.clone());
        }
    }
    categories
}

/// Hover / active marker over an identifier or index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlight<T: Copy + PartialEq> {
    current: Option<T>,
}

impl<T: Copy + PartialEq> Highlight<T> {
    pub fn set(&mut self, value: Option<T>) {
        self.current = value;
    }

    pub fn current(&self) -> Option<T> {
        self.current
    }

    pub fn is(&self, value: T) -> bool {
        self.current == Some(value)
    }
}

/// Hovered project id
pub type ProjectHover = Highlight<u32>;

/// Active timeline index
pub type TimelineFocus = Highlight<usize>;
