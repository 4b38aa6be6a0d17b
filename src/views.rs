//! Derived Views
//!
//! Pure functions computing grouped and sorted views from store collections.
//! They run on every read, so a view is never staler than the state it reads.

use std::cmp::Reverse;

use crate::config::MemberOrder;
use crate::models::{Skill, TimelineEvent};

/// Skills grouped by category label
///
/// Groups appear in first-seen order. Members keep input order unless
/// `order` is `Alphabetical`.
pub fn skills_by_category(skills: &[Skill], order: MemberOrder) -> Vec<(String, Vec<Skill>)> {
    let mut groups: Vec<(String, Vec<Skill>)> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|(category, _)| *category == skill.category) {
            Some((_, members)) => members.push(skill.clone()),
            None => groups.push((skill.category.clone(), vec![skill.clone()])),
        }
    }

    if order == MemberOrder::Alphabetical {
        for (_, members) in groups.iter_mut() {
            members.sort_by(|a, b| {
                a.name
                    .to_lowercase()
                    .cmp(&b.name.to_lowercase())
                    .then_with(|| a.name.cmp(&b.name))
            });
        }
    }
    groups
}

/// Leading year of a period label
///
/// Takes the text before the first space and reads its leading digits,
/// so "2019-2020" gives 2019. Labels without a leading number give 0.
pub fn leading_year(period: &str) -> i32 {
    let token = period.trim_start().split(' ').next().unwrap_or("");
    let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Timeline ordered by leading year, most recent first
///
/// Stable: events with the same leading year keep their input order.
pub fn timeline_sorted(events: &[TimelineEvent]) -> Vec<TimelineEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| Reverse(leading_year(&event.period)));
    sorted
}
