//! Static Portfolio Data
//!
//! Skills, career timeline and project write-ups compiled into the bundle.
//! Projects themselves come from the data source at runtime.

use crate::models::{ProjectDetail, Skill, TechStack, TimelineEvent};

const DEVICON: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

/// (name, level, category, devicon slug)
const SKILLS: &[(&str, u8, &str, &str)] = &[
    ("Java", 8, "Langages", "java/java-original"),
    ("Python", 9, "Langages", "python/python-original"),
    ("C", 6, "Langages", "c/c-original"),
    ("TypeScript", 8, "Langages", "typescript/typescript-original"),
    ("PHP", 6, "Langages", "php/php-original"),
    ("Shell", 7, "Langages", "bash/bash-original"),
    ("Angular", 8, "Frontend", "angular/angular-original"),
    ("Flask", 9, "Backend", "flask/flask-original"),
    ("JUnit", 7, "Backend", "junit/junit-original"),
    ("PostgreSQL", 8, "Base de données", "postgresql/postgresql-original"),
    ("MySQL", 7, "Base de données", "mysql/mysql-original"),
    ("MongoDB", 7, "Base de données", "mongodb/mongodb-original"),
    ("Docker", 8, "DevOps", "docker/docker-original"),
    ("Git/GitHub", 9, "DevOps", "github/github-original"),
    ("Linux (Ubuntu)", 8, "DevOps", "ubuntu/ubuntu-original"),
    ("VSCode", 9, "Outils", "vscode/vscode-original"),
    ("Figma", 6, "Outils", "figma/figma-original"),
    ("Canva", 6, "Outils", "canva/canva-original"),
    ("Trello", 7, "Outils", "trello/trello-original"),
    ("Agile/Scrum", 8, "Méthodologies", "jira/jira-original"),
];

const TIMELINE: &[(&str, &str, &str, &str)] = &[
    (
        "Juillet 2025 - Décembre 2025",
        "Équipier Polyvalent",
        "McDonald's",
        "Travail en équipe dans un environnement à rythme soutenu. \
         Compétences développées : polyvalence, ponctualité.",
    ),
    (
        "Avril 2025 - Juin 2025",
        "Stage Développeur Web (Angular)",
        "Césarée",
        "Développement Front-End avec Angular. \
         Conception d'interfaces utilisateurs dynamiques et réactives.",
    ),
    (
        "2023 - Présent",
        "BUT Informatique 3ème année",
        "IUT de Montreuil",
        "Formation complète en informatique : développement web, bases de données, \
         réseaux et gestion de projets.",
    ),
    (
        "2023",
        "Baccalauréat Général - Mention Assez Bien",
        "Lycée",
        "Baccalauréat avec spécialités Mathématiques et NSI.",
    ),
];

const PROJECT_DETAILS: &[ProjectDetail] = &[ProjectDetail {
    repository: "portfolio",
    description: "Portfolio personnel en **Rust** compilé en WebAssembly.\n\n\
                  Les projets sont chargés depuis l'API GitHub au démarrage, \
                  les compétences et le parcours sont embarqués dans le bundle.",
    screenshots: &[],
    stack: &[
        TechStack { name: "Rust", icon: Some("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/rust/rust-original.svg") },
        TechStack { name: "Leptos", icon: None },
        TechStack { name: "WebAssembly", icon: Some("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/wasm/wasm-original.svg") },
    ],
    retrospective: Some("Un bon terrain pour apprendre la réactivité fine et la gestion d'état côté client."),
}];

pub fn default_skills() -> Vec<Skill> {
    SKILLS
        .iter()
        .map(|(name, level, category, slug)| {
            Skill::new(*name, *level, *category).with_icon(format!("{}/{}.svg", DEVICON, slug))
        })
        .collect()
}

pub fn default_timeline() -> Vec<TimelineEvent> {
    TIMELINE
        .iter()
        .map(|(period, title, institution, description)| {
            TimelineEvent::new(*period, *title, *institution, *description)
        })
        .collect()
}

/// Write-up for a repository, matched case-insensitively on its name
pub fn project_detail(repository: &str) -> Option<&'static ProjectDetail> {
    find_detail(PROJECT_DETAILS, repository)
}

fn find_detail<'a>(details: &'a [ProjectDetail], repository: &str) -> Option<&'a ProjectDetail> {
    details.iter().find(|d| d.repository.eq_ignore_ascii_case(repository))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MAX_SKILL_LEVEL;

    #[test]
    fn test_static_skills_are_bounded() {
        let skills = default_skills();
        assert_eq!(skills.len(), SKILLS.len());
        assert!(skills.iter().all(|s| s.level <= MAX_SKILL_LEVEL));
        assert!(skills.iter().all(|s| s.icon.as_deref().is_some_and(|i| i.ends_with(".svg"))));
    }

    #[test]
    fn test_static_timeline_keeps_order() {
        let timeline = default_timeline();
        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline[0].institution, "McDonald's");
        assert_eq!(timeline[3].period, "2023");
    }

    #[test]
    fn test_project_detail_lookup() {
        assert!(project_detail("Portfolio").is_some());
        assert!(project_detail("unknown-repo").is_none());
    }
}
