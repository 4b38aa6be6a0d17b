//! UI Components
//!
//! Leptos components for the portfolio pages.

mod hero;
mod home;
mod navbar;
mod project_detail;
mod project_list;
mod skills_grid;
mod status_banner;
mod timeline;

pub use hero::Hero;
pub use home::HomePage;
pub use navbar::Navbar;
pub use project_detail::ProjectDetailPage;
pub use project_list::ProjectList;
pub use skills_grid::SkillsGrid;
pub use status_banner::StatusBanner;
pub use timeline::Timeline;
