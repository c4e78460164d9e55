//! One view per route. Each view owns a page controller from `ui::pages`
//! through [`ui::use_page`] and only renders it.

mod collaborators;
mod favorites;
mod forum;
mod health_experts;
mod landing;
mod onboard;
mod patient_dashboard;
mod researcher_dashboard;

pub use collaborators::Collaborators;
pub use favorites::Favorites;
pub use forum::Forum;
pub use health_experts::HealthExperts;
pub use landing::Landing;
pub use onboard::{PatientOnboard, ResearcherOnboard};
pub use patient_dashboard::PatientDashboard;
pub use researcher_dashboard::ResearcherDashboard;
