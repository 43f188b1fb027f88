mod about;
mod footer;
mod hero;
mod projects;

pub use about::AboutSection;
pub use footer::SiteFooter;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
