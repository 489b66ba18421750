pub mod article;
pub mod book;
pub mod certification;
pub mod education;
pub mod experience;
pub mod link;
pub mod profile;
pub mod project;

pub use article::Article;
pub use book::Book;
pub use certification::Certification;
pub use education::Education;
pub use experience::Experience;
pub use link::Link;
pub use profile::{About, Profile};
pub use project::{Project, ProjectKind};

/// Treat `None` and `Some("")` alike: content files use empty strings for "unset".
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
