//! Category loaders.
//! Every list category runs the same fetch -> filter -> render-or-hide flow,
//! described by a [`Section`]. Profile, projects and library add a little on top.

use serde::de::DeserializeOwned;

use crate::config::{LibraryLayout, SiteConfig};
use crate::fetch::{fetch_data, DataSource};
use crate::models::{
    Article, Book, Certification, Education, Experience, Link, Profile, Project, ProjectKind,
};
use crate::page::{hide_unless, Page};
use crate::render;

/// One list category bound to its markup.
pub struct Section<T> {
    pub name: &'static str,
    pub resource: &'static str,
    /// Element whose contents are replaced with the rendered fragments.
    pub container: &'static str,
    /// Element hidden when there is nothing to show.
    pub section: &'static str,
    /// Entries failing the filter are dropped before the empty check.
    pub filter: Option<fn(&T) -> bool>,
    pub render: fn(&T) -> String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Hidden,
    Rendered(usize),
}

pub const EXPERIENCE: Section<Experience> = Section {
    name: "experience",
    resource: "experience.json",
    container: "#experience-list",
    section: "#experience",
    filter: None,
    render: render::experience_item,
};

pub const EDUCATION: Section<Education> = Section {
    name: "education",
    resource: "education.json",
    container: "#education-list",
    section: "#education",
    filter: None,
    render: render::education_card,
};

pub const CERTIFICATIONS: Section<Certification> = Section {
    name: "certifications",
    resource: "certifications.json",
    container: "#certifications-list",
    section: "#certifications",
    filter: None,
    render: render::certification_card,
};

pub const PROJECTS: Section<Project> = Section {
    name: "projects",
    resource: "projects.json",
    container: "#projects-list",
    section: "#projects",
    filter: None,
    render: render::project_card,
};

pub const EXPLORATION: Section<Project> = Section {
    name: "exploration",
    resource: "projects.json",
    container: "#exploration-list",
    section: "#exploration",
    filter: None,
    render: render::project_card,
};

pub const LIBRARY: Section<Book> = Section {
    name: "library",
    resource: "library.json",
    container: "#digital-books-list",
    section: "#library",
    filter: Some(Book::is_public),
    render: render::book_card,
};

pub const ARTICLES: Section<Article> = Section {
    name: "articles",
    resource: "articles.json",
    container: "#articles-list",
    section: "#knowledge-base",
    filter: None,
    render: render::article_card,
};

pub const LINKS: Section<Link> = Section {
    name: "links",
    resource: "links.json",
    container: "#links-list",
    section: "#vault",
    filter: None,
    render: render::link_card,
};

pub const PROFILE_RESOURCE: &str = "profile.json";

/// Render already-fetched entries. `None` means the fetch failed.
pub fn render_section<T>(page: &dyn Page, section: &Section<T>, items: Option<Vec<T>>) -> Outcome {
    let items: Vec<T> = match section.filter {
        Some(keep) => items.unwrap_or_default().into_iter().filter(|i| keep(i)).collect(),
        None => items.unwrap_or_default(),
    };

    if !hide_unless(page, !items.is_empty(), section.section) {
        log::info!("[sections] {}: nothing to show, section hidden", section.name);
        return Outcome::Hidden;
    }

    let html: String = items.iter().map(section.render).collect();
    if !page.set_html(section.container, &html) {
        log::warn!("[sections] {}: container {} missing", section.name, section.container);
    }
    Outcome::Rendered(items.len())
}

pub async fn load_section<T: DeserializeOwned>(
    source: &dyn DataSource,
    page: &dyn Page,
    section: &Section<T>,
) -> Outcome {
    let items: Option<Vec<T>> = fetch_data(source, section.resource).await;
    render_section(page, section, items)
}

/// Fill navbar, hero, about and footer. Returns `false` when the profile could
/// not be loaded, in which case the page is left untouched.
pub async fn load_profile(source: &dyn DataSource, page: &dyn Page, year: i32) -> bool {
    let profile: Profile = match fetch_data(source, PROFILE_RESOURCE).await {
        Some(p) => p,
        None => return false,
    };

    page.set_text("#nav-logo", &profile.name);
    page.set_html(".hero-content", &render::hero_block(&profile));
    page.set_html("#about-content", &render::about_block(&profile));
    page.set_html("#footer-info", &render::footer_block(&profile));
    page.set_text("#year", &year.to_string());
    true
}

/// One fetch, two sections: entries split by `type`, each half rendered or
/// hidden on its own.
pub async fn load_projects(source: &dyn DataSource, page: &dyn Page) -> (Outcome, Outcome) {
    let all: Vec<Project> = fetch_data(source, PROJECTS.resource).await.unwrap_or_default();

    let mut projects = Vec::new();
    let mut exploration = Vec::new();
    for item in all {
        match item.kind {
            ProjectKind::Project => projects.push(item),
            ProjectKind::Exploration => exploration.push(item),
            ProjectKind::Other => {}
        }
    }

    (
        render_section(page, &PROJECTS, Some(projects)),
        render_section(page, &EXPLORATION, Some(exploration)),
    )
}

/// Public books only. When anything renders, the configured heading is
/// relabelled and the unused subsection hidden.
pub async fn load_library(source: &dyn DataSource, page: &dyn Page, layout: &LibraryLayout) -> Outcome {
    let outcome = load_section(source, page, &LIBRARY).await;
    if let Outcome::Rendered(_) = outcome {
        if !layout.hidden_selector.is_empty() {
            page.hide(&layout.hidden_selector);
        }
        if !layout.heading_selector.is_empty() {
            page.set_text(&layout.heading_selector, &layout.heading_label);
        }
    }
    outcome
}

/// What a full load did, per section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub profile: bool,
    pub sections: Vec<(&'static str, Outcome)>,
}

impl LoadReport {
    pub fn outcome(&self, name: &str) -> Option<Outcome> {
        self.sections.iter().find(|(n, _)| *n == name).map(|(_, o)| *o)
    }

    pub fn hidden_count(&self) -> usize {
        self.sections.iter().filter(|(_, o)| *o == Outcome::Hidden).count()
    }
}

/// Load every category, one after another, in page order.
pub async fn load_all(
    source: &dyn DataSource,
    page: &dyn Page,
    config: &SiteConfig,
    year: i32,
) -> LoadReport {
    let profile = load_profile(source, page, year).await;

    let mut sections = Vec::with_capacity(9);
    sections.push((EXPERIENCE.name, load_section(source, page, &EXPERIENCE).await));
    sections.push((EDUCATION.name, load_section(source, page, &EDUCATION).await));
    sections.push((CERTIFICATIONS.name, load_section(source, page, &CERTIFICATIONS).await));

    let (projects, exploration) = load_projects(source, page).await;
    sections.push((PROJECTS.name, projects));
    sections.push((EXPLORATION.name, exploration));

    sections.push((LIBRARY.name, load_library(source, page, &config.library).await));
    sections.push((ARTICLES.name, load_section(source, page, &ARTICLES).await));
    sections.push((LINKS.name, load_section(source, page, &LINKS).await));

    let report = LoadReport { profile, sections };
    log::info!(
        "[sections] page loaded: profile={}, {} of {} sections hidden",
        report.profile,
        report.hidden_count(),
        report.sections.len()
    );
    report
}
