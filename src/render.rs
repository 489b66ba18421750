//! HTML fragments for every category.
//! All content text and attribute values pass through [`html_escape`]; the data
//! files are hand-edited and may contain `<`, `&` or quotes.

use crate::models::{
    present, Article, Book, Certification, Education, Experience, Link, Profile, Project,
};

/// Known social providers, in display order, with their button labels.
pub const SOCIAL_PROVIDERS: &[(&str, &str)] = &[
    ("github", "GitHub"),
    ("linkedin", "LinkedIn"),
    ("twitter", "Twitter"),
    ("portfolio", "Portfolio"),
    ("IIT M", "IIT Madras"),
    ("microsoft_learn", "Microsoft Learn"),
    ("email", "Email"),
];

const CHIP_STYLE: &str =
    "font-size: 0.8rem; background: rgba(255,255,255,0.1); padding: 2px 8px; border-radius: 4px;";

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `<a>` opening in a new tab. `label` is already-escaped HTML.
fn external_link(href: &str, class: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener" class="{}">{}</a>"#,
        html_escape(href),
        class,
        label
    )
}

// ── Profile ───────────────────────────────────────────

pub fn hero_block(profile: &Profile) -> String {
    let location = match present(&profile.location) {
        Some(loc) => format!(r#"<p class="location">📍 {}</p>"#, html_escape(loc)),
        None => String::new(),
    };

    let socials: String = SOCIAL_PROVIDERS
        .iter()
        .filter_map(|(key, label)| {
            let href = profile.social_link(key)?;
            Some(if *key == "email" {
                format!(r#"<a href="{}" class="social-link">{}</a>"#, html_escape(href), label)
            } else {
                external_link(href, "social-link", label)
            })
        })
        .collect();

    format!(
        r#"<h1>{}</h1><p class="tagline">{}</p>{}<p class="bio">{}</p><div class="social-links">{}</div>"#,
        html_escape(&profile.name),
        html_escape(&profile.tagline),
        location,
        html_escape(&profile.about.summary),
        socials
    )
}

pub fn about_block(profile: &Profile) -> String {
    format!(
        r#"<div class="card"><h3>Professional Summary</h3><p>{}</p></div><div class="card"><h3>Personal Life</h3><p>{}</p></div>"#,
        html_escape(profile.about.professional_summary()),
        html_escape(&profile.about.personal)
    )
}

pub fn footer_block(profile: &Profile) -> String {
    let contact = match profile.social_link("email") {
        Some(href) => format!(
            r#"<a href="{}" class="social-link">Get in Touch</a>"#,
            html_escape(href)
        ),
        None => String::new(),
    };
    format!(
        r#"<h3>{}</h3><p>{}</p><div class="social-links footer-social">{}</div>"#,
        html_escape(&profile.name),
        html_escape(&profile.tagline),
        contact
    )
}

// ── Timeline & cards ──────────────────────────────────

pub fn experience_item(item: &Experience) -> String {
    let company = match present(&item.url) {
        Some(url) => external_link(url, "company-link", &html_escape(&item.company)),
        None => html_escape(&item.company),
    };
    format!(
        r#"<div class="timeline-item"><h3>{}</h3><span class="meta">{} | {}</span><p>{}</p></div>"#,
        html_escape(&item.role),
        company,
        html_escape(&item.period),
        html_escape(&item.description)
    )
}

pub fn education_card(item: &Education) -> String {
    format!(
        r#"<div class="card"><h3>{}</h3><span class="meta">{} | {}</span><p>{}</p></div>"#,
        html_escape(&item.degree),
        html_escape(&item.institution),
        html_escape(&item.period),
        html_escape(&item.description)
    )
}

pub fn certification_card(item: &Certification) -> String {
    let verify = match present(&item.url) {
        Some(url) => external_link(url, "btn-link", "Verify Credential &rarr;"),
        None => String::new(),
    };
    format!(
        r#"<div class="card"><h3>{}</h3><span class="meta">{} | {}</span>{}</div>"#,
        html_escape(&item.name),
        html_escape(&item.issuer),
        html_escape(&item.date),
        verify
    )
}

/// Shared by the projects and exploration sections.
pub fn project_card(item: &Project) -> String {
    let chips: String = item
        .tech
        .iter()
        .map(|t| format!(r#"<span class="chip" style="{}">{}</span>"#, CHIP_STYLE, html_escape(t)))
        .collect();

    let mut links = String::new();
    if let Some(repo) = present(&item.repo_url) {
        links.push_str(&external_link(repo, "btn-link", "GitHub"));
    }
    if let Some(demo) = present(&item.demo_url) {
        links.push_str(&external_link(demo, "btn-link", "Live Demo"));
    }

    format!(
        r#"<div class="card"><h3>{}</h3><p>{}</p><div class="tech-list">{}</div><div class="project-links">{}</div></div>"#,
        html_escape(&item.title),
        html_escape(&item.description),
        chips,
        links
    )
}

pub fn book_card(book: &Book) -> String {
    let link = match present(&book.link) {
        Some(url) => external_link(url, "btn-link", "View Book"),
        None => String::new(),
    };
    format!(
        r#"<div class="card"><h3>{}</h3><span class="meta">by {}</span><div class="book-meta"><span class="chip" style="{}">{}</span><span class="format">{}</span></div>{}</div>"#,
        html_escape(&book.title),
        html_escape(&book.author),
        CHIP_STYLE,
        html_escape(book.status_label()),
        html_escape(&book.format),
        link
    )
}

pub fn article_card(item: &Article) -> String {
    let tags: String = item
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="tag">#{} </span>"#, html_escape(tag)))
        .collect();
    format!(
        r#"<div class="card"><h3>{}</h3><p>{}</p><div class="tags">{}</div></div>"#,
        external_link(&item.url, "", &format!("{} &nearr;", html_escape(&item.title))),
        html_escape(&item.notes),
        tags
    )
}

pub fn link_card(item: &Link) -> String {
    format!(
        r#"<div class="card vault-card"><span class="meta">{}</span><h3>{}</h3></div>"#,
        html_escape(&item.category),
        external_link(&item.url, "", &format!("{} &nearr;", html_escape(&item.title)))
    )
}
