//! Content manager: append entries to the category JSON files.
//! Existing entries are kept verbatim, including fields folio doesn't model.

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use serde_json::Value;

use crate::error::{FolioError, Result};
use crate::models::book::{VISIBILITY_PRIVATE, VISIBILITY_PUBLIC};
use crate::models::{Article, Book, Link, Project, ProjectKind};

#[derive(Debug, Clone, Args)]
pub struct BookInput {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub author: String,
    /// Read / Reading / Want to Read / Owned
    #[arg(long)]
    pub status: String,
    /// Digital / Hard Copy
    #[arg(long)]
    pub format: String,
    /// public or private
    #[arg(long)]
    pub visibility: String,
    #[arg(long)]
    pub link: Option<String>,
    #[arg(long)]
    pub isbn: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ProjectInput {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    /// Comma separated
    #[arg(long)]
    pub tech: String,
    /// project or exploration
    #[arg(long = "type")]
    pub kind: String,
    #[arg(long)]
    pub repo: Option<String>,
    #[arg(long)]
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ArticleInput {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub url: String,
    #[arg(long)]
    pub notes: String,
    /// Comma separated
    #[arg(long)]
    pub tags: String,
}

#[derive(Debug, Clone, Args)]
pub struct LinkInput {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub url: String,
    #[arg(long)]
    pub category: String,
}

fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FolioError::Invalid(format!("{} is required.", field)));
    }
    Ok(value.to_string())
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// "Rust, WASM ,CSS" -> ["Rust", "WASM", "CSS"]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl BookInput {
    pub fn into_book(self) -> Result<Book> {
        let visibility = self.visibility.trim().to_lowercase();
        if visibility != VISIBILITY_PUBLIC && visibility != VISIBILITY_PRIVATE {
            return Err(FolioError::Invalid(
                "Visibility must be 'public' or 'private'".into(),
            ));
        }
        Ok(Book {
            title: required("Title", &self.title)?,
            author: required("Author", &self.author)?,
            status: Some(required("Status", &self.status)?),
            format: required("Format", &self.format)?,
            link: optional(&self.link),
            visibility,
            isbn: optional(&self.isbn),
        })
    }
}

impl ProjectInput {
    pub fn into_project(self) -> Result<Project> {
        let kind = ProjectKind::parse(&self.kind).ok_or_else(|| {
            FolioError::Invalid("Type must be 'project' or 'exploration'".into())
        })?;
        Ok(Project {
            kind,
            title: required("Title", &self.title)?,
            description: required("Description", &self.description)?,
            tech: split_list(&required("Technologies", &self.tech)?),
            repo_url: optional(&self.repo),
            demo_url: optional(&self.demo),
        })
    }
}

impl ArticleInput {
    pub fn into_article(self) -> Result<Article> {
        Ok(Article {
            title: required("Title", &self.title)?,
            url: required("URL", &self.url)?,
            notes: required("Notes", &self.notes)?,
            tags: split_list(&required("Tags", &self.tags)?),
        })
    }
}

impl LinkInput {
    pub fn into_link(self) -> Result<Link> {
        Ok(Link {
            title: required("Title", &self.title)?,
            url: required("URL", &self.url)?,
            category: required("Category", &self.category)?,
        })
    }
}

/// The directory holding the category files.
pub struct ContentStore {
    dir: PathBuf,
}

impl ContentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ContentStore { dir: dir.into() }
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Current entries. A missing file, malformed JSON or a non-list document
    /// all count as an empty list; any other read failure is an error so the
    /// file is never overwritten blind.
    pub fn load_list(&self, file: &str) -> Result<Vec<Value>> {
        let path = self.path(file);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => Ok(items),
            Ok(_) => {
                log::warn!("{} is not a list, starting fresh", path.display());
                Ok(Vec::new())
            }
            Err(e) => {
                log::warn!("{} is not valid JSON ({}), starting fresh", path.display(), e);
                Ok(Vec::new())
            }
        }
    }

    fn save_list(&self, file: &str, items: &[Value]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let body = serde_json::to_string_pretty(items).map_err(|e| FolioError::Parse {
            resource: file.to_string(),
            message: e.to_string(),
        })?;
        fs::write(self.path(file), body)?;
        log::info!("Successfully saved to {}", file);
        Ok(())
    }

    /// Append one entry; returns the new entry count.
    pub fn append<T: Serialize>(&self, file: &str, entry: &T) -> Result<usize> {
        let value = serde_json::to_value(entry).map_err(|e| FolioError::Parse {
            resource: file.to_string(),
            message: e.to_string(),
        })?;
        let mut items = self.load_list(file)?;
        items.push(value);
        self.save_list(file, &items)?;
        Ok(items.len())
    }

    pub fn add_book(&self, input: BookInput) -> Result<usize> {
        self.append("library.json", &input.into_book()?)
    }

    pub fn add_project(&self, input: ProjectInput) -> Result<usize> {
        self.append("projects.json", &input.into_project()?)
    }

    pub fn add_article(&self, input: ArticleInput) -> Result<usize> {
        self.append("articles.json", &input.into_article()?)
    }

    pub fn add_link(&self, input: LinkInput) -> Result<usize> {
        self.append("links.json", &input.into_link()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_input(visibility: &str) -> BookInput {
        BookInput {
            title: "The Rust Programming Language".into(),
            author: "Klabnik & Nichols".into(),
            status: "Read".into(),
            format: "Digital".into(),
            visibility: visibility.into(),
            link: Some("  ".into()),
            isbn: Some("978-1718503106".into()),
        }
    }

    #[test]
    fn split_list_trims_and_drops_blanks() {
        assert_eq!(split_list("Rust, WASM ,, CSS "), vec!["Rust", "WASM", "CSS"]);
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn book_visibility_is_normalized_and_checked() {
        let book = book_input("Public").into_book().unwrap();
        assert_eq!(book.visibility, "public");
        assert!(book.link.is_none());
        assert_eq!(book.isbn.as_deref(), Some("978-1718503106"));

        let err = book_input("friends").into_book().unwrap_err();
        assert_eq!(err.to_string(), "Visibility must be 'public' or 'private'");
    }

    #[test]
    fn project_type_is_checked() {
        let input = ProjectInput {
            title: "folio".into(),
            description: "site".into(),
            tech: "Rust, WASM".into(),
            kind: "talk".into(),
            repo: None,
            demo: None,
        };
        assert!(input.clone().into_project().is_err());

        let project = ProjectInput { kind: "exploration".into(), ..input }.into_project().unwrap();
        assert_eq!(project.kind, ProjectKind::Exploration);
        assert_eq!(project.tech, vec!["Rust", "WASM"]);
    }

    #[test]
    fn required_fields_reject_blank() {
        let input = LinkInput {
            title: " ".into(),
            url: "https://x".into(),
            category: "Tools".into(),
        };
        assert_eq!(input.into_link().unwrap_err().to_string(), "Title is required.");
    }

    #[test]
    fn append_creates_file_and_keeps_existing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path());
        fs::write(
            store.path("links.json"),
            r#"[{"title":"Old","url":"https://old","category":"Misc","pinned":true}]"#,
        )
        .unwrap();

        let count = store
            .add_link(LinkInput {
                title: "New".into(),
                url: "https://new".into(),
                category: "Tools".into(),
            })
            .unwrap();
        assert_eq!(count, 2);

        let items = store.load_list("links.json").unwrap();
        assert_eq!(items[0]["pinned"], true);
        assert_eq!(items[1]["title"], "New");

        let raw = fs::read_to_string(store.path("links.json")).unwrap();
        assert!(raw.contains("\n  {"));
    }

    #[test]
    fn malformed_or_object_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path());
        fs::write(store.path("library.json"), r#"{"digital": [], "hardcopy": []}"#).unwrap();
        assert!(store.load_list("library.json").unwrap().is_empty());

        fs::write(store.path("articles.json"), "[{oops").unwrap();
        assert!(store.load_list("articles.json").unwrap().is_empty());

        assert_eq!(store.add_book(book_input("private")).unwrap(), 1);
    }

    #[test]
    fn missing_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path().join("assets/data"));
        store
            .add_article(ArticleInput {
                title: "Ownership".into(),
                url: "https://doc.rust-lang.org".into(),
                notes: "Borrowing rules".into(),
                tags: "rust, memory".into(),
            })
            .unwrap();
        let items = store.load_list("articles.json").unwrap();
        assert_eq!(items[0]["tags"][1], "memory");
    }

    #[test]
    fn unreadable_file_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path());
        let original: &[u8] = b"[{\"title\":\"Keep\",\"url\":\"https://k\",\"category\":\"\xff\"}]";
        fs::write(store.path("links.json"), original).unwrap();

        let result = store.add_link(LinkInput {
            title: "New".into(),
            url: "https://new".into(),
            category: "Tools".into(),
        });
        assert!(matches!(result, Err(FolioError::Io(_))));
        assert_eq!(fs::read(store.path("links.json")).unwrap(), original);
    }
}
