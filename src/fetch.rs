use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{FolioError, Result};

/// Where category documents come from.
#[async_trait(?Send)]
pub trait DataSource {
    /// Raw body of the named resource (e.g. `profile.json`).
    async fn fetch_text(&self, resource: &str) -> Result<String>;
}

/// Fetches resources over HTTP from `<page url>/<asset dir>/<name>`.
pub struct HttpSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpSource {
    /// `page_url` is the document location; relative asset dirs resolve against it.
    pub fn new(page_url: &str, asset_prefix: &str) -> Result<Self> {
        let page = Url::parse(page_url)
            .map_err(|e| FolioError::Config(format!("Bad page URL {}: {}", page_url, e)))?;
        let base = page
            .join(asset_prefix)
            .map_err(|e| FolioError::Config(format!("Bad asset dir {}: {}", asset_prefix, e)))?;
        Ok(HttpSource {
            client: reqwest::Client::new(),
            base,
        })
    }

    pub fn resource_url(&self, resource: &str) -> Result<Url> {
        self.base
            .join(resource)
            .map_err(|e| FolioError::Config(format!("Bad resource name {}: {}", resource, e)))
    }
}

#[async_trait(?Send)]
impl DataSource for HttpSource {
    async fn fetch_text(&self, resource: &str) -> Result<String> {
        let url = self.resource_url(resource)?;
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(FolioError::Status {
                resource: resource.to_string(),
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.text().await?)
    }
}

/// Fetch and parse a resource. Every failure is logged and turned into `None`,
/// which loaders handle exactly like an empty document.
pub async fn fetch_data<T: DeserializeOwned>(source: &dyn DataSource, resource: &str) -> Option<T> {
    let body = match source.fetch_text(resource).await {
        Ok(body) => body,
        Err(e) => {
            log::error!("[fetch] {}", e);
            return None;
        }
    };

    match serde_json::from_str(&body) {
        Ok(data) => Some(data),
        Err(e) => {
            log::error!(
                "[fetch] {}",
                FolioError::Parse {
                    resource: resource.to_string(),
                    message: e.to_string(),
                }
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resources_resolve_under_asset_dir() {
        let src = HttpSource::new("https://me.example.com/index.html", "assets/data/").unwrap();
        assert_eq!(
            src.resource_url("profile.json").unwrap().as_str(),
            "https://me.example.com/assets/data/profile.json"
        );
    }

    #[test]
    fn resources_resolve_from_nested_page() {
        let src = HttpSource::new("https://host/site/", "assets/data/").unwrap();
        assert_eq!(
            src.resource_url("links.json").unwrap().as_str(),
            "https://host/site/assets/data/links.json"
        );
    }

    #[test]
    fn bad_page_url_is_config_error() {
        assert!(matches!(
            HttpSource::new("not a url", "assets/data/"),
            Err(FolioError::Config(_))
        ));
    }
}
