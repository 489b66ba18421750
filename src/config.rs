use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

const DEFAULT_COUNTER_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycby-VFeMPYFR8BP0mrKJSnmYt38iW2NPaPhZoL269w59hNUQJaiHrjzZCzABphDmtIN4fQ/exec";

/// Site configuration, read from `folio.toml`.
/// Every field has a default, so a missing or partial file still works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding the category JSON files, relative to the page.
    pub asset_dir: String,
    /// Caller IP lookup (`GET`, answers `{"ip": ...}`).
    pub ip_lookup_url: String,
    /// Visit counter (`POST`, answers `{"count": ...}`). Empty disables visit logging.
    pub counter_endpoint: String,
    pub library: LibraryLayout,
    pub interaction: InteractionConfig,
    pub serve: ServeConfig,
}

/// Cosmetic layout of the library section. The markup has two subsections;
/// only one is fed from data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryLayout {
    pub heading_selector: String,
    pub heading_label: String,
    /// Subsection hidden whenever the library renders. Empty skips hiding.
    pub hidden_selector: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Viewport width (px) at or below which in-page navigation collapses the menu.
    pub nav_breakpoint: f64,
    /// Vertical scroll offset (px) past which the navbar gets `scrolled`.
    pub scroll_threshold: f64,
}

/// Local preview server (native binary only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    pub root: String,
    pub address: String,
    pub port: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            asset_dir: "assets/data/".to_string(),
            ip_lookup_url: "https://api.ipify.org?format=json".to_string(),
            counter_endpoint: DEFAULT_COUNTER_ENDPOINT.to_string(),
            library: LibraryLayout::default(),
            interaction: InteractionConfig::default(),
            serve: ServeConfig::default(),
        }
    }
}

impl Default for LibraryLayout {
    fn default() -> Self {
        LibraryLayout {
            heading_selector: "#library .library-subsection:first-child h3".to_string(),
            heading_label: "Featured Books".to_string(),
            hidden_selector: "#library .library-subsection:last-child".to_string(),
        }
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        InteractionConfig {
            nav_breakpoint: 768.0,
            scroll_threshold: 50.0,
        }
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        ServeConfig {
            root: ".".to_string(),
            address: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Load from disk. A missing file yields the defaults; a malformed one is an error.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            log::warn!("{} not found, using default config", path.display());
            return Ok(SiteConfig::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Asset directory with exactly one trailing slash.
    pub fn asset_prefix(&self) -> String {
        let trimmed = self.asset_dir.trim_end_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("{}/", trimmed)
        }
    }

    pub fn counter_enabled(&self) -> bool {
        !self.counter_endpoint.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, SiteConfig::default());
        assert_eq!(cfg.interaction.scroll_threshold, 50.0);
        assert_eq!(cfg.library.heading_label, "Featured Books");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = SiteConfig::from_toml_str(
            r#"
asset_dir = "data"
counter_endpoint = ""

[library]
heading_label = "Bookshelf"
"#,
        )
        .unwrap();
        assert_eq!(cfg.asset_prefix(), "data/");
        assert!(!cfg.counter_enabled());
        assert_eq!(cfg.library.heading_label, "Bookshelf");
        assert_eq!(
            cfg.library.hidden_selector,
            "#library .library-subsection:last-child"
        );
        assert_eq!(cfg.serve.port, 8000);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let err = SiteConfig::from_toml_str("asset_dir = [").unwrap_err();
        assert!(err.to_string().starts_with("Config error"));
    }

    #[test]
    fn asset_prefix_normalizes_slashes() {
        let mut cfg = SiteConfig::default();
        assert_eq!(cfg.asset_prefix(), "assets/data/");
        cfg.asset_dir = "assets/data///".into();
        assert_eq!(cfg.asset_prefix(), "assets/data/");
        cfg.asset_dir = String::new();
        assert_eq!(cfg.asset_prefix(), "");
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = SiteConfig::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, SiteConfig::default());
    }
}
