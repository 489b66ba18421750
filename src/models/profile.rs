use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::present;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    #[serde(default)]
    pub location: Option<String>,
    pub about: About,
    /// Provider name -> URL (or `mailto:` link for `email`).
    #[serde(default)]
    pub social: BTreeMap<String, Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub summary: String,
    #[serde(default)]
    pub extended_summary: Option<String>,
    pub personal: String,
}

impl Profile {
    pub fn social_link(&self, provider: &str) -> Option<&str> {
        self.social.get(provider).and_then(present)
    }
}

impl About {
    /// The long-form summary, or the short one when no long form exists.
    pub fn professional_summary(&self) -> &str {
        present(&self.extended_summary).unwrap_or(&self.summary)
    }
}
