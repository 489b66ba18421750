use serde::{Deserialize, Serialize};

use super::present;

pub const DEFAULT_STATUS: &str = "Owned";
pub const VISIBILITY_PUBLIC: &str = "public";
pub const VISIBILITY_PRIVATE: &str = "private";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Read / Reading / Want to Read / Owned. Unset renders as "Owned".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub visibility: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
}

impl Book {
    /// Only books marked exactly `public` appear on the page.
    pub fn is_public(&self) -> bool {
        self.visibility == VISIBILITY_PUBLIC
    }

    pub fn status_label(&self) -> &str {
        present(&self.status).unwrap_or(DEFAULT_STATUS)
    }
}
