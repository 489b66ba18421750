use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    /// Credential verification page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
