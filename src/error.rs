use std::fmt;

/// Everything that can go wrong inside folio.
/// Loaders never surface these to the page; they log and fall back.
#[derive(Debug)]
pub enum FolioError {
    /// Transport failure (DNS, connection, CORS, body read).
    Http(String),
    /// The server answered with a non-success status.
    Status { resource: String, status: u16 },
    /// The body was not the JSON shape we expected.
    Parse { resource: String, message: String },
    Io(std::io::Error),
    Config(String),
    /// Rejected user input (content manager).
    Invalid(String),
    /// A browser API call failed.
    Dom(String),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolioError::Http(msg) => write!(f, "HTTP error: {}", msg),
            FolioError::Status { resource, status } => {
                write!(f, "Failed to load {} (status {})", resource, status)
            }
            FolioError::Parse { resource, message } => {
                write!(f, "Failed to parse {}: {}", resource, message)
            }
            FolioError::Io(e) => write!(f, "I/O error: {}", e),
            FolioError::Config(msg) => write!(f, "Config error: {}", msg),
            FolioError::Invalid(msg) => write!(f, "{}", msg),
            FolioError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for FolioError {}

impl From<reqwest::Error> for FolioError {
    fn from(e: reqwest::Error) -> Self {
        FolioError::Http(e.to_string())
    }
}

impl From<std::io::Error> for FolioError {
    fn from(e: std::io::Error) -> Self {
        FolioError::Io(e)
    }
}

impl From<toml::de::Error> for FolioError {
    fn from(e: toml::de::Error) -> Self {
        FolioError::Config(e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FolioError {
    fn from(js_val: wasm_bindgen::JsValue) -> Self {
        let message = js_val
            .as_string()
            .unwrap_or_else(|| format!("{:?}", js_val));
        FolioError::Dom(message)
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_resource() {
        let e = FolioError::Status {
            resource: "links.json".into(),
            status: 404,
        };
        assert_eq!(e.to_string(), "Failed to load links.json (status 404)");
    }

    #[test]
    fn invalid_is_bare_message() {
        let e = FolioError::Invalid("Visibility must be 'public' or 'private'".into());
        assert_eq!(e.to_string(), "Visibility must be 'public' or 'private'");
    }
}
