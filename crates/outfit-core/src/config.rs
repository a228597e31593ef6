//! API Configuration

/// Backend base URL used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Where the REST backend lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Use `url` when present and non-blank, else the default
    pub fn from_optional(url: Option<&str>) -> Self {
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(u) => Self::new(u),
            None => Self::default(),
        }
    }

    /// Absolute URL for an API path such as `/outfits/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Server origin that serves uploaded media (base URL without `/api`)
    pub fn media_origin(&self) -> &str {
        self.base_url.strip_suffix("/api").unwrap_or(&self.base_url)
    }
}
