//! Backend Command Wrappers
//!
//! Browser-side bindings to the outfit backend, organized by domain.

mod credentials;
mod location;
mod outfit;

use outfit_core::{ApiConfig, HttpBackend};

// Re-export all public items
pub use credentials::*;
pub use location::*;
pub use outfit::*;

/// Backend base URL, fixed at build time through `WARDROBE_API_URL`
pub fn api_config() -> ApiConfig {
    ApiConfig::from_optional(option_env!("WARDROBE_API_URL"))
}

pub type Backend = HttpBackend<LocalStorageCredentials>;

fn backend() -> Backend {
    HttpBackend::new(api_config(), LocalStorageCredentials)
}
