//! Credential Store
//!
//! The login flow leaves the bearer token in local storage.

use outfit_core::CredentialStore;

/// Local storage key holding the bearer token
pub const ACCESS_TOKEN_KEY: &str = "access_token";

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageCredentials;

impl CredentialStore for LocalStorageCredentials {
    fn access_token(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage
            .get_item(ACCESS_TOKEN_KEY)
            .ok()?
            .filter(|token| !token.trim().is_empty())
    }
}
