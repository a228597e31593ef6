//! Repository Layer
//!
//! Abstract interfaces for outfit persistence and the wardrobe palette.
//! `HttpBackend` talks to the REST API; tests use an in-memory fake.

mod http;

pub use http::{error_from_response, HttpBackend};

use async_trait::async_trait;

use crate::error::OutfitResult;
use crate::model::{Item, Outfit, OutfitId, OutfitPatch};
use crate::wire::OutfitSummary;

/// Outfit lifecycle operations
///
/// Futures are not `Send`: the browser transport is single-threaded.
#[async_trait(?Send)]
pub trait OutfitRepository {
    /// Persist a new outfit, returning it with its assigned id
    async fn create(&self, outfit: &Outfit) -> OutfitResult<Outfit>;

    /// Fetch one outfit; a missing id is `OutfitError::NotFound`
    async fn read(&self, id: OutfitId) -> OutfitResult<Outfit>;

    /// Partial update; fields absent from `patch` are left as stored
    async fn update(&self, id: OutfitId, patch: &OutfitPatch) -> OutfitResult<Outfit>;

    async fn delete(&self, id: OutfitId) -> OutfitResult<()>;

    /// All outfits, in backend order
    async fn list_all(&self) -> OutfitResult<Vec<OutfitSummary>>;

    /// Outfits with a scheduled date, in backend order
    async fn list_scheduled(&self) -> OutfitResult<Vec<OutfitSummary>>;

    /// Attach a rendered PNG preview to a saved outfit, returning its URL
    async fn upload_preview(&self, id: OutfitId, png: Vec<u8>) -> OutfitResult<String>;
}

/// Source of the user's wardrobe items
#[async_trait(?Send)]
pub trait PaletteSource {
    async fn fetch_palette(&self) -> OutfitResult<Vec<Item>>;
}

/// Process-wide holder of the bearer token issued at login
pub trait CredentialStore {
    fn access_token(&self) -> Option<String>;
}
