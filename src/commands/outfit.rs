//! Outfit Commands
//!
//! Frontend bindings for the wardrobe and outfit endpoints.

use outfit_core::schedule::{sort_by_recent, sort_by_scheduled_day};
use outfit_core::session::{self, BuilderMode, SaveForm, SessionUpdate};
use outfit_core::wire::OutfitSummary;
use outfit_core::{BuilderState, Item, OutfitId, OutfitRepository, OutfitResult, PaletteSource};

use super::backend;

pub async fn fetch_palette() -> OutfitResult<Vec<Item>> {
    let items = backend().fetch_palette().await?;
    log::info!("Loaded {} wardrobe items", items.len());
    Ok(items)
}

pub async fn save_outfit(
    mode: BuilderMode,
    state: &BuilderState,
    form: &SaveForm,
) -> OutfitResult<SessionUpdate> {
    session::save_outfit(&backend(), mode, state, form).await
}

pub async fn open_outfit(state: &BuilderState, id: OutfitId) -> OutfitResult<SessionUpdate> {
    session::load_for_edit(&backend(), state, id).await
}

pub async fn delete_outfit(id: OutfitId) -> OutfitResult<()> {
    backend().delete(id).await
}

/// Saved outfits, most recently updated first
pub async fn list_outfits() -> OutfitResult<Vec<OutfitSummary>> {
    let mut outfits = backend().list_all().await?;
    sort_by_recent(&mut outfits);
    Ok(outfits)
}

/// Scheduled outfits, earliest day first
pub async fn list_scheduled_outfits() -> OutfitResult<Vec<OutfitSummary>> {
    let mut outfits = backend().list_scheduled().await?;
    sort_by_scheduled_day(&mut outfits);
    Ok(outfits)
}
