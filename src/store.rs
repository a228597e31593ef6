//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The builder
//! snapshot is replaced wholesale by every command.

use leptos::prelude::*;
use leptos::task::spawn_local;
use outfit_core::wire::OutfitSummary;
use outfit_core::{BuilderState, OutfitId, OutfitResult, SessionUpdate};
use reactive_stores::Store;

use crate::commands;
use crate::context::AppContext;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Outfit under construction, palette and selection
    pub builder: BuilderState,
    /// Every saved outfit, most recently updated first
    pub saved_outfits: Vec<OutfitSummary>,
    /// Outfits that have a scheduled day
    pub scheduled_outfits: Vec<OutfitSummary>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the builder snapshot with the command's result
pub fn store_apply(store: &AppStore, command: impl FnOnce(&BuilderState) -> BuilderState) {
    let next = {
        let current = store.builder().read_untracked();
        command(&current)
    };
    store.builder().set(next);
}

/// Like [`store_apply`] for commands that can be rejected; a rejection
/// leaves the snapshot untouched and is shown to the user
pub fn store_try_apply(
    store: &AppStore,
    ctx: &AppContext,
    command: impl FnOnce(&BuilderState) -> OutfitResult<BuilderState>,
) -> bool {
    let next = {
        let current = store.builder().read_untracked();
        command(&current)
    };
    match next {
        Ok(state) => {
            store.builder().set(state);
            true
        }
        Err(err) => {
            ctx.error(&err);
            false
        }
    }
}

/// Show the result of a save or load
pub fn store_enter(store: &AppStore, ctx: &AppContext, update: SessionUpdate) {
    store.builder().set(update.state);
    ctx.set_mode(update.mode);
}

/// Remove a deleted outfit from both lists
pub fn store_remove_outfit(store: &AppStore, id: OutfitId) {
    store.saved_outfits().write().retain(|outfit| outfit.id != id);
    store.scheduled_outfits().write().retain(|outfit| outfit.id != id);
}

/// Load stored outfit `id` into the builder; on failure start a fresh outfit
pub fn open_outfit(store: AppStore, ctx: AppContext, id: OutfitId) {
    spawn_local(async move {
        let current = store.builder().get_untracked();
        match commands::open_outfit(&current, id).await {
            Ok(update) => {
                let outfit = update.state.outfit;
                store_apply(&store, |state| state.load_outfit(outfit));
                ctx.set_mode(update.mode);
            }
            Err(err) => {
                ctx.error(&err);
                let fresh = SessionUpdate::fresh(&store.builder().get_untracked());
                store_enter(&store, &ctx, fresh);
            }
        }
    });
}
