//! Wardrobe Frontend App
//!
//! Main application component with three-column layout: wardrobe palette,
//! outfit canvas, saved outfits.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use outfit_core::palette::RequestSequencer;
use outfit_core::BuilderMode;
use reactive_stores::Store;

use crate::commands;
use crate::components::{BuilderToolbar, OutfitCanvas, OutfitHistory, ToastStack, WardrobeSidebar};
use crate::context::AppContext;
use crate::store::{open_outfit, store_apply, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let mode = commands::initial_mode();
    let store: AppStore = Store::new(AppState::default());
    let ctx = AppContext::new(BuilderMode::Create);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load the palette on mount and on every refresh; a response that
    // arrives after a newer request was issued is dropped
    let sequencer = Rc::new(RequestSequencer::new());
    Effect::new(move |_| {
        let _ = ctx.palette_version.get();
        let sequencer = Rc::clone(&sequencer);
        let ticket = sequencer.issue();
        spawn_local(async move {
            let result = commands::fetch_palette().await;
            if !sequencer.is_current(ticket) {
                log::debug!("Dropping stale palette response");
                return;
            }
            match result {
                Ok(items) => store_apply(&store, |state| state.set_palette(items)),
                Err(err) => ctx.error(&err),
            }
        });
    });

    // `?edit=<id>` opens a stored outfit
    if let BuilderMode::Edit(id) = mode {
        open_outfit(store, ctx, id);
    }

    view! {
        <div class="app-layout">
            // Left: Wardrobe palette
            <WardrobeSidebar />

            // Center: Builder
            <main class="builder-main">
                <BuilderToolbar />
                <OutfitCanvas />
            </main>

            // Right: Saved and scheduled outfits
            <OutfitHistory />

            <ToastStack />
        </div>
    }
}
