//! Outfit Canvas Component
//!
//! Fixed-size surface rendering placed items in paint order.

use leptos::prelude::*;
use leptos_canvas_gestures::*;
use outfit_core::canvas::render_order;
use outfit_core::{ItemId, CANVAS_SIZE};

use crate::components::CanvasItem;
use crate::store::{store_apply, use_app_store, AppStateStoreFields};

#[component]
pub fn OutfitCanvas() -> impl IntoView {
    let store = use_app_store();
    let gestures = create_gesture_signals();

    bind_global_pointer(gestures, move |effect| {
        store_apply(&store, |state| state.apply_gesture(effect));
    });

    let ordered_ids = move || {
        store.builder().with(|state| {
            render_order(&state.outfit.items)
                .into_iter()
                .map(|placed| placed.id())
                .collect::<Vec<ItemId>>()
        })
    };
    let is_empty = move || store.builder().with(|state| state.outfit.items.is_empty());

    // Items stop propagation, so a press reaching the canvas hit empty space
    let on_background_mousedown = move |_ev: web_sys::MouseEvent| {
        store_apply(&store, |state| state.set_selected(None));
    };

    view! {
        <div
            class="outfit-canvas"
            style=format!("width: {}px; height: {}px;", CANVAS_SIZE.width, CANVAS_SIZE.height)
            on:mousedown=on_background_mousedown
        >
            <Show when=is_empty>
                <div class="canvas-placeholder">
                    <p>"Your canvas is empty"</p>
                    <p class="canvas-placeholder-hint">"Pick items from your wardrobe to start an outfit"</p>
                </div>
            </Show>
            <For
                each=ordered_ids
                key=|id| *id
                children=move |id| view! { <CanvasItem id=id gestures=gestures /> }
            />
        </div>
    }
}
