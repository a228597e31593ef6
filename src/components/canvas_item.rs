//! Canvas Item Component
//!
//! One placed item on the outfit canvas with its selection controls.

use leptos::prelude::*;
use leptos_canvas_gestures::*;
use outfit_core::canvas::GestureEffect;
use outfit_core::ItemId;

use crate::store::{store_apply, use_app_store, AppStateStoreFields};

#[component]
pub fn CanvasItem(id: ItemId, gestures: GestureSignals) -> impl IntoView {
    let store = use_app_store();
    let placed = Memo::new(move |_| store.builder().with(|state| state.item(id).cloned()));
    let selected = Memo::new(move |_| store.builder().with(|state| state.is_selected(id)));
    let dragging = move || gestures.gesture_read.get().is_dragging(id);

    let apply = move |effect: GestureEffect| store_apply(&store, |state| state.apply_gesture(effect));
    let on_mousedown = make_on_body_mousedown(gestures, id, apply);
    let current_size = move || {
        placed
            .get_untracked()
            .map(|placed| placed.size)
            .unwrap_or_default()
    };
    let on_resize_mousedown = make_on_resize_mousedown(gestures, id, current_size, apply);

    let style = move || {
        let Some(placed) = placed.get() else {
            return String::from("display: none;");
        };
        let position = gestures.gesture_read.get().render_position(&placed);
        format!(
            "left: {}px; top: {}px; width: {}px; height: {}px; transform: rotate({}deg); z-index: {};",
            position.x,
            position.y,
            placed.size.width,
            placed.size.height,
            placed.rotation,
            placed.z_index,
        )
    };
    let class = move || {
        let mut class = String::from("canvas-item");
        if selected.get() {
            class.push_str(" selected");
        }
        if dragging() {
            class.push_str(" dragging");
        }
        class
    };
    let image = move || placed.with(|p| p.as_ref().map(|p| p.item.image_url.clone()).unwrap_or_default());
    let alt = move || placed.with(|p| p.as_ref().map(|p| p.item.category.clone()).unwrap_or_default());

    view! {
        <div class=class style=style on:mousedown=on_mousedown>
            <img src=image alt=alt draggable="false" />
            <Show when=move || selected.get()>
                <div class="canvas-item-controls">
                    <button
                        class="rotate-btn"
                        title="Rotate 15°"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            store_apply(&store, |state| state.rotate_step(id));
                        }
                    >
                        "⟳"
                    </button>
                    <button
                        class="front-btn"
                        title="Bring to front"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            store_apply(&store, |state| state.bring_to_front(id));
                        }
                    >
                        "▲"
                    </button>
                    <button
                        class="back-btn"
                        title="Send to back"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            store_apply(&store, |state| state.send_to_back(id));
                        }
                    >
                        "▼"
                    </button>
                    <button
                        class="delete-btn"
                        title="Remove"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            cancel_for(gestures, id);
                            store_apply(&store, |state| state.remove_item(id));
                        }
                    >
                        "×"
                    </button>
                </div>
                <div class="resize-handle" title="Drag up to enlarge" on:mousedown=on_resize_mousedown></div>
            </Show>
        </div>
    }
}
