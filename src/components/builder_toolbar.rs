//! Builder Toolbar Component
//!
//! Outfit title, mode, and the save / clear / new actions.

use leptos::prelude::*;
use outfit_core::{BuilderMode, SessionUpdate};

use crate::components::{ConfirmButton, SaveDialog};
use crate::context::AppContext;
use crate::store::{store_apply, store_enter, use_app_store, AppStateStoreFields};

#[component]
pub fn BuilderToolbar() -> impl IntoView {
    let store = use_app_store();
    let ctx = expect_context::<AppContext>();
    let (show_save, set_show_save) = signal(false);

    let name = move || store.builder().with(|state| state.outfit.name.clone());
    let item_count = move || store.builder().with(|state| state.outfit.items.len());
    let is_empty = Signal::derive(move || item_count() == 0);
    let mode_label = move || match ctx.mode.get() {
        BuilderMode::Create => String::from("New outfit"),
        BuilderMode::Edit(id) => format!("Editing #{id}"),
    };

    let start_new = move |_: web_sys::MouseEvent| {
        let fresh = SessionUpdate::fresh(&store.builder().get_untracked());
        store_enter(&store, &ctx, fresh);
    };

    view! {
        <div class="builder-toolbar">
            <div class="toolbar-title">
                <h2>{name}</h2>
                <span class="toolbar-mode">{mode_label}</span>
                <span class="toolbar-count">
                    {move || match item_count() {
                        1 => String::from("1 item"),
                        n => format!("{n} items"),
                    }}
                </span>
            </div>
            <div class="toolbar-actions">
                <button class="new-btn" on:click=start_new>"New"</button>
                <ConfirmButton
                    label="Clear"
                    prompt="Clear the canvas?"
                    button_class="clear-btn"
                    disabled=is_empty
                    on_confirm=move |_| store_apply(&store, |state| state.clear())
                />
                <button class="save-btn" on:click=move |_| set_show_save.set(true)>
                    {move || match ctx.mode.get() {
                        BuilderMode::Create => "Save",
                        BuilderMode::Edit(_) => "Update",
                    }}
                </button>
            </div>
            <Show when=move || show_save.get()>
                <SaveDialog on_close=move |_| set_show_save.set(false) />
            </Show>
        </div>
    }
}
