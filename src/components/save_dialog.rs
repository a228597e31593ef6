//! Save Dialog Component
//!
//! Name, occasion, season and schedule for the outfit being saved.

use leptos::prelude::*;
use leptos::task::spawn_local;
use outfit_core::model::OCCASIONS;
use outfit_core::{BuilderMode, SaveForm, Season};

use crate::commands;
use crate::context::AppContext;
use crate::store::{store_apply, use_app_store, AppStateStoreFields};

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn SaveDialog(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let ctx = expect_context::<AppContext>();

    let initial = SaveForm::prefilled(&store.builder().read_untracked().outfit);
    let (name, set_name) = signal(initial.name);
    let (occasion, set_occasion) = signal(initial.occasion);
    let (season, set_season) = signal(
        initial
            .season
            .map(|season| season.as_str().to_string())
            .unwrap_or_default(),
    );
    let (scheduled_date, set_scheduled_date) = signal(initial.scheduled_date);
    let (saving, set_saving) = signal(false);

    let editing = move || matches!(ctx.mode.get(), BuilderMode::Edit(_));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let season = season.get_untracked();
        let form = SaveForm {
            name: name.get_untracked(),
            occasion: occasion.get_untracked(),
            season: (!season.is_empty()).then(|| Season::parse(&season)),
            scheduled_date: scheduled_date.get_untracked(),
        };
        let mode = ctx.mode.get_untracked();
        let state = store.builder().get_untracked();

        set_saving.set(true);
        spawn_local(async move {
            match commands::save_outfit(mode, &state, &form).await {
                Ok(update) => {
                    let saved = update.state.outfit;
                    store_apply(&store, |current| current.mark_saved(&saved));
                    ctx.set_mode(update.mode);
                    ctx.success(format!("Saved \"{}\"", saved.name));
                    ctx.reload_history();
                    on_close.run(());
                }
                Err(err) => {
                    ctx.error(&err);
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="save-dialog" on:submit=on_submit on:click=|ev| ev.stop_propagation()>
                <h3>{move || if editing() { "Update outfit" } else { "Save outfit" }}</h3>

                <label for="outfit-name">"Name"</label>
                <input
                    id="outfit-name"
                    type="text"
                    placeholder="e.g. Friday office look"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />

                <label for="outfit-occasion">"Occasion"</label>
                <select
                    id="outfit-occasion"
                    prop:value=move || occasion.get()
                    on:change=move |ev| set_occasion.set(event_target_value(&ev))
                >
                    <option value="">"Any occasion"</option>
                    {OCCASIONS
                        .iter()
                        .map(|occasion| view! { <option value=*occasion>{capitalized(occasion)}</option> })
                        .collect_view()}
                </select>

                <label for="outfit-season">"Season"</label>
                <select
                    id="outfit-season"
                    prop:value=move || season.get()
                    on:change=move |ev| set_season.set(event_target_value(&ev))
                >
                    <option value="">"Not set"</option>
                    {Season::ALL
                        .into_iter()
                        .map(|season| view! { <option value=season.as_str()>{season.label()}</option> })
                        .collect_view()}
                </select>

                <label for="outfit-date">"Schedule for (optional)"</label>
                <input
                    id="outfit-date"
                    type="date"
                    prop:value=move || scheduled_date.get()
                    on:input=move |ev| set_scheduled_date.set(event_target_value(&ev))
                />

                <div class="dialog-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="save-btn" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
