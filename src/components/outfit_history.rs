//! Outfit History Component
//!
//! Saved outfits (newest first) and scheduled outfits grouped by calendar
//! day. Entries open in the builder or can be deleted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use outfit_core::schedule::group_by_day;
use outfit_core::wire::OutfitSummary;
use outfit_core::{BuilderMode, OutfitId, SessionUpdate};

use crate::commands;
use crate::components::ConfirmButton;
use crate::context::AppContext;
use crate::store::{open_outfit, store_enter, store_remove_outfit, use_app_store, AppStateStoreFields};

#[component]
pub fn OutfitHistory() -> impl IntoView {
    let store = use_app_store();
    let ctx = expect_context::<AppContext>();

    // Reload both lists whenever a save or delete bumps the version
    Effect::new(move |_| {
        let _ = ctx.history_version.get();
        spawn_local(async move {
            match commands::list_outfits().await {
                Ok(outfits) => store.saved_outfits().set(outfits),
                Err(err) => ctx.error(&err),
            }
            match commands::list_scheduled_outfits().await {
                Ok(outfits) => store.scheduled_outfits().set(outfits),
                Err(err) => log::warn!("Could not load scheduled outfits: {err}"),
            }
        });
    });

    let scheduled_days = move || {
        store.scheduled_outfits().with(|outfits| {
            group_by_day(outfits)
                .into_iter()
                .map(|(day, entries)| (day, entries.into_iter().cloned().collect::<Vec<_>>()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <aside class="outfit-history">
            <h2>"Saved outfits"</h2>
            <Show when=move || store.saved_outfits().with(|outfits| outfits.is_empty())>
                <p class="history-empty">"No saved outfits yet"</p>
            </Show>
            <div class="history-list">
                <For
                    each=move || store.saved_outfits().get()
                    key=|outfit| (outfit.id, outfit.updated_at)
                    children=move |outfit| view! { <OutfitEntry outfit=outfit /> }
                />
            </div>

            <h2>"Scheduled"</h2>
            <For
                each=scheduled_days
                key=|(day, entries)| (*day, entries.iter().map(|o| o.id).collect::<Vec<OutfitId>>())
                children=move |(day, entries)| {
                    view! {
                        <div class="schedule-day">
                            <h3>{day.format("%a, %b %-d %Y").to_string()}</h3>
                            {entries
                                .into_iter()
                                .map(|outfit| view! { <OutfitEntry outfit=outfit /> })
                                .collect_view()}
                        </div>
                    }
                }
            />
        </aside>
    }
}

#[component]
fn OutfitEntry(outfit: OutfitSummary) -> impl IntoView {
    let store = use_app_store();
    let ctx = expect_context::<AppContext>();
    let id = outfit.id;
    let is_current = move || ctx.mode.get() == BuilderMode::Edit(id);
    let details = [
        outfit.occasion.clone(),
        outfit.season.map(|season| season.label().to_string()),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    let on_delete = move |_: ()| {
        spawn_local(async move {
            match commands::delete_outfit(id).await {
                Ok(()) => {
                    store_remove_outfit(&store, id);
                    if ctx.mode.get_untracked() == BuilderMode::Edit(id) {
                        let fresh = SessionUpdate::fresh(&store.builder().get_untracked());
                        store_enter(&store, &ctx, fresh);
                    }
                    log::info!("Deleted outfit {id}");
                    ctx.success("Outfit deleted");
                }
                Err(err) => ctx.error(&err),
            }
        });
    };

    view! {
        <div class=move || if is_current() { "history-entry current" } else { "history-entry" }>
            {outfit.preview_image_url.map(|url| view! { <img class="history-preview" src=url alt="" /> })}
            <div class="history-text">
                <span class="history-name">{outfit.name}</span>
                <span class="history-details">{details}</span>
            </div>
            <button class="open-btn" on:click=move |_| open_outfit(store, ctx, id)>"Open"</button>
            <ConfirmButton
                label="×"
                prompt="Delete?"
                button_class="delete-btn"
                on_confirm=on_delete
            />
        </div>
    }
}
