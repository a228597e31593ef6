//! Wardrobe Sidebar Component
//!
//! Palette of wardrobe items grouped by layer, with search. Clicking an
//! item places it on the canvas.

use leptos::prelude::*;
use outfit_core::palette::layer_view;
use outfit_core::{classify_category, Item, Layer};

use crate::context::AppContext;
use crate::store::{store_try_apply, use_app_store, AppStateStoreFields};

/// Color swatches shown per card
const SWATCHES: usize = 3;

#[component]
pub fn WardrobeSidebar() -> impl IntoView {
    let store = use_app_store();
    let ctx = expect_context::<AppContext>();
    let (query, set_query) = signal(String::new());
    let (active_layer, set_active_layer) = signal(Layer::Tops);

    let visible_items = move || {
        let layer = active_layer.get();
        let query = query.get();
        store.builder().with(|state| {
            layer_view(&state.palette, layer, &query)
                .into_iter()
                .map(|item| (layer, item.clone()))
                .collect::<Vec<(Layer, Item)>>()
        })
    };
    let palette_empty = move || store.builder().with(|state| state.palette.is_empty());

    view! {
        <aside class="wardrobe-sidebar">
            <div class="sidebar-header">
                <h2>"Wardrobe"</h2>
                <button class="refresh-btn" title="Reload wardrobe" on:click=move |_| ctx.reload_palette()>
                    "↻"
                </button>
            </div>

            <input
                type="search"
                class="palette-search"
                placeholder="Search by category, brand or color"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />

            <div class="layer-tabs">
                {Layer::ALL
                    .into_iter()
                    .map(|layer| {
                        let count = move || store.builder().with(|state| state.outfit.count_in_layer(layer));
                        let tab_class = move || {
                            if active_layer.get() == layer { "layer-tab active" } else { "layer-tab" }
                        };
                        view! {
                            <button
                                class=tab_class
                                title=layer.description()
                                on:click=move |_| set_active_layer.set(layer)
                            >
                                {layer.label()}
                                <span class="layer-count">
                                    {move || format!("{}/{}", count(), layer.capacity())}
                                </span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="palette-grid">
                <For
                    each=visible_items
                    key=|(layer, item)| (*layer, item.id)
                    children=move |(layer, item)| view! { <PaletteCard item=item layer=layer /> }
                />
            </div>

            <Show when=move || visible_items().is_empty()>
                <p class="palette-empty">
                    {move || if palette_empty() {
                        "Your wardrobe is empty"
                    } else {
                        "No items match this layer"
                    }}
                </p>
            </Show>
        </aside>
    }
}

#[component]
fn PaletteCard(item: Item, layer: Layer) -> impl IntoView {
    let store = use_app_store();
    let ctx = expect_context::<AppContext>();
    let id = item.id;
    let image_url = item.image_url.clone();
    let category = item.category.clone();
    let brand = item.brand.clone().unwrap_or_default();
    let swatches: Vec<String> = item.colors.iter().take(SWATCHES).cloned().collect();
    let fits = classify_category(&item.category)
        .iter()
        .map(|layer| layer.label())
        .collect::<Vec<_>>()
        .join(", ");

    let placed = move || store.builder().with(|state| state.outfit.contains(id));
    let layer_full = move || store.builder().with(|state| !state.can_place_in_layer(layer));
    let card_class = move || {
        if placed() {
            "palette-card placed"
        } else if layer_full() {
            "palette-card unavailable"
        } else {
            "palette-card"
        }
    };

    view! {
        <button
            class=card_class
            title=format!("Add to {} (fits {fits})", layer.label())
            on:click=move |_| {
                store_try_apply(&store, &ctx, |state| state.place_item(&item, layer));
            }
        >
            <img src=image_url alt=category.clone() draggable="false" />
            <span class="palette-card-category">{category}</span>
            <span class="palette-card-brand">{brand}</span>
            <span class="palette-card-colors">
                {swatches
                    .into_iter()
                    .map(|color| view! { <span class="swatch" style=format!("background: {color};") title=color.clone()></span> })
                    .collect_view()}
            </span>
        </button>
    }
}
