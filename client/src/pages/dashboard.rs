//! Dashboard page: one tile per record collection with its count.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. Every collection is fetched once on mount to
//! count it; the tiles link to the matching record pages.

use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::pages::loader::{Load, load_once};
use crate::state::dashboard::{Dashboard, Tile, load_dashboard};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = RwSignal::new(Load::<Dashboard>::Pending);
    load_once(dashboard, "dashboard", || async { load_dashboard(&HttpApi).await });

    let body = move || match dashboard.get() {
        Load::Pending => view! { <p class="page__loading">"Loading…"</p> }.into_any(),
        Load::Failed => view! { <p class="page__empty">"Counts are unavailable."</p> }.into_any(),
        Load::Ready(d) => {
            let tiles = d.tiles.into_iter().map(tile_view).collect_view();
            view! {
                <p class="dashboard__summary">
                    {format!("{} purchase order(s) awaiting receipt", d.open_orders)}
                </p>
                <div class="dashboard__tiles">{tiles}</div>
            }
            .into_any()
        }
    };

    view! {
        <section class="page dashboard">
            <header class="page__header">
                <h1>"Dashboard"</h1>
            </header>
            {body}
        </section>
    }
}

fn tile_view(tile: Tile) -> impl IntoView {
    view! {
        <a class="dashboard__tile" href=tile.href>
            <span class="dashboard__count">{tile.count}</span>
            <span class="dashboard__title">{tile.title}</span>
        </a>
    }
}
