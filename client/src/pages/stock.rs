//! Stock on hand plus the adjustments that feed it.
//!
//! The balance table is read-only and computed from every movement type;
//! below it the stock-entry page manages manual adjustments. Every saved or
//! deleted adjustment reloads the balances.

#[cfg(test)]
#[path = "stock_test.rs"]
mod stock_test;

use leptos::prelude::*;
use records::report::StockRow;

use crate::components::data_table::{Column, DataTable};
use crate::components::resource_page::Revision;
use crate::net::api::HttpApi;
use crate::pages::loader::{Load, load_once};
use crate::pages::stock_entries::StockEntriesPage;
use crate::state::reports::{StockReport, load_stock};
use crate::util::format::quantity;
use crate::util::lookup::RefKind;

pub(crate) fn stock_columns() -> Vec<Column<StockRow>> {
    vec![
        Column::new("Item", |r: &StockRow, refs| refs.label(RefKind::Items, r.item_id)),
        Column::new("Location", |r: &StockRow, refs| refs.label(RefKind::Locations, r.location_id)),
        Column::new("Adjusted", |r: &StockRow, _| quantity(r.adjusted)).numeric(),
        Column::new("Received", |r: &StockRow, _| quantity(r.received)).numeric(),
        Column::new("Issued", |r: &StockRow, _| quantity(r.issued)).numeric(),
        Column::new("Returned", |r: &StockRow, _| quantity(r.returned)).numeric(),
        Column::new("On Hand", |r: &StockRow, _| quantity(r.on_hand)).numeric(),
    ]
}

#[component]
pub fn StockPage() -> impl IntoView {
    let report = RwSignal::new(Load::<StockReport>::Pending);
    let revision = Revision::new();
    provide_context(revision);
    // The previous balances stay on screen while a reload is in flight.
    Effect::new(move || {
        revision.track();
        load_once(report, "stock", || async { load_stock(&HttpApi).await });
    });

    let rows = Signal::derive(move || match &*report.read() {
        Load::Ready(r) => r.rows.clone(),
        _ => Vec::new(),
    });
    let refs = Signal::derive(move || match &*report.read() {
        Load::Ready(r) => r.refs.clone(),
        _ => Default::default(),
    });

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Stock on Hand"</h1>
            </header>
            <Show
                when=move || !matches!(*report.read(), Load::Pending)
                fallback=|| view! { <p class="page__loading">"Loading…"</p> }
            >
                <DataTable rows=rows columns=stock_columns() refs=refs empty_text="No stock movements recorded."/>
            </Show>
        </section>
        <StockEntriesPage/>
    }
}
