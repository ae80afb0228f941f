//! Purchase reports: vendor summary and receipt status of every order.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use leptos::prelude::*;
use records::report::VendorSummary;
use records::totals::Priced;

use crate::components::data_table::{Column, DataTable};
use crate::net::api::HttpApi;
use crate::pages::loader::{Load, load_once};
use crate::state::reports::{PurchaseReport, ReceiptRow, load_purchase_report};
use crate::util::format::{money, quantity};
use crate::util::lookup::RefKind;

pub(crate) fn vendor_columns() -> Vec<Column<VendorSummary>> {
    vec![
        Column::new("Vendor", |s: &VendorSummary, refs| refs.label(RefKind::Vendors, s.vendor_id)),
        Column::new("Orders", |s: &VendorSummary, _| s.orders.to_string()).numeric(),
        Column::new("Ordered", |s: &VendorSummary, _| money(s.ordered_value)).numeric(),
        Column::new("Invoiced", |s: &VendorSummary, _| money(s.invoiced_value)).numeric(),
        Column::new("Outstanding", |s: &VendorSummary, _| money(s.outstanding)).numeric(),
    ]
}

pub(crate) fn receipt_columns() -> Vec<Column<ReceiptRow>> {
    vec![
        Column::new("PO No.", |r: &ReceiptRow, _| r.order.po_number.clone()),
        Column::new("Vendor", |r: &ReceiptRow, refs| refs.label(RefKind::Vendors, r.order.vendor_id)),
        Column::new("Item", |r: &ReceiptRow, refs| refs.label(RefKind::Items, r.order.item_id)),
        Column::new("Ordered", |r: &ReceiptRow, _| quantity(r.status.ordered)).numeric(),
        Column::new("Received", |r: &ReceiptRow, _| quantity(r.status.received)).numeric(),
        Column::new("Pending", |r: &ReceiptRow, _| quantity(r.status.pending)).numeric(),
        Column::new("Value", |r: &ReceiptRow, _| money(r.order.totals().total)).numeric(),
    ]
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let report = RwSignal::new(Load::<PurchaseReport>::Pending);
    load_once(report, "reports", || async { load_purchase_report(&HttpApi).await });

    let ready = move || match report.get() {
        Load::Ready(r) => Some(r),
        _ => None,
    };
    let vendors = Signal::derive(move || ready().map(|r| r.vendors).unwrap_or_default());
    let receipts = Signal::derive(move || ready().map(|r| r.receipts).unwrap_or_default());
    let refs = Signal::derive(move || ready().map(|r| r.refs).unwrap_or_default());

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Reports"</h1>
            </header>
            <Show
                when=move || !matches!(*report.read(), Load::Pending)
                fallback=|| view! { <p class="page__loading">"Loading…"</p> }
            >
                <h2>"Vendor purchase summary"</h2>
                <DataTable rows=vendors columns=vendor_columns() refs=refs empty_text="No purchases recorded."/>
                <h2>"Purchase order receipts"</h2>
                <DataTable rows=receipts columns=receipt_columns() refs=refs empty_text="No purchase orders."/>
            </Show>
        </section>
    }
}
