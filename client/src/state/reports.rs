//! Data behind the stock and reports pages.
//!
//! Both views are joins over full record lists computed in the browser with
//! the aggregations from `records::report`.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use records::report::{ReceiptStatus, StockInputs, StockRow, VendorSummary, receipt_status, stock_on_hand, vendor_summary};
use records::{Distribution, Invoice, PurchaseOrder, QuickGrn, QuickInvoice, Return, StockEntry};

use crate::net::api::{ApiError, ResourceApi};
use crate::util::lookup::{RefData, RefKind, load_refs};

/// A purchase order with its receipt progress.
#[derive(Clone, Debug, PartialEq)]
pub struct ReceiptRow {
    pub order: PurchaseOrder,
    pub status: ReceiptStatus,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PurchaseReport {
    pub vendors: Vec<VendorSummary>,
    pub receipts: Vec<ReceiptRow>,
    pub refs: RefData,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StockReport {
    pub rows: Vec<StockRow>,
    pub refs: RefData,
}

/// Vendor purchase summary and PO receipt status.
///
/// # Errors
///
/// Returns the first failing request's error.
pub async fn load_purchase_report<A: ResourceApi>(api: &A) -> Result<PurchaseReport, ApiError> {
    let refs = load_refs(api, &[RefKind::Vendors, RefKind::Items, RefKind::PurchaseOrders, RefKind::Grns]).await?;
    let invoices = api.list::<Invoice>().await?;
    let quick_invoices = api.list::<QuickInvoice>().await?;

    let vendors = vendor_summary(&refs.purchase_orders, &invoices, &quick_invoices);
    let receipts = refs
        .purchase_orders
        .iter()
        .map(|po| ReceiptRow { order: po.clone(), status: receipt_status(po, &refs.grns) })
        .collect();
    Ok(PurchaseReport { vendors, receipts, refs })
}

/// Stock on hand per item and location.
///
/// # Errors
///
/// Returns the first failing request's error.
pub async fn load_stock<A: ResourceApi>(api: &A) -> Result<StockReport, ApiError> {
    let refs = load_refs(api, &[RefKind::Items, RefKind::Locations, RefKind::PurchaseOrders, RefKind::Grns]).await?;
    let entries = api.list::<StockEntry>().await?;
    let quick_grns = api.list::<QuickGrn>().await?;
    let distributions = api.list::<Distribution>().await?;
    let returns = api.list::<Return>().await?;

    let rows = stock_on_hand(StockInputs {
        entries: &entries,
        purchase_orders: &refs.purchase_orders,
        grns: &refs.grns,
        quick_grns: &quick_grns,
        distributions: &distributions,
        returns: &returns,
    });
    Ok(StockReport { rows, refs })
}
