//! In-memory aggregation over fetched record lists.
//!
//! The console already holds the full lists it renders, so stock and
//! purchase summaries are joined client-side rather than served by a
//! dedicated reporting endpoint.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::totals::Priced;
use crate::transaction::{
    Distribution, Grn, Invoice, PurchaseOrder, QuickGrn, QuickInvoice, Return, StockEntry,
};

/// How much of a purchase order has been accepted into stock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiptStatus {
    pub ordered: f64,
    pub received: f64,
    pub pending: f64,
}

impl ReceiptStatus {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pending <= 0.0
    }
}

/// Sum accepted GRN quantities against `po`.
#[must_use]
pub fn receipt_status(po: &PurchaseOrder, grns: &[Grn]) -> ReceiptStatus {
    let received: f64 = grns
        .iter()
        .filter(|g| g.purchase_order_id == po.id)
        .map(|g| g.accepted_quantity)
        .sum();
    ReceiptStatus { ordered: po.quantity, received, pending: (po.quantity - received).max(0.0) }
}

/// Borrowed record lists that feed the stock computation.
#[derive(Clone, Copy, Debug, Default)]
pub struct StockInputs<'a> {
    pub entries: &'a [StockEntry],
    pub purchase_orders: &'a [PurchaseOrder],
    pub grns: &'a [Grn],
    pub quick_grns: &'a [QuickGrn],
    pub distributions: &'a [Distribution],
    pub returns: &'a [Return],
}

/// Stock movements and balance for one item at one location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StockRow {
    pub item_id: i64,
    pub location_id: i64,
    pub adjusted: f64,
    pub received: f64,
    pub issued: f64,
    pub returned: f64,
    pub on_hand: f64,
}

impl StockRow {
    fn new(item_id: i64, location_id: i64) -> Self {
        Self { item_id, location_id, ..Self::default() }
    }
}

/// Compute stock on hand per (item, location), ordered by item then location.
///
/// GRNs contribute their accepted quantity under the item of the purchase
/// order they reference; GRNs whose PO is not in `purchase_orders` are skipped.
#[must_use]
pub fn stock_on_hand(inputs: StockInputs<'_>) -> Vec<StockRow> {
    let mut rows: BTreeMap<(i64, i64), StockRow> = BTreeMap::new();

    for e in inputs.entries {
        stock_slot(&mut rows, e.item_id, e.location_id).adjusted += e.quantity;
    }

    let po_items: HashMap<i64, i64> = inputs
        .purchase_orders
        .iter()
        .map(|po| (po.id, po.item_id))
        .collect();
    for g in inputs.grns {
        if let Some(&item_id) = po_items.get(&g.purchase_order_id) {
            stock_slot(&mut rows, item_id, g.location_id).received += g.accepted_quantity;
        }
    }
    for q in inputs.quick_grns {
        stock_slot(&mut rows, q.item_id, q.location_id).received += q.quantity;
    }
    for d in inputs.distributions {
        stock_slot(&mut rows, d.item_id, d.location_id).issued += d.quantity;
    }
    for r in inputs.returns {
        stock_slot(&mut rows, r.item_id, r.location_id).returned += r.quantity;
    }

    rows.into_values()
        .map(|mut r| {
            r.on_hand = r.adjusted + r.received - r.issued - r.returned;
            r
        })
        .collect()
}

fn stock_slot(rows: &mut BTreeMap<(i64, i64), StockRow>, item_id: i64, location_id: i64) -> &mut StockRow {
    rows.entry((item_id, location_id))
        .or_insert_with(|| StockRow::new(item_id, location_id))
}

/// Purchase totals for one vendor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorSummary {
    pub vendor_id: i64,
    pub orders: usize,
    pub ordered_value: f64,
    pub invoiced_value: f64,
    /// `ordered_value - invoiced_value`; negative when quick invoices exceed orders.
    pub outstanding: f64,
}

/// Aggregate ordered and invoiced values per vendor, ordered by vendor id.
#[must_use]
pub fn vendor_summary(
    purchase_orders: &[PurchaseOrder],
    invoices: &[Invoice],
    quick_invoices: &[QuickInvoice],
) -> Vec<VendorSummary> {
    let mut by_vendor: BTreeMap<i64, VendorSummary> = BTreeMap::new();

    for po in purchase_orders {
        let s = vendor_slot(&mut by_vendor, po.vendor_id);
        s.orders += 1;
        s.ordered_value += po.totals().total;
    }
    for inv in invoices {
        vendor_slot(&mut by_vendor, inv.vendor_id).invoiced_value += inv.totals().total;
    }
    for inv in quick_invoices {
        vendor_slot(&mut by_vendor, inv.vendor_id).invoiced_value += inv.totals().total;
    }

    by_vendor
        .into_values()
        .map(|mut s| {
            s.outstanding = s.ordered_value - s.invoiced_value;
            s
        })
        .collect()
}

fn vendor_slot(by_vendor: &mut BTreeMap<i64, VendorSummary>, vendor_id: i64) -> &mut VendorSummary {
    by_vendor
        .entry(vendor_id)
        .or_insert_with(|| VendorSummary { vendor_id, ..VendorSummary::default() })
}
