//! Purchasing and stock-movement records.
//!
//! DESIGN
//! ======
//! Each record is a single line: one item, one quantity. Multi-line
//! documents are represented by several records sharing a document number.
//! Quick variants collapse the PO → GRN → invoice chain into one step and
//! therefore carry the vendor and pricing fields directly.

#[cfg(test)]
#[path = "transaction_test.rs"]
mod transaction_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::totals::Priced;

/// A purchase order line raised against a vendor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    #[serde(default)]
    pub id: i64,
    pub po_number: String,
    pub po_date: NaiveDate,
    pub financial_year_id: i64,
    pub institute_id: i64,
    pub vendor_id: i64,
    pub item_id: i64,
    pub quantity: f64,
    pub rate: f64,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub tax_percentage: Option<f64>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub document: Option<String>,
}

impl Resource for PurchaseOrder {
    const PATH: &'static str = "purchase-orders";
    const KEY: &'static str = "purchaseOrder";
    const TITLE: &'static str = "Purchase Order";
    const PLURAL: &'static str = "Purchase Orders";
    const ATTACHMENT: bool = true;

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn label(&self) -> String {
        self.po_number.clone()
    }

    fn attachment(&self) -> Option<&str> {
        self.document.as_deref()
    }

    fn set_attachment(&mut self, path: Option<String>) {
        self.document = path;
    }
}

impl Priced for PurchaseOrder {
    fn quantity(&self) -> f64 {
        self.quantity
    }
    fn rate(&self) -> f64 {
        self.rate
    }
    fn discount(&self) -> Option<f64> {
        self.discount
    }
    fn tax_percentage(&self) -> Option<f64> {
        self.tax_percentage
    }
}

/// Goods received against a purchase order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Grn {
    #[serde(default)]
    pub id: i64,
    pub grn_number: String,
    pub grn_date: NaiveDate,
    pub purchase_order_id: i64,
    pub location_id: i64,
    pub received_quantity: f64,
    pub accepted_quantity: f64,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub attachment: Option<String>,
}

impl Grn {
    /// Quantity received but not accepted into stock.
    #[must_use]
    pub fn rejected_quantity(&self) -> f64 {
        (self.received_quantity - self.accepted_quantity).max(0.0)
    }
}

impl Resource for Grn {
    const PATH: &'static str = "grns";
    const KEY: &'static str = "grn";
    const TITLE: &'static str = "GRN";
    const PLURAL: &'static str = "GRNs";
    const ATTACHMENT: bool = true;

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn label(&self) -> String {
        self.grn_number.clone()
    }

    fn attachment(&self) -> Option<&str> {
        self.attachment.as_deref()
    }

    fn set_attachment(&mut self, path: Option<String>) {
        self.attachment = path;
    }
}

/// Vendor invoice booked against a GRN.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default)]
    pub id: i64,
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub grn_id: i64,
    pub vendor_id: i64,
    pub quantity: f64,
    pub rate: f64,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub tax_percentage: Option<f64>,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl Resource for Invoice {
    const PATH: &'static str = "invoices";
    const KEY: &'static str = "invoice";
    const TITLE: &'static str = "Invoice";
    const PLURAL: &'static str = "Invoices";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn label(&self) -> String {
        self.invoice_number.clone()
    }
}

impl Priced for Invoice {
    fn quantity(&self) -> f64 {
        self.quantity
    }
    fn rate(&self) -> f64 {
        self.rate
    }
    fn discount(&self) -> Option<f64> {
        self.discount
    }
    fn tax_percentage(&self) -> Option<f64> {
        self.tax_percentage
    }
}

/// Stock issued from a store location to an institute.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    #[serde(default)]
    pub id: i64,
    pub distribution_date: NaiveDate,
    pub item_id: i64,
    pub location_id: i64,
    pub institute_id: i64,
    pub quantity: f64,
    pub issued_to: String,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub document: Option<String>,
}

impl Resource for Distribution {
    const PATH: &'static str = "distributions";
    const KEY: &'static str = "distribution";
    const TITLE: &'static str = "Distribution";
    const PLURAL: &'static str = "Distributions";
    const ATTACHMENT: bool = true;

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn attachment(&self) -> Option<&str> {
        self.document.as_deref()
    }

    fn set_attachment(&mut self, path: Option<String>) {
        self.document = path;
    }
}

/// Goods sent back to a vendor out of a store location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Return {
    #[serde(default)]
    pub id: i64,
    pub return_date: NaiveDate,
    pub grn_id: i64,
    pub vendor_id: i64,
    pub item_id: i64,
    pub location_id: i64,
    pub quantity: f64,
    pub reason: String,
}

impl Resource for Return {
    const PATH: &'static str = "returns";
    const KEY: &'static str = "return";
    const TITLE: &'static str = "Return";
    const PLURAL: &'static str = "Returns";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// Manual stock adjustment (opening balance, write-off, count correction).
/// Positive quantities add stock, negative ones remove it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct StockEntry {
    #[serde(default)]
    pub id: i64,
    pub entry_date: NaiveDate,
    pub item_id: i64,
    pub location_id: i64,
    pub quantity: f64,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl Resource for StockEntry {
    const PATH: &'static str = "stock-entries";
    const KEY: &'static str = "stockEntry";
    const TITLE: &'static str = "Stock Entry";
    const PLURAL: &'static str = "Stock Entries";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// Single-step receipt without a prior purchase order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct QuickGrn {
    #[serde(default)]
    pub id: i64,
    pub grn_number: String,
    pub grn_date: NaiveDate,
    pub vendor_id: i64,
    pub institute_id: i64,
    pub location_id: i64,
    pub item_id: i64,
    pub quantity: f64,
    pub rate: f64,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub attachment: Option<String>,
}

impl QuickGrn {
    /// Value of the received goods at the recorded rate.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.quantity * self.rate
    }
}

impl Resource for QuickGrn {
    const PATH: &'static str = "quick-grns";
    const KEY: &'static str = "quickGrn";
    const TITLE: &'static str = "Quick GRN";
    const PLURAL: &'static str = "Quick GRNs";
    const ATTACHMENT: bool = true;

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn label(&self) -> String {
        self.grn_number.clone()
    }

    fn attachment(&self) -> Option<&str> {
        self.attachment.as_deref()
    }

    fn set_attachment(&mut self, path: Option<String>) {
        self.attachment = path;
    }
}

/// Single-step invoice without a prior GRN.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct QuickInvoice {
    #[serde(default)]
    pub id: i64,
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub vendor_id: i64,
    pub item_id: i64,
    pub quantity: f64,
    pub rate: f64,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub tax_percentage: Option<f64>,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl Resource for QuickInvoice {
    const PATH: &'static str = "quick-invoices";
    const KEY: &'static str = "quickInvoice";
    const TITLE: &'static str = "Quick Invoice";
    const PLURAL: &'static str = "Quick Invoices";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn label(&self) -> String {
        self.invoice_number.clone()
    }
}

impl Priced for QuickInvoice {
    fn quantity(&self) -> f64 {
        self.quantity
    }
    fn rate(&self) -> f64 {
        self.rate
    }
    fn discount(&self) -> Option<f64> {
        self.discount
    }
    fn tax_percentage(&self) -> Option<f64> {
        self.tax_percentage
    }
}
