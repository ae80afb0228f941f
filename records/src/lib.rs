//! Shared record model for the procurement console.
//!
//! This crate owns the entity shapes exchanged between `server` and `client`
//! over the REST API, plus the pure derived-value logic (line totals, stock
//! and purchase summaries) both sides display. It has no framework
//! dependencies so it compiles for WASM and native targets alike; the
//! optional `sqlx` feature adds row decoding for the server.

pub mod envelope;
pub mod master;
pub mod report;
pub mod resource;
pub mod totals;
pub mod transaction;

pub use envelope::{Envelope, ErrorBody, RecordError};
pub use master::{Category, FinancialYear, Institute, Item, Location, Unit, Vendor};
pub use resource::Resource;
pub use totals::{LineTotals, Priced};
pub use transaction::{
    Distribution, Grn, Invoice, PurchaseOrder, QuickGrn, QuickInvoice, Return, StockEntry,
};
