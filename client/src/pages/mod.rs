//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Record pages declare a `ResourceForm` and hand it to
//! `components::resource_page`; the dashboard, stock and reports pages load
//! their own aggregated data.

pub mod categories;
pub mod dashboard;
pub(crate) mod detail;
pub mod distributions;
pub mod financial_years;
pub mod grns;
pub mod institutes;
pub mod invoices;
pub mod items;
pub(crate) mod loader;
pub mod locations;
pub mod purchase_orders;
pub mod quick_grns;
pub mod quick_invoices;
pub mod reports;
pub mod returns;
pub mod stock;
pub mod stock_entries;
pub mod units;
pub mod vendors;
