//! Table bindings for every record type.

#[cfg(test)]
#[path = "tables_test.rs"]
mod tables_test;

use records::{
    Category, Distribution, FinancialYear, Grn, Institute, Invoice, Item, Location, PurchaseOrder, QuickGrn,
    QuickInvoice, Return, StockEntry, Unit, Vendor,
};

use super::repo::{Table, Value};

/// Implement [`Table`] from a field list; column names equal field names.
///
/// Values are built from borrowed fields so only text columns are copied.
macro_rules! table {
    ($ty:ty, $table:literal, [$($field:ident),+ $(,)?]) => {
        impl Table for $ty {
            const TABLE: &'static str = $table;
            const COLUMNS: &'static [&'static str] = &[$(stringify!($field)),+];

            fn values(&self) -> Vec<Value> {
                vec![$(Value::from(&self.$field)),+]
            }
        }
    };
}

table!(Vendor, "vendors", [name, contact_person, phone, email, address, gst_number]);
table!(Unit, "units", [name, abbreviation]);
table!(Category, "categories", [name, description]);
table!(Item, "items", [name, code, category_id, unit_id, description]);
table!(Institute, "institutes", [name, code, address]);
table!(Location, "locations", [name, institute_id, description]);
table!(FinancialYear, "financial_years", [label, start_date, end_date, is_active]);

table!(
    PurchaseOrder,
    "purchase_orders",
    [
        po_number,
        po_date,
        financial_year_id,
        institute_id,
        vendor_id,
        item_id,
        quantity,
        rate,
        discount,
        tax_percentage,
        remarks,
        document,
    ]
);
table!(
    Grn,
    "grns",
    [grn_number, grn_date, purchase_order_id, location_id, received_quantity, accepted_quantity, remarks, attachment]
);
table!(
    Invoice,
    "invoices",
    [invoice_number, invoice_date, grn_id, vendor_id, quantity, rate, discount, tax_percentage, remarks]
);
table!(
    Distribution,
    "distributions",
    [distribution_date, item_id, location_id, institute_id, quantity, issued_to, remarks, document]
);
table!(Return, "returns", [return_date, grn_id, vendor_id, item_id, location_id, quantity, reason]);
table!(StockEntry, "stock_entries", [entry_date, item_id, location_id, quantity, remarks]);
table!(
    QuickGrn,
    "quick_grns",
    [grn_number, grn_date, vendor_id, institute_id, location_id, item_id, quantity, rate, remarks, attachment]
);
table!(
    QuickInvoice,
    "quick_invoices",
    [invoice_number, invoice_date, vendor_id, item_id, quantity, rate, discount, tax_percentage, remarks]
);
