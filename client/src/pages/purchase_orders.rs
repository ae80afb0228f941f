//! Purchase orders.
//!
//! SYSTEM CONTEXT
//! ==============
//! GRNs are loaded alongside the orders so the expanded row can show how
//! much of each order has been received. Orders carry an optional uploaded
//! document and are submitted as multipart when one is chosen.

#[cfg(test)]
#[path = "purchase_orders_test.rs"]
mod purchase_orders_test;

use leptos::prelude::*;
use records::PurchaseOrder;
use records::report::receipt_status;
use records::totals::Priced;

use crate::components::data_table::Column;
use crate::components::resource_page::resource_page;
use crate::pages::detail::{attachment_cell, totals_rows};
use crate::state::resource::ResourceForm;
use crate::util::form::{Draft, FieldSpec};
use crate::util::format::{date, money, opt_text, percent, quantity};
use crate::util::lookup::{RefData, RefKind};

pub struct PurchaseOrderForm;

impl ResourceForm for PurchaseOrderForm {
    type Record = PurchaseOrder;

    const REFS: &'static [RefKind] = &[
        RefKind::FinancialYears,
        RefKind::Institutes,
        RefKind::Vendors,
        RefKind::Items,
        RefKind::Grns,
    ];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("po_number", "PO Number").required(),
        FieldSpec::date("po_date", "PO Date").required(),
        FieldSpec::select("financial_year_id", "Financial Year", RefKind::FinancialYears).required(),
        FieldSpec::select("institute_id", "Institute", RefKind::Institutes).required(),
        FieldSpec::select("vendor_id", "Vendor", RefKind::Vendors).required(),
        FieldSpec::select("item_id", "Item", RefKind::Items).required(),
        FieldSpec::number("quantity", "Quantity").required().non_negative(),
        FieldSpec::number("rate", "Rate").required().non_negative(),
        FieldSpec::number("discount", "Discount").non_negative(),
        FieldSpec::number("tax_percentage", "Tax %").non_negative(),
        FieldSpec::textarea("remarks", "Remarks"),
        FieldSpec::file("document", "Document"),
    ];

    fn columns() -> Vec<Column<PurchaseOrder>> {
        vec![
            Column::new("PO No.", |po: &PurchaseOrder, _| po.po_number.clone()),
            Column::new("Date", |po: &PurchaseOrder, _| date(po.po_date)),
            Column::new("Vendor", |po: &PurchaseOrder, refs| refs.label(RefKind::Vendors, po.vendor_id)),
            Column::new("Item", |po: &PurchaseOrder, refs| refs.label(RefKind::Items, po.item_id)),
            Column::new("Qty", |po: &PurchaseOrder, _| quantity(po.quantity)).numeric(),
            Column::new("Rate", |po: &PurchaseOrder, _| money(po.rate)).numeric(),
            Column::new("Total", |po: &PurchaseOrder, _| money(po.totals().total)).numeric(),
        ]
    }

    fn to_draft(po: &PurchaseOrder) -> Draft {
        Draft::default()
            .with("po_number", po.po_number.clone())
            .with_date("po_date", po.po_date)
            .with_id("financial_year_id", po.financial_year_id)
            .with_id("institute_id", po.institute_id)
            .with_id("vendor_id", po.vendor_id)
            .with_id("item_id", po.item_id)
            .with_number("quantity", po.quantity)
            .with_number("rate", po.rate)
            .with_opt_number("discount", po.discount)
            .with_opt_number("tax_percentage", po.tax_percentage)
            .with_opt("remarks", po.remarks.as_deref())
            .with_opt("document", po.document.as_deref())
    }

    fn from_draft(d: &Draft) -> PurchaseOrder {
        PurchaseOrder {
            id: 0,
            po_number: d.text("po_number"),
            po_date: d.date("po_date"),
            financial_year_id: d.id("financial_year_id"),
            institute_id: d.id("institute_id"),
            vendor_id: d.id("vendor_id"),
            item_id: d.id("item_id"),
            quantity: d.number("quantity"),
            rate: d.number("rate"),
            discount: d.opt_number("discount"),
            tax_percentage: d.opt_number("tax_percentage"),
            remarks: d.opt_text("remarks"),
            document: d.opt_text("document"),
        }
    }

    fn detail(po: &PurchaseOrder, refs: &RefData) -> Vec<(&'static str, String)> {
        let status = receipt_status(po, &refs.grns);
        let mut rows = vec![
            ("PO Number", po.po_number.clone()),
            ("PO Date", date(po.po_date)),
            ("Financial Year", refs.label(RefKind::FinancialYears, po.financial_year_id)),
            ("Institute", refs.label(RefKind::Institutes, po.institute_id)),
            ("Vendor", refs.label(RefKind::Vendors, po.vendor_id)),
            ("Item", refs.label(RefKind::Items, po.item_id)),
            ("Quantity", quantity(po.quantity)),
            ("Rate", money(po.rate)),
            ("Tax %", percent(po.tax_percentage)),
        ];
        rows.extend(totals_rows(po.totals()));
        rows.extend([
            ("Received", quantity(status.received)),
            ("Pending", quantity(status.pending)),
            ("Status", if status.is_complete() { "Received" } else { "Open" }.to_owned()),
            ("Remarks", opt_text(po.remarks.as_deref())),
            ("Document", attachment_cell(po.document.as_deref())),
        ]);
        rows
    }
}

#[component]
pub fn PurchaseOrdersPage() -> impl IntoView {
    resource_page::<PurchaseOrderForm>()
}
