//! Quick invoices: vendor bills booked without a GRN.

use leptos::prelude::*;
use records::QuickInvoice;
use records::totals::Priced;

use crate::components::data_table::Column;
use crate::components::resource_page::resource_page;
use crate::pages::detail::totals_rows;
use crate::state::resource::ResourceForm;
use crate::util::form::{Draft, FieldSpec};
use crate::util::format::{date, money, opt_text, percent, quantity};
use crate::util::lookup::{RefData, RefKind};

pub struct QuickInvoiceForm;

impl ResourceForm for QuickInvoiceForm {
    type Record = QuickInvoice;

    const REFS: &'static [RefKind] = &[RefKind::Vendors, RefKind::Items];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("invoice_number", "Invoice Number").required(),
        FieldSpec::date("invoice_date", "Invoice Date").required(),
        FieldSpec::select("vendor_id", "Vendor", RefKind::Vendors).required(),
        FieldSpec::select("item_id", "Item", RefKind::Items).required(),
        FieldSpec::number("quantity", "Quantity").required().non_negative(),
        FieldSpec::number("rate", "Rate").required().non_negative(),
        FieldSpec::number("discount", "Discount").non_negative(),
        FieldSpec::number("tax_percentage", "Tax %").non_negative(),
        FieldSpec::textarea("remarks", "Remarks"),
    ];

    fn columns() -> Vec<Column<QuickInvoice>> {
        vec![
            Column::new("Invoice No.", |q: &QuickInvoice, _| q.invoice_number.clone()),
            Column::new("Date", |q: &QuickInvoice, _| date(q.invoice_date)),
            Column::new("Vendor", |q: &QuickInvoice, refs| refs.label(RefKind::Vendors, q.vendor_id)),
            Column::new("Item", |q: &QuickInvoice, refs| refs.label(RefKind::Items, q.item_id)),
            Column::new("Qty", |q: &QuickInvoice, _| quantity(q.quantity)).numeric(),
            Column::new("Total", |q: &QuickInvoice, _| money(q.totals().total)).numeric(),
        ]
    }

    fn to_draft(q: &QuickInvoice) -> Draft {
        Draft::default()
            .with("invoice_number", q.invoice_number.clone())
            .with_date("invoice_date", q.invoice_date)
            .with_id("vendor_id", q.vendor_id)
            .with_id("item_id", q.item_id)
            .with_number("quantity", q.quantity)
            .with_number("rate", q.rate)
            .with_opt_number("discount", q.discount)
            .with_opt_number("tax_percentage", q.tax_percentage)
            .with_opt("remarks", q.remarks.as_deref())
    }

    fn from_draft(d: &Draft) -> QuickInvoice {
        QuickInvoice {
            id: 0,
            invoice_number: d.text("invoice_number"),
            invoice_date: d.date("invoice_date"),
            vendor_id: d.id("vendor_id"),
            item_id: d.id("item_id"),
            quantity: d.number("quantity"),
            rate: d.number("rate"),
            discount: d.opt_number("discount"),
            tax_percentage: d.opt_number("tax_percentage"),
            remarks: d.opt_text("remarks"),
        }
    }

    fn detail(q: &QuickInvoice, refs: &RefData) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Invoice Number", q.invoice_number.clone()),
            ("Invoice Date", date(q.invoice_date)),
            ("Vendor", refs.label(RefKind::Vendors, q.vendor_id)),
            ("Item", refs.label(RefKind::Items, q.item_id)),
            ("Quantity", quantity(q.quantity)),
            ("Rate", money(q.rate)),
            ("Tax %", percent(q.tax_percentage)),
        ];
        rows.extend(totals_rows(q.totals()));
        rows.push(("Remarks", opt_text(q.remarks.as_deref())));
        rows
    }
}

#[component]
pub fn QuickInvoicesPage() -> impl IntoView {
    resource_page::<QuickInvoiceForm>()
}
