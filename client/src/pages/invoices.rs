//! Vendor invoices booked against GRNs.

#[cfg(test)]
#[path = "invoices_test.rs"]
mod invoices_test;

use leptos::prelude::*;
use records::Invoice;
use records::totals::Priced;

use crate::components::data_table::Column;
use crate::components::resource_page::resource_page;
use crate::pages::detail::totals_rows;
use crate::state::resource::ResourceForm;
use crate::util::form::{Draft, FieldSpec};
use crate::util::format::{date, money, opt_text, percent, quantity};
use crate::util::lookup::{RefData, RefKind};

pub struct InvoiceForm;

impl ResourceForm for InvoiceForm {
    type Record = Invoice;

    const REFS: &'static [RefKind] = &[RefKind::Grns, RefKind::Vendors];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("invoice_number", "Invoice Number").required(),
        FieldSpec::date("invoice_date", "Invoice Date").required(),
        FieldSpec::select("grn_id", "GRN", RefKind::Grns).required(),
        FieldSpec::select("vendor_id", "Vendor", RefKind::Vendors).required(),
        FieldSpec::number("quantity", "Quantity").required().non_negative(),
        FieldSpec::number("rate", "Rate").required().non_negative(),
        FieldSpec::number("discount", "Discount").non_negative(),
        FieldSpec::number("tax_percentage", "Tax %").non_negative(),
        FieldSpec::textarea("remarks", "Remarks"),
    ];

    fn columns() -> Vec<Column<Invoice>> {
        vec![
            Column::new("Invoice No.", |i: &Invoice, _| i.invoice_number.clone()),
            Column::new("Date", |i: &Invoice, _| date(i.invoice_date)),
            Column::new("GRN", |i: &Invoice, refs| refs.label(RefKind::Grns, i.grn_id)),
            Column::new("Vendor", |i: &Invoice, refs| refs.label(RefKind::Vendors, i.vendor_id)),
            Column::new("Qty", |i: &Invoice, _| quantity(i.quantity)).numeric(),
            Column::new("Total", |i: &Invoice, _| money(i.totals().total)).numeric(),
        ]
    }

    fn to_draft(i: &Invoice) -> Draft {
        Draft::default()
            .with("invoice_number", i.invoice_number.clone())
            .with_date("invoice_date", i.invoice_date)
            .with_id("grn_id", i.grn_id)
            .with_id("vendor_id", i.vendor_id)
            .with_number("quantity", i.quantity)
            .with_number("rate", i.rate)
            .with_opt_number("discount", i.discount)
            .with_opt_number("tax_percentage", i.tax_percentage)
            .with_opt("remarks", i.remarks.as_deref())
    }

    fn from_draft(d: &Draft) -> Invoice {
        Invoice {
            id: 0,
            invoice_number: d.text("invoice_number"),
            invoice_date: d.date("invoice_date"),
            grn_id: d.id("grn_id"),
            vendor_id: d.id("vendor_id"),
            quantity: d.number("quantity"),
            rate: d.number("rate"),
            discount: d.opt_number("discount"),
            tax_percentage: d.opt_number("tax_percentage"),
            remarks: d.opt_text("remarks"),
        }
    }

    fn detail(i: &Invoice, refs: &RefData) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Invoice Number", i.invoice_number.clone()),
            ("Invoice Date", date(i.invoice_date)),
            ("GRN", refs.label(RefKind::Grns, i.grn_id)),
            ("Vendor", refs.label(RefKind::Vendors, i.vendor_id)),
            ("Quantity", quantity(i.quantity)),
            ("Rate", money(i.rate)),
            ("Tax %", percent(i.tax_percentage)),
        ];
        rows.extend(totals_rows(i.totals()));
        rows.push(("Remarks", opt_text(i.remarks.as_deref())));
        rows
    }
}

#[component]
pub fn InvoicesPage() -> impl IntoView {
    resource_page::<InvoiceForm>()
}
