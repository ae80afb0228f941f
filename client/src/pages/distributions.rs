//! Stock issued from a store to an institute.

use leptos::prelude::*;
use records::Distribution;

use crate::components::data_table::Column;
use crate::components::resource_page::resource_page;
use crate::pages::detail::attachment_cell;
use crate::state::resource::ResourceForm;
use crate::util::form::{Draft, FieldSpec};
use crate::util::format::{date, opt_text, quantity};
use crate::util::lookup::{RefData, RefKind};

pub struct DistributionForm;

impl ResourceForm for DistributionForm {
    type Record = Distribution;

    const REFS: &'static [RefKind] = &[RefKind::Items, RefKind::Locations, RefKind::Institutes];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::date("distribution_date", "Date").required(),
        FieldSpec::select("item_id", "Item", RefKind::Items).required(),
        FieldSpec::select("location_id", "From Store", RefKind::Locations).required(),
        FieldSpec::select("institute_id", "To Institute", RefKind::Institutes).required(),
        FieldSpec::number("quantity", "Quantity").required().non_negative(),
        FieldSpec::text("issued_to", "Issued To").required(),
        FieldSpec::textarea("remarks", "Remarks"),
        FieldSpec::file("document", "Document"),
    ];

    fn columns() -> Vec<Column<Distribution>> {
        vec![
            Column::new("Date", |d: &Distribution, _| date(d.distribution_date)),
            Column::new("Item", |d: &Distribution, refs| refs.label(RefKind::Items, d.item_id)),
            Column::new("From", |d: &Distribution, refs| refs.label(RefKind::Locations, d.location_id)),
            Column::new("To", |d: &Distribution, refs| refs.label(RefKind::Institutes, d.institute_id)),
            Column::new("Qty", |d: &Distribution, _| quantity(d.quantity)).numeric(),
            Column::new("Issued To", |d: &Distribution, _| d.issued_to.clone()),
        ]
    }

    fn to_draft(d: &Distribution) -> Draft {
        Draft::default()
            .with_date("distribution_date", d.distribution_date)
            .with_id("item_id", d.item_id)
            .with_id("location_id", d.location_id)
            .with_id("institute_id", d.institute_id)
            .with_number("quantity", d.quantity)
            .with("issued_to", d.issued_to.clone())
            .with_opt("remarks", d.remarks.as_deref())
            .with_opt("document", d.document.as_deref())
    }

    fn from_draft(d: &Draft) -> Distribution {
        Distribution {
            id: 0,
            distribution_date: d.date("distribution_date"),
            item_id: d.id("item_id"),
            location_id: d.id("location_id"),
            institute_id: d.id("institute_id"),
            quantity: d.number("quantity"),
            issued_to: d.text("issued_to"),
            remarks: d.opt_text("remarks"),
            document: d.opt_text("document"),
        }
    }

    fn detail(d: &Distribution, refs: &RefData) -> Vec<(&'static str, String)> {
        let mut rows: Vec<_> =
            Self::columns().into_iter().map(|c| (c.header, (c.render)(d, refs))).collect();
        rows.push(("Remarks", opt_text(d.remarks.as_deref())));
        rows.push(("Document", attachment_cell(d.document.as_deref())));
        rows
    }
}

#[component]
pub fn DistributionsPage() -> impl IntoView {
    resource_page::<DistributionForm>()
}
