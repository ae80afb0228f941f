//! Vendor master page.

use leptos::prelude::*;
use records::Vendor;

use crate::components::data_table::Column;
use crate::components::resource_page::resource_page;
use crate::state::resource::ResourceForm;
use crate::util::form::{Draft, FieldSpec};
use crate::util::format::opt_text;
use crate::util::lookup::RefData;

pub struct VendorForm;

impl ResourceForm for VendorForm {
    type Record = Vendor;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("contact_person", "Contact Person"),
        FieldSpec::text("phone", "Phone"),
        FieldSpec::text("email", "Email"),
        FieldSpec::text("gst_number", "GST Number"),
        FieldSpec::textarea("address", "Address"),
    ];

    fn columns() -> Vec<Column<Vendor>> {
        vec![
            Column::new("Name", |v: &Vendor, _| v.name.clone()),
            Column::new("Contact", |v: &Vendor, _| opt_text(v.contact_person.as_deref())),
            Column::new("Phone", |v: &Vendor, _| opt_text(v.phone.as_deref())),
            Column::new("Email", |v: &Vendor, _| opt_text(v.email.as_deref())),
            Column::new("GST No.", |v: &Vendor, _| opt_text(v.gst_number.as_deref())),
        ]
    }

    fn to_draft(v: &Vendor) -> Draft {
        Draft::default()
            .with("name", v.name.clone())
            .with_opt("contact_person", v.contact_person.as_deref())
            .with_opt("phone", v.phone.as_deref())
            .with_opt("email", v.email.as_deref())
            .with_opt("gst_number", v.gst_number.as_deref())
            .with_opt("address", v.address.as_deref())
    }

    fn from_draft(d: &Draft) -> Vendor {
        Vendor {
            id: 0,
            name: d.text("name"),
            contact_person: d.opt_text("contact_person"),
            phone: d.opt_text("phone"),
            email: d.opt_text("email"),
            address: d.opt_text("address"),
            gst_number: d.opt_text("gst_number"),
        }
    }

    fn detail(v: &Vendor, _: &RefData) -> Vec<(&'static str, String)> {
        vec![
            ("Name", v.name.clone()),
            ("Contact Person", opt_text(v.contact_person.as_deref())),
            ("Phone", opt_text(v.phone.as_deref())),
            ("Email", opt_text(v.email.as_deref())),
            ("GST Number", opt_text(v.gst_number.as_deref())),
            ("Address", opt_text(v.address.as_deref())),
        ]
    }
}

#[component]
pub fn VendorsPage() -> impl IntoView {
    resource_page::<VendorForm>()
}
