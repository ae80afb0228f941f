//! Institutes receiving distributed stock.

use leptos::prelude::*;
use records::Institute;

use crate::components::data_table::Column;
use crate::components::resource_page::resource_page;
use crate::state::resource::ResourceForm;
use crate::util::form::{Draft, FieldSpec};
use crate::util::format::opt_text;

pub struct InstituteForm;

impl ResourceForm for InstituteForm {
    type Record = Institute;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("code", "Code").required(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::textarea("address", "Address"),
    ];

    fn columns() -> Vec<Column<Institute>> {
        vec![
            Column::new("Code", |i: &Institute, _| i.code.clone()),
            Column::new("Name", |i: &Institute, _| i.name.clone()),
            Column::new("Address", |i: &Institute, _| opt_text(i.address.as_deref())),
        ]
    }

    fn to_draft(i: &Institute) -> Draft {
        Draft::default()
            .with("code", i.code.clone())
            .with("name", i.name.clone())
            .with_opt("address", i.address.as_deref())
    }

    fn from_draft(d: &Draft) -> Institute {
        Institute { id: 0, name: d.text("name"), code: d.text("code"), address: d.opt_text("address") }
    }
}

#[component]
pub fn InstitutesPage() -> impl IntoView {
    resource_page::<InstituteForm>()
}
