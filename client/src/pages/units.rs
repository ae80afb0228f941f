//! Units of measure.

use leptos::prelude::*;
use records::Unit;

use crate::components::data_table::Column;
use crate::components::resource_page::resource_page;
use crate::state::resource::ResourceForm;
use crate::util::form::{Draft, FieldSpec};

pub struct UnitForm;

impl ResourceForm for UnitForm {
    type Record = Unit;

    const FIELDS: &'static [FieldSpec] =
        &[FieldSpec::text("name", "Name").required(), FieldSpec::text("abbreviation", "Abbreviation").required()];

    fn columns() -> Vec<Column<Unit>> {
        vec![
            Column::new("Name", |u: &Unit, _| u.name.clone()),
            Column::new("Abbreviation", |u: &Unit, _| u.abbreviation.clone()),
        ]
    }

    fn to_draft(u: &Unit) -> Draft {
        Draft::default().with("name", u.name.clone()).with("abbreviation", u.abbreviation.clone())
    }

    fn from_draft(d: &Draft) -> Unit {
        Unit { id: 0, name: d.text("name"), abbreviation: d.text("abbreviation") }
    }
}

#[component]
pub fn UnitsPage() -> impl IntoView {
    resource_page::<UnitForm>()
}
