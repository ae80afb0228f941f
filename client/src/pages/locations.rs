//! Store locations, each belonging to an institute.

use leptos::prelude::*;
use records::Location;

use crate::components::data_table::Column;
use crate::components::resource_page::resource_page;
use crate::state::resource::ResourceForm;
use crate::util::form::{Draft, FieldSpec};
use crate::util::format::opt_text;
use crate::util::lookup::RefKind;

pub struct LocationForm;

impl ResourceForm for LocationForm {
    type Record = Location;

    const REFS: &'static [RefKind] = &[RefKind::Institutes];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Name").required(),
        FieldSpec::select("institute_id", "Institute", RefKind::Institutes).required(),
        FieldSpec::textarea("description", "Description"),
    ];

    fn columns() -> Vec<Column<Location>> {
        vec![
            Column::new("Name", |l: &Location, _| l.name.clone()),
            Column::new("Institute", |l: &Location, refs| refs.label(RefKind::Institutes, l.institute_id)),
            Column::new("Description", |l: &Location, _| opt_text(l.description.as_deref())),
        ]
    }

    fn to_draft(l: &Location) -> Draft {
        Draft::default()
            .with("name", l.name.clone())
            .with_id("institute_id", l.institute_id)
            .with_opt("description", l.description.as_deref())
    }

    fn from_draft(d: &Draft) -> Location {
        Location {
            id: 0,
            name: d.text("name"),
            institute_id: d.id("institute_id"),
            description: d.opt_text("description"),
        }
    }
}

#[component]
pub fn LocationsPage() -> impl IntoView {
    resource_page::<LocationForm>()
}
