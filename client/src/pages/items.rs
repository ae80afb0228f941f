//! Item master page.
//!
//! Items reference a category and a unit; both lists are loaded for the
//! dropdowns and for resolving labels in the table.

use leptos::prelude::*;
use records::Item;

use crate::components::data_table::Column;
use crate::components::resource_page::resource_page;
use crate::state::resource::ResourceForm;
use crate::util::form::{Draft, FieldSpec};
use crate::util::format::opt_text;
use crate::util::lookup::RefKind;

pub struct ItemForm;

impl ResourceForm for ItemForm {
    type Record = Item;

    const REFS: &'static [RefKind] = &[RefKind::Categories, RefKind::Units];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("code", "Code").required(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::select("category_id", "Category", RefKind::Categories).required(),
        FieldSpec::select("unit_id", "Unit", RefKind::Units).required(),
        FieldSpec::textarea("description", "Description"),
    ];

    fn columns() -> Vec<Column<Item>> {
        vec![
            Column::new("Code", |i: &Item, _| i.code.clone()),
            Column::new("Name", |i: &Item, _| i.name.clone()),
            Column::new("Category", |i: &Item, refs| refs.label(RefKind::Categories, i.category_id)),
            Column::new("Unit", |i: &Item, refs| refs.label(RefKind::Units, i.unit_id)),
            Column::new("Description", |i: &Item, _| opt_text(i.description.as_deref())),
        ]
    }

    fn to_draft(i: &Item) -> Draft {
        Draft::default()
            .with("code", i.code.clone())
            .with("name", i.name.clone())
            .with_id("category_id", i.category_id)
            .with_id("unit_id", i.unit_id)
            .with_opt("description", i.description.as_deref())
    }

    fn from_draft(d: &Draft) -> Item {
        Item {
            id: 0,
            name: d.text("name"),
            code: d.text("code"),
            category_id: d.id("category_id"),
            unit_id: d.id("unit_id"),
            description: d.opt_text("description"),
        }
    }
}

#[component]
pub fn ItemsPage() -> impl IntoView {
    resource_page::<ItemForm>()
}
