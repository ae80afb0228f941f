//! Item categories.

use leptos::prelude::*;
use records::Category;

use crate::components::data_table::Column;
use crate::components::resource_page::resource_page;
use crate::state::resource::ResourceForm;
use crate::util::form::{Draft, FieldSpec};
use crate::util::format::opt_text;

pub struct CategoryForm;

impl ResourceForm for CategoryForm {
    type Record = Category;

    const FIELDS: &'static [FieldSpec] =
        &[FieldSpec::text("name", "Name").required(), FieldSpec::textarea("description", "Description")];

    fn columns() -> Vec<Column<Category>> {
        vec![
            Column::new("Name", |c: &Category, _| c.name.clone()),
            Column::new("Description", |c: &Category, _| opt_text(c.description.as_deref())),
        ]
    }

    fn to_draft(c: &Category) -> Draft {
        Draft::default().with("name", c.name.clone()).with_opt("description", c.description.as_deref())
    }

    fn from_draft(d: &Draft) -> Category {
        Category { id: 0, name: d.text("name"), description: d.opt_text("description") }
    }
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    resource_page::<CategoryForm>()
}
