//! Financial years purchase orders are booked against.

#[cfg(test)]
#[path = "financial_years_test.rs"]
mod financial_years_test;

use leptos::prelude::*;
use records::FinancialYear;

use crate::components::data_table::Column;
use crate::components::resource_page::resource_page;
use crate::state::resource::ResourceForm;
use crate::util::form::{Draft, FieldErrors, FieldSpec};
use crate::util::format::{date, yes_no};

pub struct FinancialYearForm;

impl ResourceForm for FinancialYearForm {
    type Record = FinancialYear;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("label", "Label").required(),
        FieldSpec::date("start_date", "Start Date").required(),
        FieldSpec::date("end_date", "End Date").required(),
        FieldSpec::checkbox("is_active", "Active"),
    ];

    fn columns() -> Vec<Column<FinancialYear>> {
        vec![
            Column::new("Label", |y: &FinancialYear, _| y.label.clone()),
            Column::new("Start", |y: &FinancialYear, _| date(y.start_date)),
            Column::new("End", |y: &FinancialYear, _| date(y.end_date)),
            Column::new("Active", |y: &FinancialYear, _| yes_no(y.is_active)),
        ]
    }

    fn to_draft(y: &FinancialYear) -> Draft {
        Draft::default()
            .with("label", y.label.clone())
            .with_date("start_date", y.start_date)
            .with_date("end_date", y.end_date)
            .with_flag("is_active", y.is_active)
    }

    fn from_draft(d: &Draft) -> FinancialYear {
        FinancialYear {
            id: 0,
            label: d.text("label"),
            start_date: d.date("start_date"),
            end_date: d.date("end_date"),
            is_active: d.flag("is_active"),
        }
    }

    fn check(y: &FinancialYear) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if y.end_date <= y.start_date {
            errors.insert("end_date", "End Date must be after Start Date".to_owned());
        }
        errors
    }
}

#[component]
pub fn FinancialYearsPage() -> impl IntoView {
    resource_page::<FinancialYearForm>()
}
