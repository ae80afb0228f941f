use super::*;
use chrono::NaiveDate;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn year(start: NaiveDate, end: NaiveDate) -> FinancialYear {
    FinancialYear { id: 1, label: "2024-25".to_owned(), start_date: start, end_date: end, is_active: true }
}

#[test]
fn draft_round_trip_keeps_dates_and_flag() {
    let original = year(ymd(2024, 4, 1), ymd(2025, 3, 31));
    let draft = FinancialYearForm::to_draft(&original);
    assert_eq!(draft.get("start_date"), "2024-04-01");
    assert_eq!(draft.get("is_active"), "true");

    let rebuilt = FinancialYearForm::from_draft(&draft);
    assert_eq!(rebuilt, FinancialYear { id: 0, ..original });
}

#[test]
fn check_rejects_end_before_start() {
    let errors = FinancialYearForm::check(&year(ymd(2025, 3, 31), ymd(2024, 4, 1)));
    assert_eq!(errors.get("end_date").map(String::as_str), Some("End Date must be after Start Date"));
}

#[test]
fn check_rejects_zero_length_year() {
    let day = ymd(2024, 4, 1);
    assert!(FinancialYearForm::check(&year(day, day)).contains_key("end_date"));
}

#[test]
fn check_accepts_ordered_dates() {
    assert!(FinancialYearForm::check(&year(ymd(2024, 4, 1), ymd(2025, 3, 31))).is_empty());
}
