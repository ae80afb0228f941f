//! Display formatting for table cells and detail panels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::NaiveDate;
use records::totals::round2;

/// Placeholder for absent values.
pub const EMPTY: &str = "—";

/// Monetary value with two decimals.
#[must_use]
pub fn money(value: f64) -> String {
    format!("{:.2}", round2(value))
}

#[must_use]
pub fn opt_money(value: Option<f64>) -> String {
    value.map_or_else(|| EMPTY.to_owned(), money)
}

/// Quantity without trailing zeros (`10`, `2.5`, `0.125`).
#[must_use]
pub fn quantity(value: f64) -> String {
    let fixed = format!("{value:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" { "0".to_owned() } else { trimmed.to_owned() }
}

#[must_use]
pub fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| EMPTY.to_owned(), |v| format!("{}%", quantity(v)))
}

#[must_use]
pub fn opt_text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => EMPTY.to_owned(),
    }
}

#[must_use]
pub fn date(value: NaiveDate) -> String {
    value.format("%d %b %Y").to_string()
}

#[must_use]
pub fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_owned()
}

/// Public URL of a stored upload.
#[must_use]
pub fn attachment_href(path: &str) -> String {
    format!("/uploads/{}", path.trim_start_matches('/'))
}

/// Original filename of a stored upload, without directory or unique prefix.
#[must_use]
pub fn attachment_name(path: &str) -> String {
    let file = path.rsplit('/').next().unwrap_or(path);
    // Stored names are `<36-char uuid>-<name>`.
    match file.get(36..).and_then(|rest| rest.strip_prefix('-')) {
        Some(name) if file.as_bytes().get(8) == Some(&b'-') => name.to_owned(),
        _ => file.to_owned(),
    }
}

/// Today's date in the browser's local time zone.
#[must_use]
pub fn today() -> Option<NaiveDate> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).ok()?;
        NaiveDate::from_ymd_opt(year, now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
