//! Form drafts, field descriptions and submission validation.
//!
//! DESIGN
//! ======
//! Inputs are edited as strings in a [`Draft`] keyed by field name and only
//! converted to a typed record once [`validate`] reports no errors. The
//! conversion getters therefore fall back to defaults instead of failing:
//! a value that reaches them unparsed has already blocked submission.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::lookup::RefKind;

/// Inline validation messages keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Input widget for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Date,
    /// Dropdown of records of the given kind; the value is the record id.
    Select(RefKind),
    Checkbox,
    File,
}

/// One form input: draft key, label and constraints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub non_negative: bool,
}

impl FieldSpec {
    const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind, required: false, non_negative: false }
    }

    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub const fn textarea(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::TextArea)
    }

    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Number)
    }

    pub const fn date(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Date)
    }

    pub const fn select(key: &'static str, label: &'static str, refs: RefKind) -> Self {
        Self::new(key, label, FieldKind::Select(refs))
    }

    pub const fn checkbox(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Checkbox)
    }

    pub const fn file(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::File)
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn non_negative(mut self) -> Self {
        self.non_negative = true;
        self
    }
}

/// String-valued form state keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    values: BTreeMap<String, String>,
}

impl Draft {
    /// An empty draft for `fields`, with date fields set to `today` and
    /// checkboxes unticked.
    #[must_use]
    pub fn blank(fields: &[FieldSpec], today: Option<NaiveDate>) -> Self {
        let mut draft = Self::default();
        for field in fields {
            match field.kind {
                FieldKind::Date => {
                    if let Some(day) = today {
                        draft.set(field.key, day.format("%Y-%m-%d").to_string());
                    }
                }
                FieldKind::Checkbox => draft.set(field.key, "false"),
                _ => {}
            }
        }
        draft
    }

    /// Raw value for `key`, empty when unset.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_owned(), value.into());
    }

    // ---- builders used when loading a record into the form ----

    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    #[must_use]
    pub fn with_opt(self, key: &str, value: Option<&str>) -> Self {
        self.with(key, value.unwrap_or_default())
    }

    #[must_use]
    pub fn with_number(self, key: &str, value: f64) -> Self {
        self.with(key, value.to_string())
    }

    #[must_use]
    pub fn with_opt_number(self, key: &str, value: Option<f64>) -> Self {
        self.with(key, value.map(|v| v.to_string()).unwrap_or_default())
    }

    #[must_use]
    pub fn with_id(self, key: &str, value: i64) -> Self {
        self.with(key, value.to_string())
    }

    #[must_use]
    pub fn with_date(self, key: &str, value: NaiveDate) -> Self {
        self.with(key, value.format("%Y-%m-%d").to_string())
    }

    #[must_use]
    pub fn with_flag(self, key: &str, value: bool) -> Self {
        self.with(key, if value { "true" } else { "false" })
    }

    // ---- getters used when converting a validated draft ----

    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.get(key).trim().to_owned()
    }

    /// Trimmed text, `None` when blank.
    #[must_use]
    pub fn opt_text(&self, key: &str) -> Option<String> {
        let value = self.get(key).trim();
        (!value.is_empty()).then(|| value.to_owned())
    }

    #[must_use]
    pub fn number(&self, key: &str) -> f64 {
        self.opt_number(key).unwrap_or_default()
    }

    #[must_use]
    pub fn opt_number(&self, key: &str) -> Option<f64> {
        parse_number(self.get(key))
    }

    #[must_use]
    pub fn id(&self, key: &str) -> i64 {
        parse_id(self.get(key)).unwrap_or_default()
    }

    #[must_use]
    pub fn date(&self, key: &str) -> NaiveDate {
        parse_date(self.get(key)).unwrap_or_default()
    }

    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == "true"
    }
}

/// Parse a finite decimal number.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an ISO `YYYY-MM-DD` date.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Parse a positive record id.
#[must_use]
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Check `draft` against `fields`, returning one message per failing field.
#[must_use]
pub fn validate(fields: &[FieldSpec], draft: &Draft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in fields {
        if let Some(message) = check_field(field, draft.get(field.key)) {
            errors.insert(field.key, message);
        }
    }
    errors
}

fn check_field(field: &FieldSpec, raw: &str) -> Option<String> {
    let value = raw.trim();
    if matches!(field.kind, FieldKind::Checkbox | FieldKind::File) {
        return None;
    }
    if value.is_empty() {
        return field.required.then(|| format!("{} is required", field.label));
    }
    match field.kind {
        FieldKind::Number => match parse_number(value) {
            None => Some(format!("{} must be a number", field.label)),
            Some(v) if field.non_negative && v < 0.0 => Some(format!("{} cannot be negative", field.label)),
            Some(_) => None,
        },
        FieldKind::Date => parse_date(value)
            .is_none()
            .then(|| format!("{} must be a valid date", field.label)),
        FieldKind::Select(_) => parse_id(value).is_none().then(|| format!("{} is required", field.label)),
        _ => None,
    }
}
