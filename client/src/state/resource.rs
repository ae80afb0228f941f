//! Generic list/form controller shared by every record page.
//!
//! DESIGN
//! ======
//! A page declares its record type, columns and form fields through
//! [`ResourceForm`]; everything else (loading, view switching, validation,
//! create/update/delete and re-fetching) lives here once. The form's
//! "visible / editing / editing which id" flags are a single [`ViewMode`].
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::resource_page` holds a `ResourceState` in an `RwSignal`,
//! calls the transition methods from event handlers and runs the async
//! [`fetch`], [`save`] and [`remove`] flows against `HttpApi`. After every
//! successful mutation the full list is fetched again; nothing is patched
//! locally.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use chrono::NaiveDate;
use records::Resource;

use crate::components::data_table::Column;
use crate::net::api::{ApiError, ResourceApi, Upload};
use crate::util::form::{Draft, FieldErrors, FieldSpec, validate};
use crate::util::lookup::{RefData, RefKind, load_refs};

/// Per-page description of a record type's table and form.
pub trait ResourceForm: 'static {
    type Record: Resource;

    /// Reference lists loaded alongside the rows for labels and selects.
    const REFS: &'static [RefKind] = &[];
    const FIELDS: &'static [FieldSpec];

    fn columns() -> Vec<Column<Self::Record>>;

    /// Load an existing record into the form.
    fn to_draft(record: &Self::Record) -> Draft;

    /// Build a record from a draft that passed [`validate`].
    fn from_draft(draft: &Draft) -> Self::Record;

    /// Rules spanning several fields, checked once every field is valid.
    fn check(record: &Self::Record) -> FieldErrors {
        let _ = record;
        FieldErrors::new()
    }

    /// Label/value pairs shown when a row is expanded.
    fn detail(record: &Self::Record, refs: &RefData) -> Vec<(&'static str, String)> {
        Self::columns()
            .into_iter()
            .map(|c| (c.header, (c.render)(record, refs)))
            .collect()
    }
}

/// What the page is showing besides the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    List,
    Create,
    Edit(i64),
    /// Table with the row's detail expanded.
    Detail(i64),
}

impl ViewMode {
    #[must_use]
    pub fn form_open(self) -> bool {
        matches!(self, Self::Create | Self::Edit(_))
    }

    #[must_use]
    pub fn expanded(self) -> Option<i64> {
        match self {
            Self::Detail(id) => Some(id),
            _ => None,
        }
    }
}

/// A validated create (`target: None`) or update request.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission<R> {
    pub target: Option<i64>,
    pub record: R,
}

impl<R: Resource> Submission<R> {
    /// Confirmation shown once the request succeeded.
    #[must_use]
    pub fn done_message(&self) -> String {
        match self.target {
            Some(_) => format!("{} updated", R::TITLE),
            None => format!("{} created", R::TITLE),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResourceState<R> {
    pub rows: Vec<R>,
    pub refs: RefData,
    pub mode: ViewMode,
    pub draft: Draft,
    pub errors: FieldErrors,
    pub loading: bool,
    /// A create, update or delete is in flight.
    pub busy: bool,
    /// Row awaiting delete confirmation.
    pub pending_delete: Option<i64>,
}

impl<R> Default for ResourceState<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            refs: RefData::default(),
            mode: ViewMode::List,
            draft: Draft::default(),
            errors: FieldErrors::new(),
            loading: true,
            busy: false,
            pending_delete: None,
        }
    }
}

impl<R: Resource> ResourceState<R> {
    #[must_use]
    pub fn row(&self, id: i64) -> Option<&R> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn loaded(&mut self, rows: Vec<R>, refs: RefData) {
        self.rows = rows;
        self.refs = refs;
        self.loading = false;
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    pub fn open_create<F: ResourceForm<Record = R>>(&mut self, today: Option<NaiveDate>) {
        self.mode = ViewMode::Create;
        self.draft = Draft::blank(F::FIELDS, today);
        self.errors.clear();
    }

    /// Open the form on row `id`; returns `false` if the row is gone.
    pub fn open_edit<F: ResourceForm<Record = R>>(&mut self, id: i64) -> bool {
        let Some(row) = self.row(id) else {
            return false;
        };
        self.draft = F::to_draft(row);
        self.mode = ViewMode::Edit(id);
        self.errors.clear();
        true
    }

    /// Expand row `id`, or collapse it if already expanded.
    pub fn toggle_detail(&mut self, id: i64) {
        self.mode = if self.mode == ViewMode::Detail(id) { ViewMode::List } else { ViewMode::Detail(id) };
    }

    /// Leave the form without submitting.
    pub fn close(&mut self) {
        self.mode = ViewMode::List;
        self.draft = Draft::default();
        self.errors.clear();
    }

    /// Record an edit to `key`, clearing its error.
    pub fn edit(&mut self, key: &str, value: String) {
        self.draft.set(key, value);
        self.errors.remove(key);
    }

    /// Validate the open form and mark the page busy.
    ///
    /// Returns `None` (and sends nothing) when the form is closed, a request
    /// is already in flight, or validation fails; failures are left in
    /// `errors` for inline display.
    pub fn submission<F: ResourceForm<Record = R>>(&mut self) -> Option<Submission<R>> {
        if self.busy {
            return None;
        }
        let target = match self.mode {
            ViewMode::Create => None,
            ViewMode::Edit(id) => Some(id),
            ViewMode::List | ViewMode::Detail(_) => return None,
        };

        let record = F::from_draft(&self.draft);
        let mut errors = validate(F::FIELDS, &self.draft);
        if errors.is_empty() {
            errors = F::check(&record);
        }
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        self.errors.clear();
        self.busy = true;
        Some(Submission { target, record })
    }

    /// A submission succeeded and `rows` is the re-fetched list.
    pub fn saved(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.busy = false;
        self.close();
    }

    /// A submission or delete failed; the form stays as the user left it.
    pub fn failed(&mut self) {
        self.busy = false;
    }

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Take the confirmed delete target and mark the page busy.
    pub fn confirm_delete(&mut self) -> Option<i64> {
        if self.busy {
            return None;
        }
        let id = self.pending_delete.take()?;
        self.busy = true;
        Some(id)
    }

    /// Row `id` was deleted and `rows` is the re-fetched list.
    pub fn deleted(&mut self, id: i64, rows: Vec<R>) {
        self.rows = rows;
        self.busy = false;
        if matches!(self.mode, ViewMode::Edit(x) | ViewMode::Detail(x) if x == id) {
            self.close();
        }
    }
}

// =============================================================================
// ASYNC FLOWS
// =============================================================================

/// Fetch the rows of `R` plus the reference lists named in `refs`.
///
/// # Errors
///
/// Returns the first failing request's error.
pub async fn fetch<R: Resource, A: ResourceApi>(api: &A, refs: &[RefKind]) -> Result<(Vec<R>, RefData), ApiError> {
    let rows = api.list::<R>().await?;
    let refs = load_refs(api, refs).await?;
    Ok((rows, refs))
}

/// Send `submission` and re-fetch the list.
///
/// # Errors
///
/// Returns the create/update or list error.
pub async fn save<R: Resource, A: ResourceApi>(
    api: &A,
    submission: &Submission<R>,
    file: Option<&Upload>,
) -> Result<Vec<R>, ApiError> {
    match submission.target {
        Some(id) => api.update(id, &submission.record, file).await?,
        None => api.create(&submission.record, file).await?,
    };
    api.list::<R>().await
}

/// Delete row `id` and re-fetch the list.
///
/// # Errors
///
/// Returns the delete or list error.
pub async fn remove<R: Resource, A: ResourceApi>(api: &A, id: i64) -> Result<Vec<R>, ApiError> {
    api.delete::<R>(id).await?;
    api.list::<R>().await
}
