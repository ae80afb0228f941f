//! In-memory [`ResourceApi`] used by controller tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use records::Resource;
use serde_json::Value;

use super::api::{ApiError, ResourceApi, Upload};

/// Stores records as JSON per resource path and records every call made.
#[derive(Default)]
pub(crate) struct MemoryApi {
    tables: RefCell<BTreeMap<&'static str, Vec<Value>>>,
    next_id: Cell<i64>,
    fail_next: RefCell<Option<ApiError>>,
    calls: RefCell<Vec<String>>,
}

impl MemoryApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert `records` directly, assigning ids.
    pub(crate) fn seed<R: Resource>(&self, records: Vec<R>) -> Vec<R> {
        records.into_iter().map(|r| self.store(r)).collect()
    }

    /// Make the next call fail with `err`.
    pub(crate) fn fail_next(&self, err: ApiError) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    /// Calls made so far, as `"<VERB> <path>"`.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn begin(&self, verb: &str, path: &str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(format!("{verb} {path}"));
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn store<R: Resource>(&self, mut record: R) -> R {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        record.set_id(id);
        let value = serde_json::to_value(&record).unwrap_or(Value::Null);
        self.tables.borrow_mut().entry(R::PATH).or_default().push(value);
        record
    }

    fn rows<R: Resource>(&self) -> Vec<R> {
        self.tables
            .borrow()
            .get(R::PATH)
            .map(|rows| rows.iter().filter_map(|v| serde_json::from_value(v.clone()).ok()).collect())
            .unwrap_or_default()
    }

    fn not_found<R: Resource>(id: i64) -> ApiError {
        ApiError::Status { status: 404, message: format!("{} {id} not found", R::TITLE) }
    }
}

impl ResourceApi for MemoryApi {
    async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        self.begin("GET", R::PATH)?;
        Ok(self.rows())
    }

    async fn get<R: Resource>(&self, id: i64) -> Result<R, ApiError> {
        self.begin("GET", &format!("{}/{id}", R::PATH))?;
        self.rows::<R>()
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| Self::not_found::<R>(id))
    }

    async fn create<R: Resource>(&self, record: &R, file: Option<&Upload>) -> Result<R, ApiError> {
        self.begin("POST", R::PATH)?;
        let mut record = record.clone();
        if let Some(upload) = file {
            record.set_attachment(Some(format!("{}/{}", R::PATH, upload.name)));
        }
        Ok(self.store(record))
    }

    async fn update<R: Resource>(&self, id: i64, record: &R, file: Option<&Upload>) -> Result<R, ApiError> {
        self.begin("PUT", &format!("{}/{id}", R::PATH))?;
        let mut rows = self.rows::<R>();
        let slot = rows.iter_mut().find(|r| r.id() == id).ok_or_else(|| Self::not_found::<R>(id))?;
        let previous = slot.attachment().map(str::to_owned);
        *slot = record.clone();
        slot.set_id(id);
        match file {
            Some(upload) => slot.set_attachment(Some(format!("{}/{}", R::PATH, upload.name))),
            None if slot.attachment().is_none() => slot.set_attachment(previous),
            None => {}
        }
        let updated = slot.clone();
        let values = rows.iter().filter_map(|r| serde_json::to_value(r).ok()).collect();
        self.tables.borrow_mut().insert(R::PATH, values);
        Ok(updated)
    }

    async fn delete<R: Resource>(&self, id: i64) -> Result<(), ApiError> {
        self.begin("DELETE", &format!("{}/{id}", R::PATH))?;
        let mut rows = self.rows::<R>();
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        if rows.len() == before {
            return Err(Self::not_found::<R>(id));
        }
        let values = rows.iter().filter_map(|r| serde_json::to_value(r).ok()).collect();
        self.tables.borrow_mut().insert(R::PATH, values);
        Ok(())
    }
}
