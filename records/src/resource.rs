//! Resource metadata shared by the REST server and the console.
//!
//! DESIGN
//! ======
//! Every entity exposes the same CRUD surface, so the per-entity knowledge
//! both sides need (URL segment, envelope key, display names, attachment
//! slot) is captured once here instead of repeated per page or per handler.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record type exposed as a REST collection.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// URL segment under `/api/`, e.g. `purchase-orders`.
    const PATH: &'static str;
    /// Singular envelope key some back-ends nest responses under, e.g. `purchaseOrder`.
    const KEY: &'static str;
    /// Singular display name.
    const TITLE: &'static str;
    /// Plural display name used for page headings and navigation.
    const PLURAL: &'static str;
    /// Whether the record carries an uploaded document.
    const ATTACHMENT: bool = false;

    /// Server-assigned identifier. `0` for records not yet created.
    fn id(&self) -> i64;

    /// Overwrite the identifier, used when the server takes it from the URL.
    fn set_id(&mut self, id: i64);

    /// Short human label used when another record references this one.
    fn label(&self) -> String {
        format!("#{}", self.id())
    }

    /// Stored path of the uploaded document, if any.
    fn attachment(&self) -> Option<&str> {
        None
    }

    /// Replace the stored document path. No-op for records without one.
    fn set_attachment(&mut self, path: Option<String>) {
        let _ = path;
    }
}

/// Collection URL for a resource, relative to the site root.
#[must_use]
pub fn collection_url<R: Resource>() -> String {
    format!("/api/{}", R::PATH)
}

/// Member URL for a single record of a resource.
#[must_use]
pub fn member_url<R: Resource>(id: i64) -> String {
    format!("/api/{}/{id}", R::PATH)
}
