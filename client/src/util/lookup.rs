//! Reference lists for foreign-key labels and select options.
//!
//! Records reference each other by numeric id. Pages fetch the lists they
//! point into once per load and resolve ids to labels from here; an id with
//! no matching record renders as `#<id>`.

#[cfg(test)]
#[path = "lookup_test.rs"]
mod lookup_test;

use std::collections::BTreeMap;

use records::{
    Category, FinancialYear, Grn, Institute, Item, Location, PurchaseOrder, Resource, Unit, Vendor,
};

use crate::net::api::{ApiError, ResourceApi};

/// A record collection other records point into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RefKind {
    Vendors,
    Units,
    Categories,
    Items,
    Institutes,
    Locations,
    FinancialYears,
    PurchaseOrders,
    Grns,
}

/// One selectable record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefOption {
    pub id: i64,
    pub label: String,
}

/// Fetched reference lists.
///
/// Purchase orders and GRNs are also kept whole because detail views derive
/// receipt status and PO summaries from them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RefData {
    options: BTreeMap<RefKind, Vec<RefOption>>,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub grns: Vec<Grn>,
}

impl RefData {
    /// Replace the options for `kind` with labels of `rows`.
    pub fn insert<R: Resource>(&mut self, kind: RefKind, rows: &[R]) {
        let options = rows.iter().map(|r| RefOption { id: r.id(), label: r.label() }).collect();
        self.options.insert(kind, options);
    }

    /// Options for `kind`, empty when not loaded.
    #[must_use]
    pub fn options(&self, kind: RefKind) -> &[RefOption] {
        self.options.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Label for record `id` of `kind`, `#<id>` when unknown.
    #[must_use]
    pub fn label(&self, kind: RefKind, id: i64) -> String {
        self.options(kind)
            .iter()
            .find(|o| o.id == id)
            .map_or_else(|| format!("#{id}"), |o| o.label.clone())
    }

    #[must_use]
    pub fn purchase_order(&self, id: i64) -> Option<&PurchaseOrder> {
        self.purchase_orders.iter().find(|po| po.id == id)
    }
}

/// Fetch every list in `kinds`.
///
/// # Errors
///
/// Returns the first failing request's error.
pub async fn load_refs<A: ResourceApi>(api: &A, kinds: &[RefKind]) -> Result<RefData, ApiError> {
    let mut refs = RefData::default();
    for &kind in kinds {
        match kind {
            RefKind::Vendors => refs.insert(kind, &api.list::<Vendor>().await?),
            RefKind::Units => refs.insert(kind, &api.list::<Unit>().await?),
            RefKind::Categories => refs.insert(kind, &api.list::<Category>().await?),
            RefKind::Items => refs.insert(kind, &api.list::<Item>().await?),
            RefKind::Institutes => refs.insert(kind, &api.list::<Institute>().await?),
            RefKind::Locations => refs.insert(kind, &api.list::<Location>().await?),
            RefKind::FinancialYears => refs.insert(kind, &api.list::<FinancialYear>().await?),
            RefKind::PurchaseOrders => {
                let rows = api.list::<PurchaseOrder>().await?;
                refs.insert(kind, &rows);
                refs.purchase_orders = rows;
            }
            RefKind::Grns => {
                let rows = api.list::<Grn>().await?;
                refs.insert(kind, &rows);
                refs.grns = rows;
            }
        }
    }
    Ok(refs)
}
