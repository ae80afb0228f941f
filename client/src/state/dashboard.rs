//! Record counts for the dashboard tiles.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use records::report::receipt_status;
use records::{
    Category, Distribution, FinancialYear, Grn, Institute, Invoice, Item, Location, PurchaseOrder, QuickGrn,
    QuickInvoice, Resource, Return, StockEntry, Unit, Vendor,
};

use crate::net::api::{ApiError, ResourceApi};

/// One dashboard tile linking to a record page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub title: &'static str,
    pub href: String,
    pub count: usize,
}

impl Tile {
    fn of<R: Resource>(count: usize) -> Self {
        Self { title: R::PLURAL, href: format!("/{}", R::PATH), count }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dashboard {
    pub tiles: Vec<Tile>,
    /// Purchase orders with quantity still pending receipt.
    pub open_orders: usize,
}

async fn count<R: Resource, A: ResourceApi>(api: &A) -> Result<Tile, ApiError> {
    Ok(Tile::of::<R>(api.list::<R>().await?.len()))
}

/// Fetch every collection and count it.
///
/// # Errors
///
/// Returns the first failing request's error.
pub async fn load_dashboard<A: ResourceApi>(api: &A) -> Result<Dashboard, ApiError> {
    let orders = api.list::<PurchaseOrder>().await?;
    let grns = api.list::<Grn>().await?;
    let open_orders = orders.iter().filter(|po| !receipt_status(po, &grns).is_complete()).count();

    let tiles = vec![
        Tile::of::<PurchaseOrder>(orders.len()),
        Tile::of::<Grn>(grns.len()),
        count::<Invoice, _>(api).await?,
        count::<Distribution, _>(api).await?,
        count::<Return, _>(api).await?,
        count::<StockEntry, _>(api).await?,
        count::<QuickGrn, _>(api).await?,
        count::<QuickInvoice, _>(api).await?,
        count::<Vendor, _>(api).await?,
        count::<Item, _>(api).await?,
        count::<Category, _>(api).await?,
        count::<Unit, _>(api).await?,
        count::<Institute, _>(api).await?,
        count::<Location, _>(api).await?,
        count::<FinancialYear, _>(api).await?,
    ];
    Ok(Dashboard { tiles, open_orders })
}
