//! Detail-panel rows shared by several record pages.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use records::totals::LineTotals;

use crate::util::format::{EMPTY, attachment_name, money};

/// Gross, discount, tax and total lines of a priced record.
pub(crate) fn totals_rows(totals: LineTotals) -> Vec<(&'static str, String)> {
    vec![
        ("Gross", money(totals.gross)),
        ("Discount", money(totals.discount)),
        ("Taxable", money(totals.taxable)),
        ("Tax", money(totals.tax)),
        ("Total", money(totals.total)),
    ]
}

/// Display name of an uploaded document.
pub(crate) fn attachment_cell(path: Option<&str>) -> String {
    path.map_or_else(|| EMPTY.to_owned(), attachment_name)
}
