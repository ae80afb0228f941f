//! Line totals for priced records.
//!
//! `total = quantity * rate - discount + tax`, where
//! `tax = (quantity * rate - discount) * tax_percentage / 100`.
//! Values are kept unrounded; rounding is a display concern.

#[cfg(test)]
#[path = "totals_test.rs"]
mod totals_test;

use serde::{Deserialize, Serialize};

/// A record with quantity/rate pricing and optional discount and tax.
pub trait Priced {
    fn quantity(&self) -> f64;
    fn rate(&self) -> f64;
    fn discount(&self) -> Option<f64>;
    fn tax_percentage(&self) -> Option<f64>;

    /// Derived totals for this line.
    fn totals(&self) -> LineTotals {
        LineTotals::compute(
            self.quantity(),
            self.rate(),
            self.discount().unwrap_or(0.0),
            self.tax_percentage().unwrap_or(0.0),
        )
    }
}

/// Breakdown of a priced line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineTotals {
    /// `quantity * rate`.
    pub gross: f64,
    pub discount: f64,
    /// `gross - discount`, the base tax is charged on.
    pub taxable: f64,
    pub tax: f64,
    pub total: f64,
}

impl LineTotals {
    #[must_use]
    pub fn compute(quantity: f64, rate: f64, discount: f64, tax_percentage: f64) -> Self {
        let gross = quantity * rate;
        let taxable = gross - discount;
        let tax = taxable * tax_percentage / 100.0;
        Self { gross, discount, taxable, tax, total: taxable + tax }
    }

    /// Sum a sequence of line totals component-wise.
    pub fn sum<I: IntoIterator<Item = LineTotals>>(lines: I) -> Self {
        lines.into_iter().fold(Self::default(), |acc, l| Self {
            gross: acc.gross + l.gross,
            discount: acc.discount + l.discount,
            taxable: acc.taxable + l.taxable,
            tax: acc.tax + l.tax,
            total: acc.total + l.total,
        })
    }
}

/// Round a monetary value to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
