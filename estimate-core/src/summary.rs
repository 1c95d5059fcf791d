//! Export view of an estimate.
//!
//! [`EstimateSummary`] is what a print or export screen renders: the
//! estimate header, the non-zero line items and the totals, all rounded to
//! cents.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::PricingConfig;
use crate::calculations::common::{max, round_half_up};
use crate::models::{EstimateHeader, LineItem, Party, Quantity};
use crate::store::EstimateStore;

/// A priced row of the export view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub description: String,
    pub unit: String,
    pub rate: Decimal,
    pub quantity: Quantity,
    pub amount: Decimal,
}

impl From<&LineItem> for SummaryLine {
    fn from(item: &LineItem) -> Self {
        Self {
            description: item.description.clone(),
            unit: item.unit.clone(),
            rate: item.rate,
            quantity: item.quantity,
            amount: round_half_up(item.line_total()),
        }
    }
}

/// Totals and visible line items of an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateSummary {
    #[serde(default)]
    pub header: EstimateHeader,
    pub prepared_on: Option<NaiveDate>,
    /// Line items with a non-zero quantity, in estimate order.
    pub lines: Vec<SummaryLine>,
    pub subtotal: Decimal,
    /// Tax rate actually applied, after clamping to `[0, 100]`.
    pub tax_rate_percent: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    /// May be negative when the discount exceeds the taxed subtotal.
    pub grand_total: Decimal,
}

impl EstimateSummary {
    pub(crate) fn build(
        store: &EstimateStore,
        config: &PricingConfig,
        prepared_on: Option<NaiveDate>,
    ) -> Self {
        let config = config.clamped();

        let lines = store
            .items()
            .iter()
            .filter(|item| !item.quantity.is_zero())
            .map(SummaryLine::from)
            .collect();

        Self {
            header: EstimateHeader::default(),
            prepared_on,
            lines,
            subtotal: round_half_up(store.subtotal()),
            tax_rate_percent: config.tax_rate_percent,
            tax: round_half_up(store.tax_amount(config.tax_rate_percent)),
            discount: round_half_up(store.discount_amount(config.discount)),
            grand_total: round_half_up(
                store.grand_total(config.tax_rate_percent, config.discount),
            ),
        }
    }

    /// Replace the default header (title only) with the given one.
    pub fn with_header(
        mut self,
        header: EstimateHeader,
    ) -> Self {
        self.header = header;
        self
    }

    /// Grand total floored at zero, for display.
    pub fn amount_due(&self) -> Decimal {
        max(self.grand_total, Decimal::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for EstimateSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let header = &self.header;
        let mut has_header = false;
        if !header.title.trim().is_empty() {
            writeln!(f, "{}", header.title.trim())?;
            has_header = true;
        }
        has_header |= write_party(f, "From", &header.company)?;
        has_header |= write_party(f, "For", &header.client)?;
        if !header.project_title.trim().is_empty() {
            writeln!(f, "Project: {}", header.project_title.trim())?;
            has_header = true;
        }
        if let Some(date) = self.prepared_on {
            writeln!(f, "Estimate Date: {}", date.format("%B %-d, %Y"))?;
            has_header = true;
        }
        if has_header {
            writeln!(f)?;
        }

        if self.lines.is_empty() {
            writeln!(f, "(no line items)")?;
        }
        for line in &self.lines {
            writeln!(
                f,
                "{:<40} {:>8} {:<14} @ {:>10.2} = {:>12.2}",
                line.description, line.quantity, line.unit, line.rate, line.amount
            )?;
        }
        writeln!(f, "{:>78} {:>12.2}", "Subtotal", self.subtotal)?;
        writeln!(
            f,
            "{:>78} {:>12.2}",
            format!("Tax ({}%)", self.tax_rate_percent.normalize()),
            self.tax
        )?;
        if !self.discount.is_zero() {
            writeln!(f, "{:>78} {:>12.2}", "Discount", -self.discount)?;
        }
        write!(f, "{:>78} {:>12.2}", "Total", self.amount_due())
    }
}

/// Writes `label: first line` followed by the remaining lines indented to
/// match. Returns whether anything was written.
fn write_party(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    party: &Party,
) -> Result<bool, fmt::Error> {
    let lines = party.lines();
    let indent = label.len() + 2;
    for (idx, line) in lines.iter().enumerate() {
        if idx == 0 {
            writeln!(f, "{label}: {line}")?;
        } else {
            writeln!(f, "{:indent$}{line}", "")?;
        }
    }
    Ok(!lines.is_empty())
}
