//! Row-by-row comparison across a selected plan set.
//!
//! Derives, for every configured row and every selected plan, the parsed
//! magnitude, a best-value flag, a differs-across-plans flag, and the
//! coverage classification. Pure and stateless: hosts re-invoke it on every
//! selection change, and recomputation is linear in plans × rows.

use std::collections::HashSet;

use crate::coverage::{Coverage, classify};
use crate::magnitude::parse_magnitude;
use crate::plan::Plan;
use crate::row::{Direction, RowConfig, STANDARD_ROWS};

/// Whether raw display values are not all identical.
///
/// Textual equality only: `"$0"` and `"$0.00"` differ even though they mean
/// the same amount. Upstream plan data is consistently formatted, so a
/// textual mismatch is a real difference worth highlighting.
pub fn differs(values: &[&str]) -> bool {
    values.iter().collect::<HashSet<_>>().len() > 1
}

/// The extremal magnitude for a row: minimum when lower is better, maximum
/// otherwise. `None` for an empty set.
pub fn extremum(magnitudes: &[f64], direction: Direction) -> Option<f64> {
    magnitudes.iter().copied().reduce(|a, b| match direction {
        Direction::LowerBetter => a.min(b),
        Direction::HigherBetter => a.max(b),
    })
}

/// One (row, plan) cell of the comparison grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonCell {
    pub plan_id: String,
    /// The raw display string, untouched.
    pub value: String,
    pub magnitude: f64,
    pub coverage: Coverage,
    /// True when this cell's magnitude equals the row's best value and at
    /// least two plans are compared. A lone plan is trivially extremal, and
    /// a comparison claim needs something to compare against, so no cell is
    /// ever flagged in a single-plan grid. Ties all flag.
    pub best: bool,
}

/// One benefit row computed across the selected plans.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub config: RowConfig,
    /// Whether the raw display values are not all identical.
    pub differs: bool,
    /// The extremal magnitude, present whenever the row declares a
    /// direction, including for a single plan, where it is that plan's own
    /// value. Undirected rows have no best value.
    pub best: Option<f64>,
    /// One cell per selected plan, in selection order.
    pub cells: Vec<ComparisonCell>,
}

/// The computed comparison grid.
///
/// Plan order is selection order and becomes column order; the model
/// attaches plan ids to cells so hosts need no positional bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
    comparative: bool,
}

impl Comparison {
    /// Whether at least two plans are compared, the threshold for showing
    /// best-value and savings indicators.
    pub fn comparative(&self) -> bool {
        self.comparative
    }
}

/// Compute the grid over [`STANDARD_ROWS`].
pub fn compare(plans: &[Plan]) -> Comparison {
    compare_with(plans, STANDARD_ROWS)
}

/// Compute the grid over a host-supplied row table.
///
/// An empty plan set yields an empty grid rather than an error: there is
/// nothing to compare, and empty selection is an ordinary UI state.
pub fn compare_with(plans: &[Plan], rows: &[RowConfig]) -> Comparison {
    if plans.is_empty() {
        return Comparison {
            rows: Vec::new(),
            comparative: false,
        };
    }
    let comparative = plans.len() >= 2;

    let rows = rows
        .iter()
        .map(|config| {
            let values: Vec<&str> = plans.iter().map(|p| p.benefit(config.field)).collect();
            let magnitudes: Vec<f64> = values.iter().map(|v| parse_magnitude(v)).collect();
            let best = config.direction.and_then(|d| extremum(&magnitudes, d));
            let row_differs = differs(&values);

            let cells = plans
                .iter()
                .zip(values.iter().zip(&magnitudes))
                .map(|(plan, (value, &magnitude))| ComparisonCell {
                    plan_id: plan.id.clone(),
                    value: (*value).to_string(),
                    magnitude,
                    coverage: classify(value),
                    best: comparative && best.is_some_and(|b| magnitude == b),
                })
                .collect();

            ComparisonRow {
                config: *config,
                differs: row_differs,
                best,
                cells,
            }
        })
        .collect();

    Comparison { rows, comparative }
}
