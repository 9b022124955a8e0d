pub mod compare;
pub mod cost;
pub mod coverage;
pub mod magnitude;
pub mod plan;
pub mod row;

pub use compare::{Comparison, ComparisonCell, ComparisonRow, compare, compare_with, differs, extremum};
pub use cost::{CostOutlook, CostProjection, UsageAssumptions, project};
pub use coverage::{Coverage, classify};
pub use magnitude::{parse_magnitude, parse_magnitude_checked};
pub use plan::{BenefitField, Plan};
pub use row::{Category, Direction, RowConfig, STANDARD_ROWS, ValueFormat};
