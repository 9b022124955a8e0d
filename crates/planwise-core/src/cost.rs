//! Estimated annual cost projection per plan.
//!
//! An illustrative estimate, not plan economics: fixed utilisation
//! assumptions applied to the parsed premium and copays. Hosts should
//! present totals as approximate.

use serde::Serialize;

use crate::magnitude::parse_magnitude;
use crate::plan::Plan;

/// Fixed utilisation assumptions behind the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageAssumptions {
    pub primary_care_visits: u32,
    pub specialist_visits: u32,
    /// Months of generic-prescription fills per year.
    pub generic_fill_months: u32,
}

/// Typical usage: 4 primary care visits, 2 specialist visits, 12 months of
/// generic prescriptions.
impl Default for UsageAssumptions {
    fn default() -> Self {
        Self {
            primary_care_visits: 4,
            specialist_visits: 2,
            generic_fill_months: 12,
        }
    }
}

/// Projected annual cost for one plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostProjection {
    pub plan_id: String,
    pub plan_name: String,
    /// Monthly premium × 12.
    pub annual_premium: f64,
    /// Parsed deductible, carried for display. Not part of the total: the
    /// projection models routine usage, not deductible-hitting years.
    pub deductible: f64,
    /// Copay and prescription spend under the usage assumptions.
    pub estimated_usage: f64,
    /// `annual_premium + estimated_usage`.
    pub estimated_total: f64,
}

/// Project one plan's estimated annual cost.
pub fn project(plan: &Plan, usage: &UsageAssumptions) -> CostProjection {
    let annual_premium = parse_magnitude(&plan.premium) * 12.0;
    let estimated_usage = f64::from(usage.primary_care_visits)
        * parse_magnitude(&plan.copay_primary_care)
        + f64::from(usage.specialist_visits) * parse_magnitude(&plan.copay_specialist)
        + f64::from(usage.generic_fill_months) * parse_magnitude(&plan.rx_generic);

    CostProjection {
        plan_id: plan.id.clone(),
        plan_name: plan.name.clone(),
        annual_premium,
        deductible: parse_magnitude(&plan.deductible),
        estimated_usage,
        estimated_total: annual_premium + estimated_usage,
    }
}

/// Cost projections across the selected plan set, with the set-level
/// extremes needed for best-value and savings indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct CostOutlook {
    /// One projection per plan, in selection order.
    pub projections: Vec<CostProjection>,
    pub lowest_total: f64,
    pub highest_total: f64,
    comparative: bool,
}

impl CostOutlook {
    /// Project every selected plan. `None` for an empty selection: nothing
    /// to project, not an error.
    pub fn compute(plans: &[Plan], usage: &UsageAssumptions) -> Option<Self> {
        if plans.is_empty() {
            return None;
        }
        let projections: Vec<CostProjection> =
            plans.iter().map(|p| project(p, usage)).collect();
        let lowest_total = projections
            .iter()
            .map(|p| p.estimated_total)
            .fold(f64::INFINITY, f64::min);
        let highest_total = projections
            .iter()
            .map(|p| p.estimated_total)
            .fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            projections,
            lowest_total,
            highest_total,
            comparative: plans.len() >= 2,
        })
    }

    /// Whether at least two plans are compared, the threshold for showing
    /// best-value and savings indicators.
    pub fn comparative(&self) -> bool {
        self.comparative
    }

    /// Whether `projection` carries the best-value tag: minimum total among
    /// the set, and at least two plans compared. Ties all tag.
    pub fn is_best_value(&self, projection: &CostProjection) -> bool {
        self.comparative && projection.estimated_total == self.lowest_total
    }

    /// Savings against the most expensive plan in the set, shown only when
    /// positive and at least two plans are compared.
    pub fn savings_vs_highest(&self, projection: &CostProjection) -> Option<f64> {
        if !self.comparative {
            return None;
        }
        let savings = self.highest_total - projection.estimated_total;
        (savings > 0.0).then_some(savings)
    }
}
