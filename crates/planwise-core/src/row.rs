//! Static row configuration for the comparison grid.
//!
//! A row is one benefit attribute displayed across all selected plans.
//! [`STANDARD_ROWS`] carries the standard seventeen rows in display order;
//! hosts with different needs can pass their own table to
//! [`crate::compare::compare_with`].

use crate::plan::BenefitField;

/// Display category grouping for benefit rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Costs,
    Copays,
    Prescriptions,
    Services,
}

impl Category {
    /// All categories in display order.
    pub const ALL: &[Category] = &[
        Category::Costs,
        Category::Copays,
        Category::Prescriptions,
        Category::Services,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Costs => "Costs",
            Category::Copays => "Copays",
            Category::Prescriptions => "Prescriptions",
            Category::Services => "Services",
        }
    }
}

/// How a row's display strings are formatted numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Currency,
    Percentage,
}

/// Direction of goodness for rows where values are comparable.
///
/// All directed rows in the standard table are costs, so lower wins; the
/// higher-is-better arm exists for host-defined rows (e.g. visit limits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LowerBetter,
    HigherBetter,
}

/// Static metadata for one displayable benefit row.
///
/// Rows without a [`Direction`] (the descriptive coverage fields) never
/// produce a best-value highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowConfig {
    pub field: BenefitField,
    pub label: &'static str,
    pub category: Category,
    pub format: Option<ValueFormat>,
    pub direction: Option<Direction>,
}

/// The standard comparison rows in display order.
pub const STANDARD_ROWS: &[RowConfig] = &[
    RowConfig {
        field: BenefitField::Premium,
        label: "Monthly Premium",
        category: Category::Costs,
        format: Some(ValueFormat::Currency),
        direction: Some(Direction::LowerBetter),
    },
    RowConfig {
        field: BenefitField::Deductible,
        label: "Annual Deductible",
        category: Category::Costs,
        format: Some(ValueFormat::Currency),
        direction: Some(Direction::LowerBetter),
    },
    RowConfig {
        field: BenefitField::OutOfPocketMax,
        label: "Out-of-Pocket Max",
        category: Category::Costs,
        format: Some(ValueFormat::Currency),
        direction: Some(Direction::LowerBetter),
    },
    RowConfig {
        field: BenefitField::Coinsurance,
        label: "Coinsurance",
        category: Category::Costs,
        format: Some(ValueFormat::Percentage),
        direction: Some(Direction::LowerBetter),
    },
    RowConfig {
        field: BenefitField::CopayPrimaryCare,
        label: "Primary Care Visit",
        category: Category::Copays,
        format: Some(ValueFormat::Currency),
        direction: Some(Direction::LowerBetter),
    },
    RowConfig {
        field: BenefitField::CopaySpecialist,
        label: "Specialist Visit",
        category: Category::Copays,
        format: Some(ValueFormat::Currency),
        direction: Some(Direction::LowerBetter),
    },
    RowConfig {
        field: BenefitField::CopayUrgentCare,
        label: "Urgent Care",
        category: Category::Copays,
        format: Some(ValueFormat::Currency),
        direction: Some(Direction::LowerBetter),
    },
    RowConfig {
        field: BenefitField::CopayEr,
        label: "Emergency Room",
        category: Category::Copays,
        format: Some(ValueFormat::Currency),
        direction: Some(Direction::LowerBetter),
    },
    RowConfig {
        field: BenefitField::RxGeneric,
        label: "Generic Drugs",
        category: Category::Prescriptions,
        format: Some(ValueFormat::Currency),
        direction: Some(Direction::LowerBetter),
    },
    RowConfig {
        field: BenefitField::RxBrand,
        label: "Brand Name Drugs",
        category: Category::Prescriptions,
        format: Some(ValueFormat::Currency),
        direction: Some(Direction::LowerBetter),
    },
    RowConfig {
        field: BenefitField::RxSpecialty,
        label: "Specialty Drugs",
        category: Category::Prescriptions,
        format: Some(ValueFormat::Percentage),
        direction: Some(Direction::LowerBetter),
    },
    RowConfig {
        field: BenefitField::PreventiveCare,
        label: "Preventive Care",
        category: Category::Services,
        format: None,
        direction: None,
    },
    RowConfig {
        field: BenefitField::MentalHealth,
        label: "Mental Health",
        category: Category::Services,
        format: None,
        direction: None,
    },
    RowConfig {
        field: BenefitField::PhysicalTherapy,
        label: "Physical Therapy",
        category: Category::Services,
        format: None,
        direction: None,
    },
    RowConfig {
        field: BenefitField::Imaging,
        label: "Imaging (MRI, CT)",
        category: Category::Services,
        format: None,
        direction: None,
    },
    RowConfig {
        field: BenefitField::LabWork,
        label: "Lab Work",
        category: Category::Services,
        format: None,
        direction: None,
    },
    RowConfig {
        field: BenefitField::Telehealth,
        label: "Telehealth",
        category: Category::Services,
        format: None,
        direction: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rows_cover_every_benefit_field_once() {
        assert_eq!(STANDARD_ROWS.len(), 17);
        for (i, row) in STANDARD_ROWS.iter().enumerate() {
            let dup = STANDARD_ROWS[i + 1..].iter().any(|r| r.field == row.field);
            assert!(!dup, "duplicate row for {:?}", row.field);
        }
    }

    #[test]
    fn directed_rows_are_formatted_rows() {
        // Every row with a direction declares a numeric format, and the
        // descriptive Services rows declare neither.
        for row in STANDARD_ROWS {
            if row.direction.is_some() {
                assert!(row.format.is_some(), "{} directed but unformatted", row.label);
            }
            if row.category == Category::Services {
                assert!(row.direction.is_none(), "{} should be undirected", row.label);
                assert!(row.format.is_none());
            }
        }
    }

    #[test]
    fn rows_grouped_in_category_display_order() {
        // Rows appear in category blocks matching Category::ALL.
        let order: Vec<usize> = STANDARD_ROWS
            .iter()
            .map(|r| Category::ALL.iter().position(|c| *c == r.category).unwrap())
            .collect();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(order, sorted);
    }

    #[test]
    fn category_labels() {
        assert_eq!(Category::Costs.label(), "Costs");
        assert_eq!(Category::ALL.len(), 4);
    }
}
