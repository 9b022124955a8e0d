//! Built-in sample catalog.
//!
//! Stands in for a real benefits backend: four plans spanning the common
//! plan categories, with the display-string formats the value model has to
//! cope with: clean amounts, rates, qualified text, and "Not Covered".

use planwise_core::Plan;

/// The sample plans, in catalog order.
pub fn sample_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "secure-ppo".into(),
            name: "SecureChoice PPO".into(),
            carrier: "Meridian Health".into(),
            plan_type: "PPO".into(),
            premium: "$450".into(),
            deductible: "$1,500".into(),
            out_of_pocket_max: "$6,000".into(),
            coinsurance: "20%".into(),
            copay_primary_care: "$25".into(),
            copay_specialist: "$50".into(),
            copay_urgent_care: "$75".into(),
            copay_er: "$350".into(),
            rx_generic: "$10".into(),
            rx_brand: "$45".into(),
            rx_specialty: "30%".into(),
            preventive_care: "Covered 100%".into(),
            mental_health: "$25 copay".into(),
            physical_therapy: "$40 copay".into(),
            imaging: "20% after deductible".into(),
            lab_work: "Covered 100%".into(),
            telehealth: "$0".into(),
        },
        Plan {
            id: "clearpath-hmo".into(),
            name: "ClearPath HMO".into(),
            carrier: "Atlas Care".into(),
            plan_type: "HMO".into(),
            premium: "$320".into(),
            deductible: "$2,500".into(),
            out_of_pocket_max: "$7,500".into(),
            coinsurance: "30%".into(),
            copay_primary_care: "$20".into(),
            copay_specialist: "$60".into(),
            copay_urgent_care: "$60".into(),
            copay_er: "$400".into(),
            rx_generic: "$5".into(),
            rx_brand: "$50".into(),
            rx_specialty: "40%".into(),
            preventive_care: "Covered 100%".into(),
            mental_health: "$30 copay".into(),
            physical_therapy: "$35 copay".into(),
            imaging: "30% after deductible".into(),
            lab_work: "$20".into(),
            telehealth: "$0".into(),
        },
        Plan {
            id: "summit-hdhp".into(),
            name: "Summit Saver HDHP".into(),
            carrier: "Meridian Health".into(),
            plan_type: "HDHP".into(),
            premium: "$380".into(),
            deductible: "$3,000".into(),
            out_of_pocket_max: "$5,000".into(),
            coinsurance: "10%".into(),
            copay_primary_care: "$0 after deductible".into(),
            copay_specialist: "$0 after deductible".into(),
            copay_urgent_care: "10% after deductible".into(),
            copay_er: "10% after deductible".into(),
            rx_generic: "$10".into(),
            rx_brand: "$40".into(),
            rx_specialty: "25%".into(),
            preventive_care: "Covered 100%".into(),
            mental_health: "10% after deductible".into(),
            physical_therapy: "10% after deductible".into(),
            imaging: "10% after deductible".into(),
            lab_work: "10% after deductible".into(),
            telehealth: "Not Covered".into(),
        },
        Plan {
            id: "horizon-epo".into(),
            name: "Horizon EPO".into(),
            carrier: "Cascade Mutual".into(),
            plan_type: "EPO".into(),
            premium: "$410".into(),
            deductible: "$2,000".into(),
            out_of_pocket_max: "$6,500".into(),
            coinsurance: "25%".into(),
            copay_primary_care: "$30".into(),
            copay_specialist: "$55".into(),
            copay_urgent_care: "$70".into(),
            copay_er: "$375".into(),
            rx_generic: "$8".into(),
            rx_brand: "$55".into(),
            rx_specialty: "35%".into(),
            preventive_care: "Covered 100%".into(),
            mental_health: "$35 copay".into(),
            physical_therapy: "Not Covered".into(),
            imaging: "25% after deductible".into(),
            lab_work: "$15".into(),
            telehealth: "$10".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use planwise_core::row::STANDARD_ROWS;
    use planwise_core::{Coverage, classify};

    #[test]
    fn ids_are_unique() {
        let plans = sample_plans();
        for (i, plan) in plans.iter().enumerate() {
            assert!(
                !plans[i + 1..].iter().any(|p| p.id == plan.id),
                "duplicate id {}",
                plan.id
            );
        }
    }

    #[test]
    fn every_benefit_field_populated() {
        for plan in sample_plans() {
            for row in STANDARD_ROWS {
                assert!(
                    !plan.benefit(row.field).is_empty(),
                    "{} has empty {}",
                    plan.id,
                    row.label
                );
            }
        }
    }

    #[test]
    fn every_coverage_class_occurs() {
        let plans = sample_plans();
        let classes: Vec<Coverage> = plans
            .iter()
            .flat_map(|p| STANDARD_ROWS.iter().map(|r| classify(p.benefit(r.field))))
            .collect();

        assert!(classes.contains(&Coverage::Full));
        assert!(classes.contains(&Coverage::NotCovered));
        assert!(classes.contains(&Coverage::Neutral));
    }
}
