//! Benefit plan records.

use serde::{Deserialize, Serialize};

/// One insurance offering with a fixed set of benefit fields.
///
/// Every benefit field is a display string exactly as the plan supplier
/// produced it ("$450", "20%", "Covered 100%"). No field is guaranteed to be
/// numerically parseable; see [`crate::magnitude`] for how values degrade.
/// Records are immutable inputs; the value model only derives views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub carrier: String,
    /// Plan category, e.g. "PPO", "HMO", "EPO", "HDHP".
    #[serde(rename = "type")]
    pub plan_type: String,

    pub premium: String,
    pub deductible: String,
    pub out_of_pocket_max: String,
    pub coinsurance: String,
    pub copay_primary_care: String,
    pub copay_specialist: String,
    pub copay_urgent_care: String,
    pub copay_er: String,
    pub rx_generic: String,
    pub rx_brand: String,
    pub rx_specialty: String,
    pub preventive_care: String,
    pub mental_health: String,
    pub physical_therapy: String,
    pub imaging: String,
    pub lab_work: String,
    pub telehealth: String,
}

/// Keys for the seventeen benefit fields of a [`Plan`].
///
/// Row configuration addresses plan fields through this enum so the
/// comparison grid never does stringly-typed lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenefitField {
    Premium,
    Deductible,
    OutOfPocketMax,
    Coinsurance,
    CopayPrimaryCare,
    CopaySpecialist,
    CopayUrgentCare,
    CopayEr,
    RxGeneric,
    RxBrand,
    RxSpecialty,
    PreventiveCare,
    MentalHealth,
    PhysicalTherapy,
    Imaging,
    LabWork,
    Telehealth,
}

impl Plan {
    /// The display string for one benefit field.
    pub fn benefit(&self, field: BenefitField) -> &str {
        match field {
            BenefitField::Premium => &self.premium,
            BenefitField::Deductible => &self.deductible,
            BenefitField::OutOfPocketMax => &self.out_of_pocket_max,
            BenefitField::Coinsurance => &self.coinsurance,
            BenefitField::CopayPrimaryCare => &self.copay_primary_care,
            BenefitField::CopaySpecialist => &self.copay_specialist,
            BenefitField::CopayUrgentCare => &self.copay_urgent_care,
            BenefitField::CopayEr => &self.copay_er,
            BenefitField::RxGeneric => &self.rx_generic,
            BenefitField::RxBrand => &self.rx_brand,
            BenefitField::RxSpecialty => &self.rx_specialty,
            BenefitField::PreventiveCare => &self.preventive_care,
            BenefitField::MentalHealth => &self.mental_health,
            BenefitField::PhysicalTherapy => &self.physical_therapy,
            BenefitField::Imaging => &self.imaging,
            BenefitField::LabWork => &self.lab_work,
            BenefitField::Telehealth => &self.telehealth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> Plan {
        Plan {
            id: "p1".into(),
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
        }
    }

    #[test]
    fn benefit_accessor_maps_fields() {
        let p = plan();
        assert_eq!(p.benefit(BenefitField::Premium), "$450");
        assert_eq!(p.benefit(BenefitField::CopayEr), "$350");
        assert_eq!(p.benefit(BenefitField::Telehealth), "$0");
    }

    #[test]
    fn plan_category_serialises_as_type() {
        let json = serde_json::to_value(plan()).unwrap();
        assert_eq!(json["type"], "PPO");
        assert!(json.get("plan_type").is_none());
    }
}
