//! Plan catalog suppliers.

use std::fs;
use std::path::Path;

use planwise_core::Plan;
use tracing::info;

use crate::StoreError;

/// Read-only supplier of benefit plan records.
///
/// The value model treats its data supplier as an external collaborator:
/// anything that can hand over `Plan` records (an in-memory catalog, a
/// file, a remote API) can sit behind this trait. Suppliers never mutate
/// records; callers get owned snapshots.
pub trait PlanSource {
    /// Every plan in the catalog, in catalog order.
    fn plans(&self) -> Result<Vec<Plan>, StoreError>;

    /// One plan by id.
    fn plan(&self, id: &str) -> Result<Plan, StoreError>;

    /// Fetch plans by id, preserving the requested order.
    ///
    /// Selection order drives column order in comparison output, so the
    /// result order is the caller's, not the catalog's.
    fn select(&self, ids: &[String]) -> Result<Vec<Plan>, StoreError> {
        ids.iter().map(|id| self.plan(id)).collect()
    }
}

/// In-memory plan catalog.
///
/// The canonical supplier for this product: plan data ships as fixtures or a
/// host-provided JSON file and fits comfortably in memory. Ids are validated
/// unique on construction.
#[derive(Debug)]
pub struct MemCatalog {
    plans: Vec<Plan>,
}

impl MemCatalog {
    /// Build a catalog from records, rejecting duplicate ids.
    pub fn new(plans: Vec<Plan>) -> Result<Self, StoreError> {
        for (i, plan) in plans.iter().enumerate() {
            if plans[i + 1..].iter().any(|p| p.id == plan.id) {
                return Err(StoreError::DuplicateId(plan.id.clone()));
            }
        }
        Ok(Self { plans })
    }

    /// Load a catalog from a JSON file holding an array of plan records.
    ///
    /// The file layout is simply the serde form of [`Plan`], a host
    /// convenience for swapping in real plan data, not a storage format the
    /// value model depends on.
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::CatalogNotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        let plans: Vec<Plan> = serde_json::from_str(&raw)?;
        let catalog = Self::new(plans)?;
        info!(count = catalog.len(), path = %path.display(), "loaded plan catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl PlanSource for MemCatalog {
    fn plans(&self) -> Result<Vec<Plan>, StoreError> {
        Ok(self.plans.clone())
    }

    fn plan(&self, id: &str) -> Result<Plan, StoreError> {
        self.plans
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::PlanNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_plans;
    use std::io::Write;

    #[test]
    fn plan_by_id() {
        let catalog = MemCatalog::new(sample_plans()).unwrap();
        let plan = catalog.plan("secure-ppo").unwrap();
        assert_eq!(plan.name, "SecureChoice PPO");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let catalog = MemCatalog::new(sample_plans()).unwrap();
        let err = catalog.plan("no-such-plan").unwrap_err();
        assert!(matches!(err, StoreError::PlanNotFound(id) if id == "no-such-plan"));
    }

    #[test]
    fn select_preserves_request_order() {
        let catalog = MemCatalog::new(sample_plans()).unwrap();
        let plans = catalog
            .select(&["summit-hdhp".into(), "secure-ppo".into()])
            .unwrap();
        let ids: Vec<&str> = plans.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["summit-hdhp", "secure-ppo"]);
    }

    #[test]
    fn select_fails_on_any_unknown_id() {
        let catalog = MemCatalog::new(sample_plans()).unwrap();
        let err = catalog
            .select(&["secure-ppo".into(), "ghost".into()])
            .unwrap_err();
        assert!(matches!(err, StoreError::PlanNotFound(_)));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut plans = sample_plans();
        let mut dup = plans[0].clone();
        dup.name = "Imposter".into();
        plans.push(dup);

        let err = MemCatalog::new(plans).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(id) if id == "secure-ppo"));
    }

    #[test]
    fn loads_json_catalog() {
        let json = serde_json::to_string(&sample_plans()).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = MemCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), sample_plans().len());
        assert_eq!(catalog.plan("clearpath-hmo").unwrap().plan_type, "HMO");
    }

    #[test]
    fn missing_catalog_file() {
        let err = MemCatalog::from_json_file(Path::new("/no/such/catalog.json")).unwrap_err();
        assert!(matches!(err, StoreError::CatalogNotFound(_)));
    }

    #[test]
    fn malformed_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not a plan array").unwrap();

        let err = MemCatalog::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }
}
