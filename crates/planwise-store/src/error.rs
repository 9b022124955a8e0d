use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("catalog file not found: {0}")]
    CatalogNotFound(std::path::PathBuf),

    #[error("no plan with id `{0}`")]
    PlanNotFound(String),

    #[error("duplicate plan id `{0}` in catalog")]
    DuplicateId(String),

    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
