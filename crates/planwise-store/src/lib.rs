//! Plan catalog layer: suppliers of immutable [`Plan`](planwise_core::Plan)
//! records behind the [`PlanSource`] trait.

mod error;
pub use error::StoreError;

mod catalog;
pub use catalog::{MemCatalog, PlanSource};

pub mod fixtures;
