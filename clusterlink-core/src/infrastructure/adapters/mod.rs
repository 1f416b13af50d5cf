// clusterlink-core/src/infrastructure/adapters/mod.rs

pub mod file_store;
pub mod ssm;
pub mod template;

pub use file_store::FileParameterStore;
pub use ssm::SsmParameterStore;
pub use template::{FileTemplateSource, HttpTemplateSource};
