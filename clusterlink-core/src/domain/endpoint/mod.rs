// clusterlink-core/src/domain/endpoint/mod.rs

pub mod document;
pub mod plan;

pub use document::{EndpointDocument, EndpointTarget};
pub use plan::{ConfigPlan, WriteMode};
