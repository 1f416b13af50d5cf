// clusterlink-core/src/domain/mod.rs

pub mod credentials;
pub mod endpoint;
pub mod error;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use credentials::{
    ConnectionOption, ConnectionOptions, ParameterBindings, ParameterRequest, ParameterValues,
    ResolvedParameters,
};
pub use endpoint::{ConfigPlan, EndpointDocument, EndpointTarget, WriteMode};
pub use error::DomainError;
