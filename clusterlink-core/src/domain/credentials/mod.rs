// clusterlink-core/src/domain/credentials/mod.rs

pub mod connection;
pub mod parameters;

pub use connection::{ConnectionOption, ConnectionOptions, ParameterBindings};
pub use parameters::{ParameterRequest, ParameterValues, ResolvedParameters};
