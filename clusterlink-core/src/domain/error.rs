// clusterlink-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Endpoint address is empty")]
    #[diagnostic(
        code(clusterlink::domain::endpoint),
        help("Pass the private DNS name of the cluster's primary node, e.g. 'ip-172-31-58-190.ec2.internal'.")
    )]
    EmptyEndpoint,

    #[error("Missing parameters for connection options: {}", .0.join(", "))]
    #[diagnostic(
        code(clusterlink::domain::missing_parameters),
        help("Check that each parameter exists in the store and that your role may decrypt it.")
    )]
    MissingParameters(Vec<String>),

    #[error("Unknown connection option '{0}'")]
    #[diagnostic(
        code(clusterlink::domain::unknown_option),
        help("Valid options are: url, account, user, password, database, schema, warehouse.")
    )]
    UnknownOption(String),
}
