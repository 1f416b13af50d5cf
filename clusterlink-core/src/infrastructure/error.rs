// clusterlink-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ParameterStoreError {
    #[error("Access denied by parameter store: {0}")]
    #[diagnostic(
        code(clusterlink::infra::store::access_denied),
        help("The execution role needs ssm:GetParameters and kms:Decrypt on the requested parameters.")
    )]
    AccessDenied(String),

    #[error("Parameter store request failed: {0}")]
    #[diagnostic(code(clusterlink::infra::store::service))]
    Service(String),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- PARAMETER STORE (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    ParameterStore(#[from] ParameterStoreError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(clusterlink::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- TEMPLATE FETCH ---
    #[error("HTTP Error: {0}")]
    #[diagnostic(
        code(clusterlink::infra::http),
        help("The template could not be downloaded and no local baseline exists yet.")
    )]
    Http(#[from] reqwest::Error),

    #[error("Template unavailable at '{url}' (HTTP {status})")]
    #[diagnostic(code(clusterlink::infra::template))]
    TemplateUnavailable { url: String, status: u16 },

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(clusterlink::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(clusterlink::infra::config))]
    ConfigError(String),

    #[error("Configuration not found at '{0}'")]
    #[diagnostic(code(clusterlink::infra::config_missing))]
    ConfigNotFound(String),
}
