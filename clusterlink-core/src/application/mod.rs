// clusterlink-core/src/application/mod.rs

pub mod bootstrap;
pub mod configure;
pub mod resolve;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do `use clusterlink_core::application::{configure_endpoint, ...};`
// without knowing the internal file layout.

pub use bootstrap::{SessionBootstrap, bootstrap_session};
pub use configure::{ConfigureReport, RESTART_MESSAGE, configure_endpoint};
pub use resolve::{resolve_connection_options, resolve_parameters};
