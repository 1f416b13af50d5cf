// clusterlink-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts for the outside world: parameter store, template source.
pub mod ports;

// 2. Domain
// Endpoint documents, parameter requests, connection options.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// Filesystem, HTTP, AWS SSM, YAML settings.
pub mod infrastructure;

// 4. Application (Use Cases)
// configure, resolve, bootstrap.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

// --- RE-EXPORTS (FACADE) ---
pub use error::ClusterlinkError;
