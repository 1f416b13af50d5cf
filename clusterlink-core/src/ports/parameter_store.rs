// clusterlink-core/src/ports/parameter_store.rs

// What the resolver needs from a secret store, without knowing which one.
// AWS SSM in production, a YAML file offline, a HashMap in tests.

use crate::error::ClusterlinkError;
use async_trait::async_trait;

/// One `(name, value)` pair as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRecord {
    pub name: String,
    pub value: String,
}

impl ParameterRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetches `names` in a single round-trip.
    ///
    /// Names the store does not know (or will not decrypt for the caller) are
    /// absent from the result; that is not an error. A call rejected as a
    /// whole (permissions, throttling, transport) is.
    async fn get_parameters(
        &self,
        names: &[String],
        with_decryption: bool,
    ) -> Result<Vec<ParameterRecord>, ClusterlinkError>;

    /// Largest number of names one call accepts, if the store has a limit.
    fn max_batch_size(&self) -> Option<usize> {
        None
    }
}
