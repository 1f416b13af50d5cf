// clusterlink-core/src/infrastructure/adapters/file_store.rs

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::ClusterlinkError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::parameter_store::{ParameterRecord, ParameterStore};

/// Parameter store backed by a YAML map, for offline sessions and tests.
///
/// ```yaml
/// /snowflake/user: analyst
/// /snowflake/password: ~   # exists, but we may not decrypt it
/// ```
///
/// A `null` value behaves like a parameter the caller cannot decrypt: it is
/// silently left out of the response, exactly as the real store does.
#[derive(Debug, Default)]
pub struct FileParameterStore {
    entries: BTreeMap<String, Option<String>>,
}

impl FileParameterStore {
    pub fn load(path: &Path) -> Result<Self, InfrastructureError> {
        if !path.exists() {
            return Err(InfrastructureError::ConfigNotFound(
                path.display().to_string(),
            ));
        }
        let content = fs::read_to_string(path)?;
        let entries: BTreeMap<String, Option<String>> = if content.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_yaml::from_str(&content)?
        };
        info!(path = ?path, count = entries.len(), "📄 Parameter file loaded");
        Ok(Self { entries })
    }

    pub fn from_entries(entries: BTreeMap<String, Option<String>>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl ParameterStore for FileParameterStore {
    async fn get_parameters(
        &self,
        names: &[String],
        _with_decryption: bool,
    ) -> Result<Vec<ParameterRecord>, ClusterlinkError> {
        Ok(names
            .iter()
            .filter_map(|name| match self.entries.get(name) {
                Some(Some(value)) => Some(ParameterRecord::new(name.clone(), value.clone())),
                _ => None,
            })
            .collect())
    }
}
