// clusterlink-core/src/infrastructure/adapters/ssm.rs

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ssm::Client;
use aws_sdk_ssm::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ssm::operation::get_parameters::GetParametersError;
use tracing::{debug, instrument, warn};

use crate::error::ClusterlinkError;
use crate::infrastructure::error::{InfrastructureError, ParameterStoreError};
use crate::ports::parameter_store::{ParameterRecord, ParameterStore};

/// `GetParameters` accepts at most this many names per call.
pub const SSM_MAX_NAMES_PER_CALL: usize = 10;

const ACCESS_DENIED_CODES: [&str; 4] = [
    "AccessDeniedException",
    "UnrecognizedClientException",
    "ExpiredTokenException",
    "InvalidSignatureException",
];

/// AWS Systems Manager Parameter Store.
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Uses the default credential chain (env, profile, instance/container role).
    pub async fn from_region(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    #[instrument(skip(self, names), fields(count = names.len()))]
    async fn get_parameters(
        &self,
        names: &[String],
        with_decryption: bool,
    ) -> Result<Vec<ParameterRecord>, ClusterlinkError> {
        let output = self
            .client
            .get_parameters()
            .set_names(Some(names.to_vec()))
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(map_sdk_error)?;

        if !output.invalid_parameters().is_empty() {
            debug!(invalid = ?output.invalid_parameters(), "Store reported invalid parameters");
        }

        let records = output
            .parameters()
            .iter()
            .filter_map(|p| match (p.name(), p.value()) {
                (Some(name), Some(value)) => Some(ParameterRecord::new(name, value)),
                _ => None,
            })
            .collect();

        Ok(records)
    }

    fn max_batch_size(&self) -> Option<usize> {
        Some(SSM_MAX_NAMES_PER_CALL)
    }
}

fn map_sdk_error(err: SdkError<GetParametersError>) -> ClusterlinkError {
    let undecryptable = err
        .as_service_error()
        .is_some_and(|e| e.is_invalid_key_id());
    let message = DisplayErrorContext(&err).to_string();
    warn!(code = ?err.code(), "❌ GetParameters failed");

    InfrastructureError::ParameterStore(classify(err.code(), undecryptable, message)).into()
}

fn classify(code: Option<&str>, undecryptable: bool, message: String) -> ParameterStoreError {
    let denied = undecryptable || code.is_some_and(|c| ACCESS_DENIED_CODES.contains(&c));
    if denied {
        ParameterStoreError::AccessDenied(message)
    } else {
        ParameterStoreError::Service(message)
    }
}
