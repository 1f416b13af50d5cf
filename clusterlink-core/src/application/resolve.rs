// clusterlink-core/src/application/resolve.rs
//
// USE CASE: Batch-fetch secrets and assemble the warehouse connection options.

use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::domain::credentials::{
    ConnectionOptions, ParameterBindings, ParameterRequest, ResolvedParameters,
};
use crate::error::ClusterlinkError;
use crate::ports::parameter_store::ParameterStore;

/// Fetches every requested name in as few round-trips as the store allows
/// (one, unless the request exceeds the store's batch limit).
///
/// Missing names do not fail the call; they are listed in
/// [`ResolvedParameters::missing`].
#[instrument(skip_all, fields(requested = request.names().len()))]
pub async fn resolve_parameters(
    store: &dyn ParameterStore,
    request: &ParameterRequest,
    with_decryption: bool,
) -> Result<ResolvedParameters, ClusterlinkError> {
    let names = request.unique_names();
    if names.is_empty() {
        return Ok(ResolvedParameters::default());
    }

    let start = Instant::now();
    let batch_size = store.max_batch_size().unwrap_or(names.len()).max(1);

    let mut records = Vec::with_capacity(names.len());
    for chunk in names.chunks(batch_size) {
        debug!(batch = chunk.len(), "⚡ Fetching parameter batch");
        let batch = store.get_parameters(chunk, with_decryption).await?;
        records.extend(batch.into_iter().map(|r| (r.name, r.value)));
    }

    let resolved = ResolvedParameters::from_records(request, records);

    if resolved.is_complete() {
        info!(count = resolved.values.len(), "🔑 Parameters resolved in {:.2?}", start.elapsed());
    } else {
        warn!(
            resolved = resolved.values.len(),
            missing = ?resolved.missing,
            "⚠️  Some parameters were not returned by the store"
        );
    }

    Ok(resolved)
}

/// Resolves the bound parameters and builds the connector options.
/// Any unresolved binding is an error here: a half-filled option map would
/// only fail later, inside the connector, with a far worse message.
#[instrument(skip_all)]
pub async fn resolve_connection_options(
    store: &dyn ParameterStore,
    bindings: &ParameterBindings,
    with_decryption: bool,
) -> Result<ConnectionOptions, ClusterlinkError> {
    let resolved = resolve_parameters(store, &bindings.request(), with_decryption).await?;
    Ok(ConnectionOptions::assemble(bindings, &resolved.values)?)
}
