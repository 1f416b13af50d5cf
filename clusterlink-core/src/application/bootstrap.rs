// clusterlink-core/src/application/bootstrap.rs
//
// USE CASE: Full session bootstrap. Endpoint first, then credentials.
// The first failure stops the sequence; nothing is rolled back.

use tracing::{info, instrument};

use crate::application::configure::{ConfigureReport, configure_endpoint};
use crate::application::resolve::resolve_connection_options;
use crate::domain::credentials::ConnectionOptions;
use crate::domain::endpoint::EndpointTarget;
use crate::error::ClusterlinkError;
use crate::infrastructure::config::settings::Settings;
use crate::ports::parameter_store::ParameterStore;
use crate::ports::template_source::TemplateSource;

#[derive(Debug)]
pub struct SessionBootstrap {
    pub endpoint: ConfigureReport,
    pub connection: ConnectionOptions,
}

#[instrument(skip_all, fields(target = %target))]
pub async fn bootstrap_session(
    template: &dyn TemplateSource,
    store: &dyn ParameterStore,
    settings: &Settings,
    target: &EndpointTarget,
) -> Result<SessionBootstrap, ClusterlinkError> {
    info!("🚀 Bootstrapping session");

    let endpoint = configure_endpoint(
        template,
        &settings.endpoint.paths(),
        target,
        &settings.endpoint.placeholder,
        settings.endpoint.write_mode,
    )
    .await?;

    let bindings = settings.credentials.bindings()?;
    let connection =
        resolve_connection_options(store, &bindings, settings.credentials.with_decryption)
            .await?;

    Ok(SessionBootstrap {
        endpoint,
        connection,
    })
}
