// clusterlink/src/commands/bootstrap.rs
//
// USE CASE: Full session bootstrap (endpoint, then credentials).

use std::path::Path;

use clusterlink_core::application::{RESTART_MESSAGE, bootstrap_session};
use clusterlink_core::domain::endpoint::EndpointTarget;

use crate::cli::{EndpointArgs, OutputArgs, OutputFormat, StoreArgs};

pub async fn execute(
    project_dir: &Path,
    settings_path: Option<&Path>,
    endpoint: String,
    endpoint_args: EndpointArgs,
    store_args: StoreArgs,
    output: OutputArgs,
) -> miette::Result<()> {
    let mut settings = super::load(project_dir, settings_path)?;
    super::apply_endpoint_args(&mut settings, &endpoint_args);
    super::apply_store_args(&mut settings, &store_args);

    let target = EndpointTarget::new(endpoint)?;
    let template = super::template_source(&settings, &endpoint_args);
    let store = super::parameter_store(&settings, &store_args).await?;

    let session =
        bootstrap_session(template.as_ref(), store.as_ref(), &settings, &target).await?;

    // Keep stdout parseable in JSON mode.
    if output.format == OutputFormat::Json {
        if session.endpoint.restart_required {
            eprintln!("🔄 {}", RESTART_MESSAGE);
        }
    } else {
        println!("🚀 Session bootstrapped against '{}'", target);
        super::configure::print_report(&session.endpoint, &template.location());
    }
    super::output::print_connection_options(&session.connection, output.format, output.reveal)
}
