// clusterlink/src/commands/resolve.rs
//
// USE CASE: Resolve parameters (raw names) or the bound connection options.

use std::path::Path;

use clusterlink_core::application::{resolve_connection_options, resolve_parameters};
use clusterlink_core::domain::credentials::ParameterRequest;

use crate::cli::{OutputArgs, StoreArgs};

pub async fn execute(
    project_dir: &Path,
    settings_path: Option<&Path>,
    names: Vec<String>,
    store_args: StoreArgs,
    output: OutputArgs,
) -> miette::Result<()> {
    let mut settings = super::load(project_dir, settings_path)?;
    super::apply_store_args(&mut settings, &store_args);

    let store = super::parameter_store(&settings, &store_args).await?;
    let with_decryption = settings.credentials.with_decryption;

    if names.is_empty() {
        let bindings = settings.credentials.bindings()?;
        let options =
            resolve_connection_options(store.as_ref(), &bindings, with_decryption).await?;
        super::output::print_connection_options(&options, output.format, output.reveal)
    } else {
        // Raw mode mirrors the store: missing names are reported, not fatal.
        let request = ParameterRequest::new(names);
        let resolved = resolve_parameters(store.as_ref(), &request, with_decryption).await?;
        super::output::print_parameters(&resolved, output.format, output.reveal)
    }
}
