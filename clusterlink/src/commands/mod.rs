// clusterlink/src/commands/mod.rs

pub mod bootstrap;
pub mod configure;
pub mod output;
pub mod resolve;

use std::path::Path;

use clusterlink_core::ClusterlinkError;
use clusterlink_core::domain::endpoint::WriteMode;
use clusterlink_core::infrastructure::adapters::{
    FileParameterStore, FileTemplateSource, HttpTemplateSource, SsmParameterStore,
};
use clusterlink_core::infrastructure::config::{Settings, load_settings, load_settings_from};
use clusterlink_core::ports::{ParameterStore, TemplateSource};

use crate::cli::{EndpointArgs, StoreArgs};

/// Settings file (or defaults) + ENV, then CLI flags on top.
pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<Settings, ClusterlinkError> {
    let settings = match explicit {
        Some(path) => load_settings_from(path)?,
        None => load_settings(project_dir)?,
    };
    Ok(settings)
}

pub fn apply_endpoint_args(settings: &mut Settings, args: &EndpointArgs) {
    if let Some(active) = &args.active {
        settings.endpoint.active_path = active.display().to_string();
    }
    if let Some(placeholder) = &args.placeholder {
        settings.endpoint.placeholder = placeholder.clone();
    }
    if args.skip_unchanged {
        settings.endpoint.write_mode = WriteMode::SkipUnchanged;
    }
}

pub fn apply_store_args(settings: &mut Settings, args: &StoreArgs) {
    if let Some(region) = &args.region {
        settings.credentials.region = region.clone();
    }
}

pub fn template_source(settings: &Settings, args: &EndpointArgs) -> Box<dyn TemplateSource> {
    match &args.template_file {
        Some(path) => Box::new(FileTemplateSource::new(path)),
        None => Box::new(HttpTemplateSource::new(&settings.endpoint.template_url)),
    }
}

pub async fn parameter_store(
    settings: &Settings,
    args: &StoreArgs,
) -> Result<Box<dyn ParameterStore>, ClusterlinkError> {
    match &args.parameters_file {
        Some(path) => Ok(Box::new(FileParameterStore::load(path)?)),
        None => Ok(Box::new(
            SsmParameterStore::from_region(&settings.credentials.region).await,
        )),
    }
}
