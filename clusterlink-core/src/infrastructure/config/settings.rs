// clusterlink-core/src/infrastructure/config/settings.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::credentials::ParameterBindings;
use crate::domain::endpoint::WriteMode;
use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::{expand_home, sibling_path};

/// Pinned to a release tag so the baseline never drifts under us.
pub const DEFAULT_TEMPLATE_URL: &str =
    "https://raw.githubusercontent.com/jupyter-incubator/sparkmagic/0.21.0/sparkmagic/example_config.json";
pub const DEFAULT_ACTIVE_PATH: &str = "~/.sparkmagic/config.json";
pub const DEFAULT_PLACEHOLDER: &str = "localhost";
pub const DEFAULT_REGION: &str = "us-east-1";

const SETTINGS_CANDIDATES: [&str; 2] = ["clusterlink.yaml", "clusterlink.yml"];

// --- STRUCTS ---

#[derive(Debug, Deserialize, Serialize, Validate, Clone, Default, PartialEq)]
pub struct Settings {
    #[validate(nested)]
    #[serde(default)]
    pub endpoint: EndpointSettings,

    #[validate(nested)]
    #[serde(default)]
    pub credentials: CredentialSettings,
}

#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq)]
pub struct EndpointSettings {
    #[validate(length(min = 1, message = "active_path cannot be empty"))]
    #[serde(default = "default_active_path")]
    pub active_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_path: Option<String>,

    #[validate(url(message = "template_url must be an absolute URL"))]
    #[serde(default = "default_template_url")]
    pub template_url: String,

    #[validate(length(min = 1, message = "placeholder cannot be empty"))]
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default)]
    pub write_mode: WriteMode,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            active_path: default_active_path(),
            backup_path: None,
            candidate_path: None,
            template_url: default_template_url(),
            placeholder: default_placeholder(),
            write_mode: WriteMode::default(),
        }
    }
}

/// The three files the configurator juggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPaths {
    pub active: PathBuf,
    pub backup: PathBuf,
    pub candidate: PathBuf,
}

impl EndpointPaths {
    /// Backup and candidate default to `<active>.bak` and `<active>.new`.
    pub fn beside(active: impl Into<PathBuf>) -> Self {
        let active = active.into();
        Self {
            backup: sibling_path(&active, "bak"),
            candidate: sibling_path(&active, "new"),
            active,
        }
    }
}

impl EndpointSettings {
    pub fn paths(&self) -> EndpointPaths {
        let mut paths = EndpointPaths::beside(expand_home(&self.active_path));
        if let Some(backup) = &self.backup_path {
            paths.backup = expand_home(backup);
        }
        if let Some(candidate) = &self.candidate_path {
            paths.candidate = expand_home(candidate);
        }
        paths
    }
}

#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq)]
pub struct CredentialSettings {
    #[validate(length(min = 1, message = "region cannot be empty"))]
    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default = "default_true")]
    pub with_decryption: bool,

    /// connection option -> parameter name
    #[serde(default = "default_bindings")]
    pub bindings: BTreeMap<String, String>,
}

impl Default for CredentialSettings {
    fn default() -> Self {
        Self {
            region: default_region(),
            with_decryption: true,
            bindings: default_bindings(),
        }
    }
}

impl CredentialSettings {
    /// User bindings layered over the `/snowflake/<option>` defaults.
    pub fn bindings(&self) -> Result<ParameterBindings, DomainError> {
        let mut merged = ParameterBindings::parse(&default_bindings())?;
        merged.extend(ParameterBindings::parse(&self.bindings)?);
        Ok(merged)
    }
}

fn default_active_path() -> String {
    DEFAULT_ACTIVE_PATH.to_string()
}
fn default_template_url() -> String {
    DEFAULT_TEMPLATE_URL.to_string()
}
fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}
fn default_region() -> String {
    DEFAULT_REGION.to_string()
}
fn default_true() -> bool {
    true
}
fn default_bindings() -> BTreeMap<String, String> {
    [
        "url",
        "account",
        "user",
        "password",
        "database",
        "schema",
        "warehouse",
    ]
    .into_iter()
    .map(|opt| (opt.to_string(), format!("/snowflake/{}", opt)))
    .collect()
}

// --- LOADER ---

/// Loads `clusterlink.yaml` from `project_dir`, falling back to defaults when absent.
#[instrument(skip(project_dir))]
pub fn load_settings(project_dir: &Path) -> Result<Settings, InfrastructureError> {
    let found = SETTINGS_CANDIDATES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|p| p.exists());

    let mut settings = match found {
        Some(path) => parse_settings_file(&path)?,
        None => {
            info!(dir = ?project_dir, "No clusterlink.yaml found, using defaults");
            Settings::default()
        }
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    validate(&settings)?;
    Ok(settings)
}

/// Loads an explicit settings file; unlike [`load_settings`] it must exist.
#[instrument]
pub fn load_settings_from(path: &Path) -> Result<Settings, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }
    let mut settings = parse_settings_file(path)?;
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    validate(&settings)?;
    Ok(settings)
}

fn parse_settings_file(path: &Path) -> Result<Settings, InfrastructureError> {
    info!(path = ?path, "Loading settings");
    let content = fs::read_to_string(path)?;
    // An empty file is a valid "all defaults" file.
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    Ok(serde_yaml::from_str(&content)?)
}

fn validate(settings: &Settings) -> Result<(), InfrastructureError> {
    settings
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;
    // Bindings are free-form strings in YAML; make sure they name real options.
    settings
        .credentials
        .bindings()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;
    Ok(())
}

/// Layering: `CLUSTERLINK_REGION=eu-west-1 clusterlink resolve`
pub fn apply_env_overrides<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("CLUSTERLINK_REGION") {
        info!(old = ?settings.credentials.region, new = ?val, "Overriding region via ENV");
        settings.credentials.region = val;
    }
    if let Some(val) = lookup("CLUSTERLINK_ACTIVE_CONFIG") {
        info!(old = ?settings.endpoint.active_path, new = ?val, "Overriding active config via ENV");
        settings.endpoint.active_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credentials::ConnectionOption;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_no_file() -> Result<()> {
        let dir = tempdir()?;
        let settings = load_settings(dir.path())?;

        assert_eq!(settings.endpoint.placeholder, "localhost");
        assert_eq!(settings.endpoint.write_mode, WriteMode::Always);
        assert!(settings.credentials.with_decryption);
        assert_eq!(settings.credentials.bindings.len(), 7);
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let dir = tempdir()?;
        std::fs::write(
            dir.path().join("clusterlink.yaml"),
            r#"
endpoint:
  active_path: /tmp/sparkmagic/config.json
  write_mode: skip_unchanged
credentials:
  bindings:
    user: /warehouse/user
    password: /warehouse/password
"#,
        )?;

        let settings = load_settings(dir.path())?;

        assert_eq!(settings.endpoint.write_mode, WriteMode::SkipUnchanged);
        assert_eq!(settings.endpoint.template_url, DEFAULT_TEMPLATE_URL);
        let bindings = settings.credentials.bindings()?;
        assert_eq!(
            bindings.parameter_for(ConnectionOption::User),
            Some("/warehouse/user")
        );
        assert_eq!(
            bindings.parameter_for(ConnectionOption::Url),
            Some("/snowflake/url")
        );
        Ok(())
    }

    #[test]
    fn test_single_binding_overrides_only_that_option() -> Result<()> {
        let dir = tempdir()?;
        std::fs::write(
            dir.path().join("clusterlink.yaml"),
            "credentials:\n  bindings:\n    password: /warehouse/password\n",
        )?;

        let bindings = load_settings(dir.path())?.credentials.bindings()?;

        assert_eq!(bindings.iter().count(), 7);
        assert_eq!(
            bindings.parameter_for(ConnectionOption::Password),
            Some("/warehouse/password")
        );
        assert_eq!(
            bindings.parameter_for(ConnectionOption::Warehouse),
            Some("/snowflake/warehouse")
        );
        Ok(())
    }

    #[test]
    fn test_paths_default_to_siblings() {
        let endpoint = EndpointSettings {
            active_path: "/srv/kernel/config.json".to_string(),
            ..Default::default()
        };
        let paths = endpoint.paths();

        assert_eq!(paths.active, PathBuf::from("/srv/kernel/config.json"));
        assert_eq!(paths.backup, PathBuf::from("/srv/kernel/config.json.bak"));
        assert_eq!(paths.candidate, PathBuf::from("/srv/kernel/config.json.new"));
    }

    #[test]
    fn test_invalid_template_url_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        std::fs::write(
            dir.path().join("clusterlink.yml"),
            "endpoint:\n  template_url: not-a-url\n",
        )?;

        let err = load_settings(dir.path());
        assert!(matches!(err, Err(InfrastructureError::ConfigError(_))));
        Ok(())
    }

    #[test]
    fn test_unknown_binding_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        std::fs::write(
            dir.path().join("clusterlink.yaml"),
            "credentials:\n  bindings:\n    role: /snowflake/role\n",
        )?;

        let err = load_settings(dir.path());
        assert!(matches!(err, Err(InfrastructureError::ConfigError(_))));
        Ok(())
    }

    #[test]
    fn test_explicit_settings_file_must_exist() -> Result<()> {
        let dir = tempdir()?;
        let err = load_settings_from(&dir.path().join("missing.yaml"));
        assert!(matches!(err, Err(InfrastructureError::ConfigNotFound(_))));
        Ok(())
    }

    #[test]
    fn test_env_overrides() {
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings, |key| match key {
            "CLUSTERLINK_REGION" => Some("eu-west-1".to_string()),
            "CLUSTERLINK_ACTIVE_CONFIG" => Some("/tmp/active.json".to_string()),
            _ => None,
        });

        assert_eq!(settings.credentials.region, "eu-west-1");
        assert_eq!(settings.endpoint.active_path, "/tmp/active.json");
    }
}
