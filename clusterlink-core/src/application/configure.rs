// clusterlink-core/src/application/configure.rs
//
// USE CASE: Point the kernel client at a cluster endpoint.
// Baseline (cached template) -> retarget -> candidate -> compare -> promote.

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::domain::endpoint::{ConfigPlan, EndpointDocument, EndpointTarget, WriteMode};
use crate::error::ClusterlinkError;
use crate::infrastructure::config::settings::EndpointPaths;
use crate::infrastructure::fs::{atomic_write, read_optional};
use crate::ports::template_source::TemplateSource;

pub const RESTART_MESSAGE: &str = "Configuration changed, restart required";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureReport {
    pub active_path: PathBuf,
    /// Candidate differed from the active file.
    pub changed: bool,
    pub restart_required: bool,
    /// Active file was (re)written.
    pub promoted: bool,
    /// Baseline had to be downloaded during this run.
    pub baseline_fetched: bool,
    pub replacements: usize,
}

#[instrument(skip_all, fields(target = %target, placeholder = %placeholder, mode = ?mode))]
pub async fn configure_endpoint(
    template: &dyn TemplateSource,
    paths: &EndpointPaths,
    target: &EndpointTarget,
    placeholder: &str,
    mode: WriteMode,
) -> Result<ConfigureReport, ClusterlinkError> {
    // 1. Baseline (downloaded at most once, then served from the backup)
    let (baseline, baseline_fetched) = ensure_baseline(template, &paths.backup).await?;
    if baseline.occurrences(placeholder) == 0 {
        warn!(placeholder, backup = ?paths.backup, "Placeholder not found in baseline, nothing to substitute");
    }

    // 2. Plan against whatever is active right now
    let active = read_optional(&paths.active)?.map(EndpointDocument::new);
    let plan = ConfigPlan::new(&baseline, active.as_ref(), placeholder, target);

    // 3. Candidate always lands on disk, so it can be inspected after the fact
    atomic_write(&paths.candidate, plan.candidate.as_bytes())?;

    // 4. Promotion
    let promoted = plan.should_promote(mode);
    if promoted {
        atomic_write(&paths.active, plan.candidate.as_bytes())?;
        info!(path = ?paths.active, changed = plan.changed, "📝 Active config written");
    } else {
        info!(path = ?paths.active, "✅ Active config already up to date, left untouched");
    }

    if plan.restart_required() {
        warn!("🔄 {}", RESTART_MESSAGE);
    }

    Ok(ConfigureReport {
        active_path: paths.active.clone(),
        changed: plan.changed,
        restart_required: plan.restart_required(),
        promoted,
        baseline_fetched,
        replacements: plan.replacements,
    })
}

/// Returns the cached baseline, downloading and caching it first if needed.
async fn ensure_baseline(
    template: &dyn TemplateSource,
    backup: &Path,
) -> Result<(EndpointDocument, bool), ClusterlinkError> {
    if let Some(content) = read_optional(backup)? {
        return Ok((EndpointDocument::new(content), false));
    }

    info!(from = %template.location(), to = ?backup, "📥 No baseline yet, fetching template");
    let content = template.fetch().await?;
    atomic_write(backup, &content)?;

    Ok((EndpointDocument::new(content), true))
}
