// clusterlink/src/commands/configure.rs
//
// USE CASE: Point the kernel config at a cluster endpoint.

use std::path::Path;

use clusterlink_core::application::{ConfigureReport, RESTART_MESSAGE, configure_endpoint};
use clusterlink_core::domain::endpoint::EndpointTarget;

use crate::cli::EndpointArgs;

pub async fn execute(
    project_dir: &Path,
    settings_path: Option<&Path>,
    endpoint: String,
    args: EndpointArgs,
) -> miette::Result<()> {
    let mut settings = super::load(project_dir, settings_path)?;
    super::apply_endpoint_args(&mut settings, &args);

    let target = EndpointTarget::new(endpoint)?;
    let paths = settings.endpoint.paths();
    let template = super::template_source(&settings, &args);

    println!(
        "🔌 Pointing {} at '{}'...",
        paths.active.display(),
        target
    );

    let report = configure_endpoint(
        template.as_ref(),
        &paths,
        &target,
        &settings.endpoint.placeholder,
        settings.endpoint.write_mode,
    )
    .await?;

    print_report(&report, &template.location());
    Ok(())
}

pub fn print_report(report: &ConfigureReport, template_location: &str) {
    if report.baseline_fetched {
        println!("📥 Baseline cached from {}", template_location);
    }
    println!("   {} placeholder occurrence(s) replaced", report.replacements);

    if report.restart_required {
        println!("🔄 {}", RESTART_MESSAGE);
    } else if report.promoted {
        println!("✨ Configuration unchanged (file rewritten)");
    } else {
        println!("✨ Configuration unchanged");
    }
}
