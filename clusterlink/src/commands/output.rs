// clusterlink/src/commands/output.rs
//
// Rendering of resolved secrets: comfy-table for humans, JSON for the connector.

use std::collections::BTreeMap;

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use miette::IntoDiagnostic;
use secrecy::ExposeSecret;

use clusterlink_core::domain::credentials::{ConnectionOptions, ResolvedParameters};

use crate::cli::OutputFormat;

const MASK: &str = "********";

pub fn print_connection_options(
    options: &ConnectionOptions,
    format: OutputFormat,
    reveal: bool,
) -> miette::Result<()> {
    let rows: BTreeMap<&str, String> = if reveal {
        options
            .expose()
            .into_iter()
            .map(|(k, v)| (k, v.to_string()))
            .collect()
    } else {
        options.redacted()
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Option", "Value"]);
            for (key, value) in rows {
                table.add_row(vec![key.to_string(), value]);
            }
            println!("{table}");
        }
    }
    Ok(())
}

pub fn print_parameters(
    resolved: &ResolvedParameters,
    format: OutputFormat,
    reveal: bool,
) -> miette::Result<()> {
    let values: BTreeMap<&str, String> = resolved
        .values
        .names()
        .into_iter()
        .filter_map(|name| {
            resolved.values.get(name).map(|secret| {
                let shown = if reveal {
                    secret.expose_secret().clone()
                } else {
                    MASK.to_string()
                };
                (name, shown)
            })
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "values": values,
                "missing": resolved.missing,
            });
            println!("{}", serde_json::to_string_pretty(&doc).into_diagnostic()?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Parameter", "Value"]);
            for (name, value) in values {
                table.add_row(vec![name.to_string(), value]);
            }
            println!("{table}");
            if !resolved.missing.is_empty() {
                eprintln!("⚠️  Not returned by the store: {}", resolved.missing.join(", "));
            }
        }
    }
    Ok(())
}
