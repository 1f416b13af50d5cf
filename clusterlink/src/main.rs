// clusterlink/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use tracing::Level;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // 1. Setup Logging (Tracing) on stderr, stdout is for results
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let settings_path = cli.settings.as_deref();

    match cli.command {
        // --- USE CASE: ENDPOINT ---
        Commands::Configure { endpoint, config } => {
            commands::configure::execute(&cli.project_dir, settings_path, endpoint, config).await
        }

        // --- USE CASE: CREDENTIALS ---
        Commands::Resolve {
            names,
            store,
            output,
        } => {
            commands::resolve::execute(&cli.project_dir, settings_path, names, store, output)
                .await
        }

        // --- USE CASE: BOTH ---
        Commands::Bootstrap {
            endpoint,
            config,
            store,
            output,
        } => {
            commands::bootstrap::execute(
                &cli.project_dir,
                settings_path,
                endpoint,
                config,
                store,
                output,
            )
            .await
        }
    }
}
