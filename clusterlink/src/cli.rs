// clusterlink/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clusterlink")]
#[command(about = "Wires a notebook kernel to its compute cluster and warehouse credentials", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory searched for clusterlink.yaml
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Explicit settings file (must exist)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Debug logs on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🔌 Points the kernel client config at a cluster endpoint
    Configure {
        /// Private DNS name / IP of the cluster primary node
        #[arg(env = "CLUSTERLINK_ENDPOINT")]
        endpoint: String,

        #[command(flatten)]
        config: EndpointArgs,
    },

    /// 🔑 Fetches secrets from the parameter store
    Resolve {
        /// Raw parameter names. Without names, the bound connection options are resolved.
        names: Vec<String>,

        #[command(flatten)]
        store: StoreArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// 🚀 configure + resolve, in that order
    Bootstrap {
        #[arg(env = "CLUSTERLINK_ENDPOINT")]
        endpoint: String,

        #[command(flatten)]
        config: EndpointArgs,

        #[command(flatten)]
        store: StoreArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct EndpointArgs {
    /// Active kernel config (default: ~/.sparkmagic/config.json)
    #[arg(long)]
    pub active: Option<PathBuf>,

    /// Read the baseline template from a local file instead of downloading it
    #[arg(long)]
    pub template_file: Option<PathBuf>,

    /// Literal text to replace (default: localhost)
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Do not rewrite the active config when nothing changed
    #[arg(long)]
    pub skip_unchanged: bool,
}

#[derive(Args, Debug, Default)]
pub struct StoreArgs {
    /// Region of the parameter store
    #[arg(long)]
    pub region: Option<String>,

    /// Serve parameters from a YAML file instead of AWS SSM
    #[arg(long)]
    pub parameters_file: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Print secret values in clear text
    #[arg(long)]
    pub reveal: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
