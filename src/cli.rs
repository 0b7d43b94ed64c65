use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::flag_audit::domain::Environment;

/// Audit Node.js launch scripts and recommend runtime flags for this host
#[derive(Parser, Debug)]
#[command(name = "node-flag-audit")]
#[command(version)]
#[command(
    about = "Audit Node.js launch scripts and recommend runtime flags for this host",
    long_about = None,
    after_help = "Environment precedence: --env, then the config file, then NODE_ENV, then development."
)]
pub struct Args {
    /// Path to the project directory containing package.json
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Target environment: development or production [default: NODE_ENV]
    #[arg(short, long, value_name = "ENV")]
    pub env: Option<Environment>,

    /// Output format: text, json or markdown [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Check dependencies against the npm registry and OSV
    #[arg(long)]
    pub check_deps: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Exit with code 1 on HIGH priority recommendations or vulnerable dependencies
    #[arg(long)]
    pub fail_on_findings: bool,

    /// Config file path (defaults to node-flag-audit.config.yml in the project)
    #[arg(short, long, value_name = "FILE", env = "NODE_FLAG_AUDIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable info-level logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Colour only makes sense for the text report going to a terminal
    pub fn use_color(&self, format: OutputFormat) -> bool {
        !self.no_color && self.output.is_none() && format == OutputFormat::Text
    }
}
