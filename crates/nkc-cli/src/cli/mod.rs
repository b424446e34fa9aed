use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `nkc` binary.
#[derive(Debug, Parser)]
#[command(name = "nkc", version, about = "Institution directory listing and detail views")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root holding `.nkc/config.toml` (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// JSON file with institutions and categories to serve from
    #[arg(short, long, global = true)]
    pub data: Option<String>,

    /// Id of the page the request is rendered on
    #[arg(long, global = true, default_value_t = 1)]
    pub page_id: i64,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
            data: self.data.clone(),
            page_id: self.page_id,
        }
    }
}
