use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the effinal binary.
#[derive(Parser, Debug)]
#[command(
    name = "effinal",
    version,
    about = "Flags assignments to method, constructor and lambda parameters that are not declared final"
)]
pub struct CliArgs {
    /// Path to effinal.json or a directory containing it.
    #[arg(short = 'p', long = "project")]
    pub project: Option<PathBuf>,

    // ==================== Rule Options ====================
    /// Also flag compound assignments such as `x += 1`.
    #[arg(long)]
    pub compound: bool,

    /// Also flag increments and decrements such as `x++`.
    #[arg(long)]
    pub update: bool,

    /// Extra plugin arguments, as a host would pass them (`compound`, `update`, `all`).
    #[arg(long = "pluginArg", alias = "plugin-arg", value_name = "ARG")]
    pub plugin_args: Vec<String>,

    /// Load and list inputs without running the check.
    #[arg(long)]
    pub disable: bool,

    // ==================== Output Formatting ====================
    /// Enable color and formatting in the output.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub pretty: Option<bool>,

    /// Diagnostic output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print all of the files read during the run.
    #[arg(long = "listFiles", alias = "list-files")]
    pub list_files: bool,

    // ==================== Execution ====================
    /// Number of worker threads (defaults to the number of CPUs).
    #[arg(short = 'j', long)]
    pub jobs: Option<usize>,

    // ==================== Input Files ====================
    /// AST documents, or directories to search for them.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// tsc-style lines with source snippets.
    #[default]
    Text,
    /// A JSON array of diagnostics.
    Json,
}
