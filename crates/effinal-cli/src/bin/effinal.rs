#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

use effinal_cli::args::{CliArgs, OutputFormat};
use effinal_cli::driver::{self, CompilationResult};
use effinal_cli::reporter::{Reporter, render_json};

const EXIT_SUCCESS: u8 = 0;
const EXIT_DIAGNOSTICS_REPORTED: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    effinal_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    match run(&args) {
        Ok(result) if result.has_errors() => ExitCode::from(EXIT_DIAGNOSTICS_REPORTED),
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(args: &CliArgs) -> Result<CompilationResult> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let result = driver::compile(args, &cwd)?;

    if args.list_files {
        for file in &result.files_read {
            println!("{}", file.display());
        }
    }

    match args.format {
        OutputFormat::Json => {
            println!("{}", render_json(&result.diagnostics)?);
        }
        OutputFormat::Text if !result.diagnostics.is_empty() => {
            let pretty = args
                .pretty
                .unwrap_or_else(|| std::io::stderr().is_terminal());
            let mut reporter = Reporter::new(pretty);
            for (file, source) in &result.sources {
                reporter.add_source(file.as_str(), source.as_str());
            }
            for file in &result.detached {
                reporter.add_detached(file.as_str());
            }
            eprint!("{}", reporter.render(&result.diagnostics));
        }
        OutputFormat::Text => {}
    }

    Ok(result)
}
