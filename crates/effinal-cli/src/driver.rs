use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

use crate::args::CliArgs;
use crate::config::{CONFIG_FILE_NAME, EffinalConfig, ResolvedOptions, load_config, resolve_options};
use crate::fs::{FileDiscoveryOptions, discover_input_files};
use effinal_ast::WireUnit;
use effinal_ast::wire::read_units;
use effinal_checker::{CompilationTask, EffectivelyFinalPlugin, Plugin, UnitOutcome};
use effinal_common::diagnostics::Diagnostic;

#[derive(Debug, Default)]
pub struct CompilationResult {
    /// Diagnostics in input order, then traversal order within a unit.
    pub diagnostics: Vec<Diagnostic>,
    pub files_read: Vec<PathBuf>,
    /// Source text of every unit that carried it, keyed by unit file name.
    pub sources: FxHashMap<String, String>,
    /// Units named after their JSON document that carried no source text.
    /// Their offsets do not refer to that document.
    pub detached: Vec<String>,
    pub units_checked: usize,
    /// Units that stopped before generation because of an error.
    pub units_failed: usize,
}

impl CompilationResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

pub fn compile(args: &CliArgs, cwd: &Path) -> Result<CompilationResult> {
    let cwd = canonicalize_or_owned(cwd);
    let config_path = resolve_config_path(&cwd, args.project.as_deref())?;
    let config = match config_path.as_deref() {
        Some(path) => Some(load_config(path)?),
        None => None,
    };

    let resolved = resolve_options(config.as_ref(), args);
    let rules = resolved.effective_rules()?;
    debug!(
        enabled = resolved.enabled,
        compound = rules.check_compound_assignments,
        update = rules.check_update_expressions,
        "resolved options"
    );

    let discovery = build_discovery_options(args, &cwd, config_path.as_deref(), config.as_ref());
    let files = discover_input_files(&discovery)?;
    if files.is_empty() {
        bail!("no input files found");
    }

    let units = files
        .par_iter()
        .map(|path| read_units(path))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
    info!(files = files.len(), units = units.len(), "loaded inputs");

    let outcomes = match args.jobs {
        Some(jobs) => rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .context("failed to start worker pool")?
            .install(|| check_units(&units, &resolved))?,
        None => check_units(&units, &resolved)?,
    };

    let mut result = CompilationResult {
        files_read: files,
        units_checked: units.len(),
        ..CompilationResult::default()
    };
    for unit in units {
        match unit.source {
            Some(source) => {
                result.sources.insert(unit.file_name, source);
            }
            None if unit.name_from_document => result.detached.push(unit.file_name),
            None => {}
        }
    }
    for outcome in outcomes {
        if !outcome.generated {
            result.units_failed += 1;
        }
        result.diagnostics.extend(outcome.diagnostics);
    }
    Ok(result)
}

/// Check every unit in parallel. Each unit gets its own task and listener
/// state, and the outcomes keep the order of `units`.
fn check_units(units: &[WireUnit], resolved: &ResolvedOptions) -> Result<Vec<UnitOutcome>> {
    let plugin = EffectivelyFinalPlugin::new(resolved.rules);
    units
        .par_iter()
        .map(|unit| check_unit(unit, &plugin, resolved))
        .collect()
}

fn check_unit(
    unit: &WireUnit,
    plugin: &EffectivelyFinalPlugin,
    resolved: &ResolvedOptions,
) -> Result<UnitOutcome> {
    let _span = info_span!("check_unit", file = %unit.file_name).entered();
    let source_unit = unit.lower();
    let mut task = CompilationTask::new();
    if resolved.enabled {
        plugin.init(&mut task, &resolved.plugin_args)?;
    }
    let outcome = task.process(&source_unit);
    debug!(
        diagnostics = outcome.diagnostics.len(),
        generated = outcome.generated,
        "unit processed"
    );
    Ok(outcome)
}

pub(crate) fn find_config(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        Some(canonicalize_or_owned(&candidate))
    } else {
        None
    }
}

pub(crate) fn resolve_config_path(cwd: &Path, project: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(project) = project else {
        return Ok(find_config(cwd));
    };

    let mut candidate = if project.is_absolute() {
        project.to_path_buf()
    } else {
        cwd.join(project)
    };

    if candidate.is_dir() {
        candidate = candidate.join(CONFIG_FILE_NAME);
    }

    if !candidate.exists() {
        bail!("config not found at {}", candidate.display());
    }

    if !candidate.is_file() {
        bail!("project path is not a file: {}", candidate.display());
    }

    Ok(Some(canonicalize_or_owned(&candidate)))
}

fn build_discovery_options(
    args: &CliArgs,
    cwd: &Path,
    config_path: Option<&Path>,
    config: Option<&EffinalConfig>,
) -> FileDiscoveryOptions {
    let mut options = match (config_path, config) {
        (Some(path), Some(config)) => FileDiscoveryOptions::from_config(path, config),
        _ => FileDiscoveryOptions {
            base_dir: cwd.to_path_buf(),
            ..FileDiscoveryOptions::default()
        },
    };
    if !args.files.is_empty() {
        options.files = args
            .files
            .iter()
            .map(|file| if file.is_absolute() { file.clone() } else { cwd.join(file) })
            .collect();
    }
    options
}

fn canonicalize_or_owned(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
