//! Input discovery.
//!
//! Files named on the command line are taken as-is. Directories (and the
//! project directory when nothing is named) are walked for `*.json` AST
//! documents, filtered through the config's `include`/`exclude` globs.

use anyhow::{Context, Result, bail};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::{CONFIG_FILE_NAME, EffinalConfig};

#[derive(Debug, Clone, Default)]
pub struct FileDiscoveryOptions {
    /// Relative inputs and glob patterns are resolved against this directory.
    pub base_dir: PathBuf,
    /// Explicit inputs. Empty means "walk `base_dir`".
    pub files: Vec<PathBuf>,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    /// Directory `include` patterns are relative to, when not `base_dir`.
    pub include_dir: Option<PathBuf>,
    /// Directory `exclude` patterns are relative to, when not `base_dir`.
    pub exclude_dir: Option<PathBuf>,
    pub follow_links: bool,
}

impl FileDiscoveryOptions {
    pub fn from_config(config_path: &Path, config: &EffinalConfig) -> Self {
        let base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        FileDiscoveryOptions {
            base_dir,
            files: Vec::new(),
            include: config.include.clone(),
            exclude: config.exclude.clone(),
            include_dir: config.include_dir.clone(),
            exclude_dir: config.exclude_dir.clone(),
            follow_links: false,
        }
    }
}

/// Whether `path` looks like an AST document (and not a config file).
pub fn is_input_file(path: &Path) -> bool {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let is_config = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == CONFIG_FILE_NAME);
    is_json && !is_config
}

/// Resolve the input list, sorted and without duplicates.
pub fn discover_input_files(options: &FileDiscoveryOptions) -> Result<Vec<PathBuf>> {
    let include = build_glob_set(options.include.as_deref())?;
    let exclude = build_glob_set(options.exclude.as_deref())?;
    let filter = PathFilter {
        include: include.as_ref().map(|globs| {
            (options.include_dir.as_deref().unwrap_or(&options.base_dir), globs)
        }),
        exclude: exclude.as_ref().map(|globs| {
            (options.exclude_dir.as_deref().unwrap_or(&options.base_dir), globs)
        }),
    };

    let mut found = BTreeSet::new();
    if options.files.is_empty() {
        walk_dir(&options.base_dir, options.follow_links, &filter, &mut found)?;
        return Ok(found.into_iter().collect());
    }

    for file in &options.files {
        let path = if file.is_absolute() {
            file.clone()
        } else {
            options.base_dir.join(file)
        };
        if path.is_dir() {
            walk_dir(&path, options.follow_links, &filter, &mut found)?;
        } else if path.is_file() {
            found.insert(path);
        } else {
            bail!("input not found: {}", path.display());
        }
    }
    Ok(found.into_iter().collect())
}

/// Each glob set is matched against paths relative to its own directory.
struct PathFilter<'a> {
    include: Option<(&'a Path, &'a GlobSet)>,
    exclude: Option<(&'a Path, &'a GlobSet)>,
}

impl PathFilter<'_> {
    fn accepts(&self, path: &Path) -> bool {
        let matches = |(dir, globs): (&Path, &GlobSet)| {
            globs.is_match(path.strip_prefix(dir).unwrap_or(path))
        };
        if let Some(include) = self.include
            && !matches(include)
        {
            return false;
        }
        !self.exclude.is_some_and(matches)
    }
}

fn walk_dir(
    root: &Path,
    follow_links: bool,
    filter: &PathFilter<'_>,
    found: &mut BTreeSet<PathBuf>,
) -> Result<()> {
    let walker = WalkDir::new(root)
        .follow_links(follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if is_input_file(path) && filter.accepts(path) {
            found.insert(path.to_path_buf());
        }
    }
    Ok(())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn build_glob_set(patterns: Option<&[String]>) -> Result<Option<GlobSet>> {
    let Some(patterns) = patterns else {
        return Ok(None);
    };

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .with_context(|| format!("invalid glob pattern: {pattern}"))?;
        builder.add(glob);
    }
    Ok(Some(builder.build().context("failed to build glob set")?))
}
