use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::args::CliArgs;
use effinal_checker::RuleOptions;
use effinal_checker::plugin::PLUGIN_NAME;

/// File looked up in the working directory (or the `--project` directory).
pub const CONFIG_FILE_NAME: &str = "effinal.json";

/// Custom deserializer for boolean options that accepts both bool and string values.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => {
            let normalized = s.trim().to_lowercase();
            match normalized.as_str() {
                "true" | "1" | "yes" | "on" => Ok(Some(true)),
                "false" | "0" | "no" | "off" => Ok(Some(false)),
                _ => Err(Error::custom(format!(
                    "invalid boolean value: '{}'. Expected true, false, 'true', or 'false'",
                    s
                ))),
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EffinalConfig {
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub enabled: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub check_compound_assignments: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub check_update_expressions: Option<bool>,
    #[serde(default)]
    pub plugin_args: Option<Vec<String>>,
    #[serde(default)]
    pub include: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
    /// Directory of the config file that defined `include`.
    #[serde(skip)]
    pub include_dir: Option<PathBuf>,
    /// Directory of the config file that defined `exclude`.
    #[serde(skip)]
    pub exclude_dir: Option<PathBuf>,
}

/// Options after layering the command line over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// `false` runs every unit without registering the plugin.
    pub enabled: bool,
    pub rules: RuleOptions,
    /// Passed to the plugin's `init` for every unit.
    pub plugin_args: Vec<String>,
}

impl ResolvedOptions {
    /// The rule options the plugin will actually run with.
    pub fn effective_rules(&self) -> Result<RuleOptions> {
        Ok(self.rules.with_plugin_args(PLUGIN_NAME, self.plugin_args.as_slice())?)
    }
}

pub fn resolve_options(config: Option<&EffinalConfig>, args: &CliArgs) -> ResolvedOptions {
    let config = config.cloned().unwrap_or_default();

    let mut resolved = ResolvedOptions {
        enabled: config.enabled.unwrap_or(true),
        rules: RuleOptions {
            check_compound_assignments: config.check_compound_assignments.unwrap_or(false),
            check_update_expressions: config.check_update_expressions.unwrap_or(false),
        },
        plugin_args: config.plugin_args.unwrap_or_default(),
    };

    if args.disable {
        resolved.enabled = false;
    }
    if args.compound {
        resolved.rules.check_compound_assignments = true;
    }
    if args.update {
        resolved.rules.check_update_expressions = true;
    }
    resolved.plugin_args.extend(args.plugin_args.iter().cloned());
    resolved
}

pub fn parse_config(source: &str) -> Result<EffinalConfig> {
    let stripped = strip_jsonc(source);
    let normalized = remove_trailing_commas(&stripped);
    let config = serde_json::from_str(&normalized).context("failed to parse effinal.json")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<EffinalConfig> {
    let mut visited = HashSet::new();
    load_config_inner(path, &mut visited)
}

fn load_config_inner(path: &Path, visited: &mut HashSet<PathBuf>) -> Result<EffinalConfig> {
    let canonical = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if !visited.insert(canonical.clone()) {
        bail!("config extends cycle detected at {}", canonical.display());
    }

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let mut config = parse_config(&source)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    let config_dir = canonical.parent().map(Path::to_path_buf);
    if config.include.is_some() {
        config.include_dir = config_dir.clone();
    }
    if config.exclude.is_some() {
        config.exclude_dir = config_dir;
    }

    if let Some(extends) = config.extends.take() {
        let base_path = resolve_extends_path(path, &extends)?;
        let base_config = load_config_inner(&base_path, visited)?;
        config = merge_configs(base_config, config);
    }

    visited.remove(&canonical);
    Ok(config)
}

fn resolve_extends_path(current_path: &Path, extends: &str) -> Result<PathBuf> {
    let base_dir = current_path
        .parent()
        .ok_or_else(|| anyhow!("config has no parent directory"))?;
    let mut candidate = PathBuf::from(extends);
    if candidate.extension().is_none() {
        candidate.set_extension("json");
    }

    if candidate.is_absolute() {
        Ok(candidate)
    } else {
        Ok(base_dir.join(candidate))
    }
}

/// Child values win field by field. Globs keep the directory of the file
/// that wrote them.
fn merge_configs(base: EffinalConfig, child: EffinalConfig) -> EffinalConfig {
    let (include, include_dir) = match child.include {
        Some(include) => (Some(include), child.include_dir),
        None => (base.include, base.include_dir),
    };
    let (exclude, exclude_dir) = match child.exclude {
        Some(exclude) => (Some(exclude), child.exclude_dir),
        None => (base.exclude, base.exclude_dir),
    };
    EffinalConfig {
        extends: None,
        enabled: child.enabled.or(base.enabled),
        check_compound_assignments: child
            .check_compound_assignments
            .or(base.check_compound_assignments),
        check_update_expressions: child
            .check_update_expressions
            .or(base.check_update_expressions),
        plugin_args: child.plugin_args.or(base.plugin_args),
        include,
        exclude,
        include_dir,
        exclude_dir,
    }
}

fn strip_jsonc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape = false;
    let mut in_line_comment = false;
    let mut in_block_comment = false;

    while let Some(ch) = chars.next() {
        if in_line_comment {
            if ch == '\n' {
                in_line_comment = false;
                out.push(ch);
            }
            continue;
        }

        if in_block_comment {
            if ch == '*' {
                if let Some('/') = chars.peek().copied() {
                    chars.next();
                    in_block_comment = false;
                }
            } else if ch == '\n' {
                out.push(ch);
            }
            continue;
        }

        if in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            '/' if chars.peek() == Some(&'/') => {
                chars.next();
                in_line_comment = true;
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                in_block_comment = true;
            }
            _ => out.push(ch),
        }
    }

    out
}

fn remove_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        if ch == '"' {
            in_string = true;
            out.push(ch);
            continue;
        }

        if ch == ',' {
            let next = chars.clone().find(|c| !c.is_whitespace());
            if matches!(next, Some('}' | ']')) {
                continue;
            }
        }

        out.push(ch);
    }

    out
}
