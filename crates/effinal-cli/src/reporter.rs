use colored::Colorize;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;

use effinal_common::LineMap;
use effinal_common::diagnostics::{Diagnostic, DiagnosticCategory};

pub struct Reporter {
    color: bool,
    sources: FxHashMap<String, String>,
    line_maps: FxHashMap<String, LineMap>,
    /// Files whose offsets do not refer to the file on disk.
    detached: FxHashSet<String>,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter {
            color,
            sources: FxHashMap::default(),
            line_maps: FxHashMap::default(),
            detached: FxHashSet::default(),
        }
    }

    /// Register the text a unit's offsets refer to. Files without registered
    /// text are read from disk on first use.
    pub fn add_source(&mut self, file: impl Into<String>, text: impl Into<String>) {
        let file = file.into();
        self.line_maps.remove(&file);
        self.sources.insert(file, text.into());
    }

    /// Never read `file` from disk. Diagnostics in it are reported by name only
    /// unless its text is registered.
    pub fn add_detached(&mut self, file: impl Into<String>) {
        self.detached.insert(file.into());
    }

    pub fn render(&mut self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for diagnostic in diagnostics {
            out.push_str(&self.format_diagnostic(diagnostic));
            out.push('\n');
        }
        if !diagnostics.is_empty() {
            out.push('\n');
            out.push_str(&self.format_summary(diagnostics));
            out.push('\n');
        }
        out
    }

    pub fn format_diagnostic(&mut self, diagnostic: &Diagnostic) -> String {
        let location = self.format_location(&diagnostic.file, diagnostic.start);

        let mut output = String::new();
        if let Some(location) = location {
            output.push_str(&location);
        } else if !diagnostic.file.is_empty() {
            output.push_str(&diagnostic.file);
        } else {
            output.push_str("<unknown>");
        }

        output.push_str(" - ");
        output.push_str(&self.format_category(diagnostic.category));
        output.push(' ');
        output.push_str(&self.format_code(diagnostic));
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);

        if let Some(snippet) =
            self.format_snippet(&diagnostic.file, diagnostic.start, diagnostic.length)
        {
            output.push_str(&snippet);
        }

        output
    }

    /// Source line with the span underlined, in tsc layout:
    ///
    /// ```text
    ///     2     x = 1;
    ///           ~
    /// ```
    fn format_snippet(&mut self, file: &str, start: u32, length: u32) -> Option<String> {
        if file.is_empty() || length == 0 {
            return None;
        }

        let (line_num, column) = self.position_for(file, start)?;
        let (end_line, end_column) = self.position_for(file, start.saturating_add(length))?;
        let line_text = self.line_text(file, line_num - 1)?;

        // Spans running past the line end are underlined to the end of the line.
        let underline_end = if end_line == line_num {
            end_column - 1
        } else {
            u32::MAX
        };

        let mut underline = String::new();
        for (i, ch) in line_text.chars().enumerate() {
            let offset = i as u32;
            let mark = if offset < column - 1 {
                ' '
            } else if offset < underline_end {
                '~'
            } else {
                break;
            };
            let width = if ch == '\t' { 4 } else { 1 };
            underline.extend(std::iter::repeat_n(mark, width));
        }
        if !underline.contains('~') {
            underline.push('~');
        }

        let underline = if self.color {
            underline.red().to_string()
        } else {
            underline
        };
        let line_text = line_text.replace('\t', "    ");
        Some(format!("\n  {line_num:>3}   {line_text}\n        {underline}"))
    }

    /// Text of a zero-based line, split the same way positions are computed.
    fn line_text(&self, file: &str, line: u32) -> Option<String> {
        let source = self.sources.get(file)?;
        let line_map = self.line_maps.get(file)?;
        let start = line_map.line_start(line as usize)? as usize;
        let end = line_map
            .line_start(line as usize + 1)
            .map_or(source.len(), |next| next as usize);
        let text = source.get(start..end)?;
        Some(text.trim_end_matches(['\n', '\r']).to_string())
    }

    fn format_location(&mut self, file: &str, offset: u32) -> Option<String> {
        if file.is_empty() {
            return None;
        }

        let (line, column) = self.position_for(file, offset)?;
        let location = format!("{file}:{line}:{column}");
        Some(if self.color {
            location.cyan().to_string()
        } else {
            location
        })
    }

    fn position_for(&mut self, file: &str, offset: u32) -> Option<(u32, u32)> {
        self.ensure_source(file)?;
        if !self.line_maps.contains_key(file) {
            let source = self.sources.get(file)?;
            let map = LineMap::build(source);
            self.line_maps.insert(file.to_string(), map);
        }

        let source = self.sources.get(file)?;
        let line_map = self.line_maps.get(file)?;
        let position = line_map.offset_to_position(offset, source);
        Some((position.line + 1, position.character + 1))
    }

    fn ensure_source(&mut self, file: &str) -> Option<()> {
        if !self.sources.contains_key(file) {
            if self.detached.contains(file) {
                return None;
            }
            let contents = std::fs::read_to_string(Path::new(file)).ok()?;
            self.sources.insert(file.to_string(), contents);
        }
        Some(())
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.label();
        if !self.color {
            return label.to_string();
        }

        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Suggestion => label.blue().bold().to_string(),
            DiagnosticCategory::Message => label.cyan().bold().to_string(),
        }
    }

    fn format_code(&self, diagnostic: &Diagnostic) -> String {
        let label = diagnostic.display_code();
        if self.color {
            label.bright_blue().to_string()
        } else {
            label
        }
    }

    fn format_summary(&self, diagnostics: &[Diagnostic]) -> String {
        let errors = diagnostics.iter().filter(|d| d.is_error()).count();
        let mut files: Vec<&str> = diagnostics.iter().map(|d| d.file.as_str()).collect();
        files.sort_unstable();
        files.dedup();

        let noun = if errors == 1 { "error" } else { "errors" };
        let summary = match files.as_slice() {
            [single] => format!("Found {errors} {noun} in {single}."),
            _ => format!("Found {errors} {noun} in {} files.", files.len()),
        };
        if self.color {
            summary.bold().to_string()
        } else {
            summary
        }
    }
}

/// Diagnostics as a pretty-printed JSON array.
pub fn render_json(diagnostics: &[Diagnostic]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(diagnostics)
}
