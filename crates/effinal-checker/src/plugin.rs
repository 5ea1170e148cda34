//! Compiler-plugin host integration.
//!
//! A host drives each compilation unit through its phases and notifies the
//! registered [`TaskListener`]s when a phase starts and finishes. Plugins
//! register listeners in [`Plugin::init`]. The effectively-final plugin
//! listens for the end of the analyze phase, when the unit is known to be
//! well formed, and scans it then.

use crate::options::{PluginError, RuleOptions};
use crate::sink::DiagnosticSink;
use effinal_ast::SourceUnit;
use effinal_common::diagnostics::Diagnostic;
use tracing::debug;

/// Name the effectively-final plugin registers under.
pub const PLUGIN_NAME: &str = "EffectivelyFinal";

/// Compilation phases, in the order a host runs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Parse,
    Enter,
    Analyze,
    Generate,
}

impl TaskKind {
    pub const ALL: [TaskKind; 4] = [
        TaskKind::Parse,
        TaskKind::Enter,
        TaskKind::Analyze,
        TaskKind::Generate,
    ];
}

#[derive(Clone, Copy, Debug)]
pub struct TaskEvent<'a> {
    pub kind: TaskKind,
    pub unit: &'a SourceUnit,
}

pub trait TaskListener: Send {
    fn started(&mut self, _event: &TaskEvent<'_>, _sink: &mut dyn DiagnosticSink) {}

    fn finished(&mut self, event: &TaskEvent<'_>, sink: &mut dyn DiagnosticSink);
}

pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    fn init(&self, task: &mut CompilationTask, args: &[String]) -> Result<(), PluginError>;
}

/// Result of running one unit through a [`CompilationTask`].
#[derive(Debug, Clone, Default)]
pub struct UnitOutcome {
    pub diagnostics: Vec<Diagnostic>,
    /// `false` when an error diagnostic stopped the unit before generation.
    pub generated: bool,
}

impl UnitOutcome {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Per-compilation listener registry and phase driver.
#[derive(Default)]
pub struct CompilationTask {
    listeners: Vec<Box<dyn TaskListener>>,
}

impl CompilationTask {
    pub fn new() -> Self {
        CompilationTask::default()
    }

    pub fn add_task_listener(&mut self, listener: Box<dyn TaskListener>) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Run `unit` through every phase. Error diagnostics reported before
    /// `Generate` fail the unit and skip generation.
    pub fn process(&mut self, unit: &SourceUnit) -> UnitOutcome {
        let mut outcome = UnitOutcome::default();
        for kind in TaskKind::ALL {
            if kind == TaskKind::Generate && outcome.has_errors() {
                debug!(file = unit.file_name(), "errors reported, skipping generation");
                return outcome;
            }
            self.fire(TaskEvent { kind, unit }, &mut outcome.diagnostics);
        }
        outcome.generated = true;
        outcome
    }

    fn fire(&mut self, event: TaskEvent<'_>, sink: &mut dyn DiagnosticSink) {
        for listener in &mut self.listeners {
            listener.started(&event, sink);
        }
        for listener in &mut self.listeners {
            listener.finished(&event, sink);
        }
    }
}

/// Registers an [`EffectivelyFinalTaskListener`] on every task it is
/// initialised for. Plugin arguments are layered over the base options.
#[derive(Clone, Copy, Debug, Default)]
pub struct EffectivelyFinalPlugin {
    options: RuleOptions,
}

impl EffectivelyFinalPlugin {
    pub fn new(options: RuleOptions) -> Self {
        EffectivelyFinalPlugin { options }
    }
}

impl Plugin for EffectivelyFinalPlugin {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn init(&self, task: &mut CompilationTask, args: &[String]) -> Result<(), PluginError> {
        let options = self.options.with_plugin_args(PLUGIN_NAME, args)?;
        task.add_task_listener(Box::new(EffectivelyFinalTaskListener::new(options)));
        Ok(())
    }
}

/// Scans a unit once its analyze phase has finished.
#[derive(Clone, Copy, Debug, Default)]
pub struct EffectivelyFinalTaskListener {
    options: RuleOptions,
}

impl EffectivelyFinalTaskListener {
    pub fn new(options: RuleOptions) -> Self {
        EffectivelyFinalTaskListener { options }
    }
}

impl TaskListener for EffectivelyFinalTaskListener {
    fn finished(&mut self, event: &TaskEvent<'_>, sink: &mut dyn DiagnosticSink) {
        if event.kind == TaskKind::Analyze {
            crate::check_source_unit(event.unit, self.options, sink);
        }
    }
}

#[cfg(test)]
#[path = "../tests/plugin_tests.rs"]
mod tests;
