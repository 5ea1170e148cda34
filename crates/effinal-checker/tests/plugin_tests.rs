use super::*;
use crate::fixtures::UnitBuilder;
use effinal_ast::AssignOp;

/// `void f(int x) { x += 1; x = 2; }`
fn unit_with_writes() -> SourceUnit {
    let mut b = UnitBuilder::new();
    let x = b.param("x");
    let one = b.lit("1");
    let compound = b.assign_op(AssignOp::Add, "x", one);
    let two = b.lit("2");
    let plain = b.assign("x", two);
    let f = b.method("f", vec![x], vec![compound, plain]);
    b.finish(vec![f])
}

fn clean_unit() -> SourceUnit {
    let mut b = UnitBuilder::new();
    let x = b.final_param("x");
    let f = b.method("f", vec![x], vec![]);
    b.finish(vec![f])
}

#[derive(Default)]
struct Recorder {
    events: std::sync::Arc<std::sync::Mutex<Vec<(TaskKind, bool)>>>,
}

impl TaskListener for Recorder {
    fn started(&mut self, event: &TaskEvent<'_>, _sink: &mut dyn DiagnosticSink) {
        self.events.lock().unwrap().push((event.kind, true));
    }

    fn finished(&mut self, event: &TaskEvent<'_>, _sink: &mut dyn DiagnosticSink) {
        self.events.lock().unwrap().push((event.kind, false));
    }
}

#[test]
fn test_plugin_registers_listener() {
    let plugin = EffectivelyFinalPlugin::default();
    assert_eq!(plugin.name(), "EffectivelyFinal");

    let mut task = CompilationTask::new();
    plugin.init(&mut task, &[]).unwrap();
    assert_eq!(task.listener_count(), 1);
}

#[test]
fn test_violations_fail_the_unit() {
    let mut task = CompilationTask::new();
    EffectivelyFinalPlugin::default().init(&mut task, &[]).unwrap();

    let outcome = task.process(&unit_with_writes());
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(outcome.has_errors());
    assert!(!outcome.generated);

    let outcome = task.process(&clean_unit());
    assert!(outcome.diagnostics.is_empty());
    assert!(outcome.generated);
}

#[test]
fn test_plugin_args_reach_listener() {
    let mut task = CompilationTask::new();
    EffectivelyFinalPlugin::default()
        .init(&mut task, &["compound".to_string()])
        .unwrap();
    assert_eq!(task.process(&unit_with_writes()).diagnostics.len(), 2);

    let mut task = CompilationTask::new();
    let plugin = EffectivelyFinalPlugin::new(RuleOptions::all());
    plugin.init(&mut task, &[]).unwrap();
    assert_eq!(task.process(&unit_with_writes()).diagnostics.len(), 2);
}

#[test]
fn test_bad_plugin_arg_registers_nothing() {
    let mut task = CompilationTask::new();
    let result = EffectivelyFinalPlugin::default().init(&mut task, &["loud".to_string()]);
    assert!(matches!(result, Err(PluginError::UnknownArgument { .. })));
    assert_eq!(task.listener_count(), 0);
}

#[test]
fn test_scan_runs_only_after_analyze() {
    // A failing unit never reaches Generate.
    let recorder = Recorder::default();
    let events = recorder.events.clone();

    let mut task = CompilationTask::new();
    EffectivelyFinalPlugin::default().init(&mut task, &[]).unwrap();
    task.add_task_listener(Box::new(recorder));

    task.process(&unit_with_writes());
    let recorded = events.lock().unwrap().clone();
    assert_eq!(
        recorded,
        [
            (TaskKind::Parse, true),
            (TaskKind::Parse, false),
            (TaskKind::Enter, true),
            (TaskKind::Enter, false),
            (TaskKind::Analyze, true),
            (TaskKind::Analyze, false),
        ]
    );

    events.lock().unwrap().clear();
    task.process(&clean_unit());
    assert_eq!(events.lock().unwrap().len(), 8);
}
