use super::*;

#[test]
fn test_default_only_checks_plain_assignment() {
    let options = RuleOptions::default();
    assert!(!options.check_compound_assignments);
    assert!(!options.check_update_expressions);
}

#[test]
fn test_plugin_args_enable_switches() {
    let options = RuleOptions::default()
        .with_plugin_args("EffectivelyFinal", &["compound", " "])
        .unwrap();
    assert!(options.check_compound_assignments);
    assert!(!options.check_update_expressions);

    let options = RuleOptions::default()
        .with_plugin_args("EffectivelyFinal", &["all"])
        .unwrap();
    assert_eq!(options, RuleOptions::all());
}

#[test]
fn test_plugin_args_keep_base_options() {
    let base = RuleOptions {
        check_update_expressions: true,
        ..RuleOptions::default()
    };
    let empty: [&str; 0] = [];
    assert_eq!(base.with_plugin_args("EffectivelyFinal", &empty).unwrap(), base);
}

#[test]
fn test_unknown_plugin_arg_is_rejected() {
    let err = RuleOptions::default()
        .with_plugin_args("EffectivelyFinal", &["update", "strict"])
        .unwrap_err();
    assert_eq!(
        err,
        PluginError::UnknownArgument {
            plugin: "EffectivelyFinal",
            argument: "strict".to_string(),
        }
    );
    assert!(err.to_string().contains("unknown argument `strict`"));
}
