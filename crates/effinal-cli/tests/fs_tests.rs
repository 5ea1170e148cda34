use super::config::EffinalConfig;
use super::fs::{FileDiscoveryOptions, discover_input_files, is_input_file};
use std::path::{Path, PathBuf};

fn touch(dir: &Path, relative: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, "{}").unwrap();
    path
}

fn names(base: &Path, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            f.strip_prefix(base)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn input_files_are_json_but_not_config() {
    assert!(is_input_file(Path::new("out/Foo.json")));
    assert!(is_input_file(Path::new("out/Foo.JSON")));
    assert!(!is_input_file(Path::new("out/Foo.java")));
    assert!(!is_input_file(Path::new("out/effinal.json")));
}

#[test]
fn walks_base_dir_sorted_and_skips_hidden() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();
    touch(base, "b/Two.json");
    touch(base, "a/One.json");
    touch(base, ".cache/Skipped.json");
    touch(base, "effinal.json");
    touch(base, "notes.txt");

    let options = FileDiscoveryOptions {
        base_dir: base.to_path_buf(),
        ..FileDiscoveryOptions::default()
    };
    let files = discover_input_files(&options).unwrap();
    assert_eq!(names(base, &files), ["a/One.json", "b/Two.json"]);
}

#[test]
fn include_and_exclude_globs_filter_walked_files() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();
    touch(base, "src/One.json");
    touch(base, "src/deep/Two.json");
    touch(base, "src/generated/Three.json");
    touch(base, "other/Four.json");

    let config = EffinalConfig {
        include: Some(vec!["src/**/*.json".to_string()]),
        exclude: Some(vec!["**/generated/**".to_string()]),
        ..EffinalConfig::default()
    };
    let options = FileDiscoveryOptions::from_config(&base.join("effinal.json"), &config);
    let files = discover_input_files(&options).unwrap();
    assert_eq!(names(base, &files), ["src/One.json", "src/deep/Two.json"]);
}

#[test]
fn single_star_does_not_cross_directories() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();
    touch(base, "src/One.json");
    touch(base, "src/deep/Two.json");

    let options = FileDiscoveryOptions {
        base_dir: base.to_path_buf(),
        include: Some(vec!["src/*.json".to_string()]),
        ..FileDiscoveryOptions::default()
    };
    let files = discover_input_files(&options).unwrap();
    assert_eq!(names(base, &files), ["src/One.json"]);
}

#[test]
fn explicit_files_bypass_filters_and_dedup() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();
    let explicit = touch(base, "generated/Named.json");

    let options = FileDiscoveryOptions {
        base_dir: base.to_path_buf(),
        files: vec![explicit.clone(), PathBuf::from("generated/Named.json")],
        exclude: Some(vec!["generated/**".to_string()]),
        ..FileDiscoveryOptions::default()
    };
    assert_eq!(discover_input_files(&options).unwrap(), vec![explicit]);
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let options = FileDiscoveryOptions {
        base_dir: dir.path().to_path_buf(),
        files: vec![PathBuf::from("Nope.json")],
        ..FileDiscoveryOptions::default()
    };
    let err = discover_input_files(&options).unwrap_err();
    assert!(err.to_string().contains("input not found"));
}

#[test]
fn invalid_glob_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let options = FileDiscoveryOptions {
        base_dir: dir.path().to_path_buf(),
        include: Some(vec!["src/[".to_string()]),
        ..FileDiscoveryOptions::default()
    };
    let err = discover_input_files(&options).unwrap_err();
    assert!(err.to_string().contains("invalid glob pattern"));
}
