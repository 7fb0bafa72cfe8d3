use std::fs;
use std::path::{Path, PathBuf};

use stencil::error::Error;
use stencil::output::{ensure_parent_dir, resolve_output, OutputFile, OutputTarget};
use tempfile::TempDir;

const MARKERS: [&str; 3] = ["jinja", "j2", "tmpl"];

#[test]
fn test_classify_directory_targets() {
    let temp_dir = TempDir::new().unwrap();
    let existing = temp_dir.path().join("existing.d");
    fs::create_dir(&existing).unwrap();

    assert_eq!(OutputTarget::classify(&existing), OutputTarget::Directory(existing.clone()));

    let bare = temp_dir.path().join("out");
    assert_eq!(OutputTarget::classify(&bare), OutputTarget::Directory(bare.clone()));

    let trailing = PathBuf::from(format!("{}/gen.d/", temp_dir.path().display()));
    assert!(matches!(OutputTarget::classify(&trailing), OutputTarget::Directory(_)));
}

#[test]
fn test_classify_file_targets() {
    let temp_dir = TempDir::new().unwrap();

    let new_file = temp_dir.path().join("out").join("widget.ts");
    assert_eq!(OutputTarget::classify(&new_file), OutputTarget::File(new_file.clone()));

    let makefile = temp_dir.path().join("Makefile");
    fs::write(&makefile, "").unwrap();
    assert_eq!(OutputTarget::classify(&makefile), OutputTarget::File(makefile.clone()));
}

#[test]
fn test_resolve_output_in_directory() {
    let target = OutputTarget::Directory(PathBuf::from("out"));

    let output =
        resolve_output("widget", Path::new("tpl/t.ts.tmpl"), &target, 2, &MARKERS).unwrap();
    assert_eq!(
        output,
        OutputFile { path: PathBuf::from("out/widget.ts"), stem: "widget".to_string() }
    );

    let output =
        resolve_output("widget", Path::new("a.config.yaml.jinja"), &target, 2, &MARKERS).unwrap();
    assert_eq!(output.path, PathBuf::from("out/widget.config.yaml"));

    // no marker: the whole chain is kept
    let output = resolve_output("widget", Path::new("notes.md"), &target, 1, &MARKERS).unwrap();
    assert_eq!(output.path, PathBuf::from("out/widget.md"));
}

#[test]
fn test_resolve_output_respects_configured_markers() {
    let target = OutputTarget::Directory(PathBuf::from("out"));
    let output = resolve_output("widget", Path::new("t.ts.tpl"), &target, 1, &["tpl"]).unwrap();
    assert_eq!(output.path, PathBuf::from("out/widget.ts"));

    let output = resolve_output("widget", Path::new("t.ts.tmpl"), &target, 1, &["tpl"]).unwrap();
    assert_eq!(output.path, PathBuf::from("out/widget.ts.tmpl"));
}

#[test]
fn test_resolve_output_exact_file() {
    let target = OutputTarget::File(PathBuf::from("gen/api.client.ts"));
    let output = resolve_output("widget", Path::new("t.rs.tmpl"), &target, 1, &MARKERS).unwrap();

    assert_eq!(output.path, PathBuf::from("gen/api.client.ts"));
    assert_eq!(output.stem, "api");
}

#[test]
fn test_resolve_output_ambiguous() {
    let target = OutputTarget::File(PathBuf::from("gen/widget.ts"));
    match resolve_output("widget", Path::new("t.ts.tmpl"), &target, 2, &MARKERS) {
        Err(Error::AmbiguousOutput { output, count }) => {
            assert_eq!(output, PathBuf::from("gen/widget.ts"));
            assert_eq!(count, 2);
        }
        other => panic!("Expected AmbiguousOutput, got {other:?}"),
    }
}

#[test]
fn test_ensure_parent_dir_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("a").join("b").join("widget.ts");

    ensure_parent_dir(&output).unwrap();
    assert!(temp_dir.path().join("a").join("b").is_dir());
    ensure_parent_dir(&output).unwrap();

    // bare file names have no parent to create
    ensure_parent_dir(Path::new("widget.ts")).unwrap();
}

#[test]
fn test_ensure_parent_dir_fails_on_file_in_the_way() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    match ensure_parent_dir(&blocker.join("widget.ts")) {
        Err(Error::IoWrite { path, .. }) => assert_eq!(path, blocker),
        other => panic!("Expected IoWrite, got {other:?}"),
    }
}
