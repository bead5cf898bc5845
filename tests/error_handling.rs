use std::fs;

use colorvars::{
    process_stylesheet, run, write_output, ColorVarsConfig, PipelineError, StylesheetError,
};
use tempfile::tempdir;

#[test]
fn existing_target_is_left_untouched() {
    let dir = tempdir().expect("tempdir");
    let source = dir.path().join("site.css");
    let target = dir.path().join("out.css");
    fs::write(&source, "a { color: #fff; }").expect("write source");
    fs::write(&target, "keep me").expect("write target");

    let err = run(&source, Some(&target), &ColorVarsConfig::default()).unwrap_err();
    assert!(matches!(err, PipelineError::TargetExists(ref p) if p == &target));
    assert_eq!(fs::read_to_string(&target).expect("read target"), "keep me");
}

#[test]
fn default_target_is_output_css_next_to_source() {
    let dir = tempdir().expect("tempdir");
    let source = dir.path().join("site.css");
    fs::write(&source, "a{color:#fff}").expect("write source");

    let summary = run(&source, None, &ColorVarsConfig::default()).expect("run");
    let target = summary.target.expect("written target");
    assert_eq!(target, dir.path().join("output.css"));
    let written = fs::read_to_string(&target).expect("read output");
    assert_eq!(written, summary.processed.css);

    // A second run must refuse to overwrite the first result.
    let err = run(&source, None, &ColorVarsConfig::default()).unwrap_err();
    assert!(matches!(err, PipelineError::TargetExists(_)));
    assert_eq!(fs::read_to_string(&target).expect("reread"), written);
}

#[test]
fn missing_source_is_a_read_error() {
    let dir = tempdir().expect("tempdir");
    let source = dir.path().join("absent.css");
    let err = run(&source, None, &ColorVarsConfig::default()).unwrap_err();
    assert!(matches!(err, PipelineError::Read { ref path, .. } if path == &source));
    assert!(!dir.path().join("output.css").exists());
}

#[test]
fn stray_close_brace_aborts_the_run() {
    let err = process_stylesheet("a { color: #fff; }}", &ColorVarsConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Stylesheet(StylesheetError::InvalidRule { line: 1, .. })
    ));
}

#[test]
fn unclosed_block_is_closed_by_end_of_input() {
    let out = process_stylesheet("a { color: #fff;", &ColorVarsConfig::default()).expect("pipeline");
    assert_eq!(out.substituted, 1);
}

#[test]
fn parse_failure_writes_nothing() {
    let dir = tempdir().expect("tempdir");
    let source = dir.path().join("broken.css");
    fs::write(&source, "a { color #fff; }").expect("write source");

    let err = run(&source, None, &ColorVarsConfig::default()).unwrap_err();
    assert!(matches!(err, PipelineError::Stylesheet(_)));
    assert!(!dir.path().join("output.css").exists());
}

#[test]
fn write_into_missing_directory_fails_cleanly() {
    let dir = tempdir().expect("tempdir");
    let target = dir.path().join("nope").join("out.css");
    let err = write_output(&target, ":root {\n}\n").unwrap_err();
    assert!(matches!(err, PipelineError::Write { .. }));
    assert!(!target.exists());
}

#[test]
fn invalid_config_is_rejected_before_processing() {
    let mut cfg = ColorVarsConfig::default();
    cfg.dedup.var_prefix = "bad prefix".into();
    let err = process_stylesheet("a { color: #fff; }", &cfg).unwrap_err();
    assert!(matches!(err, PipelineError::Dedup(_)));
}
