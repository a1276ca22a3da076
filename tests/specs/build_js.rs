//! Behavioral specs for `suitepack --js`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Conversion
// =============================================================================

/// add.wast is converted, invalid-fail.wast is not
#[test]
fn converts_wast_and_skips_expected_failures() {
    let suite = Suite::with_interpreter();
    suite.file("core/add.wast", "(module)").file("core/invalid-fail.wast", "(module");

    suite.cmd().args(["--js", "out"]).assert().success();

    let out = suite.path().join("out");
    assert!(out.join("add.wast.js").exists());
    assert!(entries(&out).iter().all(|name| !name.starts_with("invalid-fail")));
    assert_eq!(read(&out.join("add.wast.js")).trim(), "// converted from add.wast");
}

/// Bundle has converted tests, JS API tests, and the harness
#[test]
fn bundle_layout() {
    let suite = Suite::with_interpreter();
    suite.standard_layout();

    suite.cmd().args(["--js", "out"]).assert().success();

    let out = suite.path().join("out");
    assert_eq!(entries(&out), vec!["add.wast.js", "harness", "i32.wast.js", "jsapi.js"]);
    assert_eq!(entries(&out.join("harness")), vec!["index.js", "testharness.js"]);
}

/// A failing conversion is reported but does not fail the run
#[test]
fn conversion_failure_is_not_fatal() {
    let suite = Suite::with_interpreter();
    suite.file("core/add.wast", "(module)").file("core/broken.wast", "(module");

    suite
        .cmd()
        .args(["--js", "out"])
        .assert()
        .success()
        .stdout(predicates::str::contains("1 converted, 0 skipped, 1 failed"))
        .stderr(predicates::str::contains("Error when compiling").and(predicates::str::contains("syntax error")));

    let out = suite.path().join("out");
    assert!(out.join("add.wast.js").exists());
    assert!(!out.join("broken.wast.js").exists());
}

// =============================================================================
// Output directory ownership
// =============================================================================

/// Nothing from a previous run survives
#[test]
fn output_dir_is_regenerated() {
    let suite = Suite::with_interpreter();
    suite.standard_layout().file("out/stale.js", "old").file("out/harness/old.js", "old");

    suite.cmd().args(["--js", "out"]).assert().success();

    let out = suite.path().join("out");
    assert!(!out.join("stale.js").exists());
    assert!(!out.join("harness/old.js").exists());
}

/// Running twice gives the same tree
#[test]
fn rerun_is_stable() {
    let suite = Suite::with_interpreter();
    suite.standard_layout();

    suite.cmd().args(["--js", "out"]).assert().success();
    let first = entries(&suite.path().join("out"));
    suite.cmd().args(["--js", "out"]).assert().success();

    assert_eq!(entries(&suite.path().join("out")), first);
}

// =============================================================================
// Interpreter precondition
// =============================================================================

/// An interpreter whose liveness probe fails aborts the run
#[test]
fn unrunnable_interpreter_aborts_before_output() {
    let suite = Suite::new();
    suite.standard_layout().file("out/keep.js", "previous");
    suite.install_interpreter(BROKEN_WASM);

    suite
        .cmd()
        .args(["--js", "out"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("unable to run the wasm executable"))
        .stderr(predicates::str::contains("interpreter not built"));

    // output directory untouched
    assert!(suite.path().join("out/keep.js").exists());
}

/// --wasm overrides the default interpreter location
#[test]
fn wasm_flag_overrides_default_location() {
    let suite = Suite::new();
    suite.standard_layout();
    let wasm = suite.install_interpreter(FAKE_WASM);
    let moved = suite.workspace().join("wasm-elsewhere");
    std::fs::rename(&wasm, &moved).unwrap();

    suite.cmd().args(["--js", "out"]).assert().failure().code(1);
    suite.cmd().arg("--wasm").arg(&moved).args(["--js", "out"]).assert().success();
}

// =============================================================================
// Summary output
// =============================================================================

#[test]
fn json_summary() {
    let suite = Suite::with_interpreter();
    suite.standard_layout();

    let output = suite.cmd().args(["--js", "out", "-o", "json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let js = &json["modes"][0];
    assert_eq!(js["mode"], "js");
    assert_eq!(js["converted"].as_array().unwrap().len(), 2);
    assert_eq!(js["skipped"].as_array().unwrap().len(), 1);
    assert!(js["failed"].as_array().unwrap().is_empty());
}
