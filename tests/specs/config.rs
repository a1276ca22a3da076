//! Behavioral specs for suitepack.toml.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// [layout] relocates source directories
#[test]
fn layout_override() {
    let suite = Suite::with_interpreter();
    suite
        .file("suitepack.toml", "[layout]\ncore = \"wast\"\nharness = \"support\"\n")
        .file("wast/add.wast", "(module)")
        .file("core/ignored.wast", "(module)")
        .file("support/testharness.js", "");

    suite.cmd().args(["--js", "out"]).assert().success();

    let out = suite.path().join("out");
    assert_eq!(entries(&out), vec!["add.wast.js", "harness"]);
    assert_eq!(entries(&out.join("harness")), vec!["testharness.js"]);
}

/// [tool] wasm is resolved against the config file's directory
#[test]
fn tool_override() {
    let suite = Suite::new();
    suite
        .file("suitepack.toml", "[tool]\nwasm = \"bin/wasm\"\n")
        .file("core/add.wast", "(module)");
    let wasm = suite.install_interpreter(FAKE_WASM);
    std::fs::create_dir_all(suite.path().join("bin")).unwrap();
    std::fs::rename(wasm, suite.path().join("bin/wasm")).unwrap();

    suite.cmd().args(["--js", "out"]).assert().success();
    assert!(suite.path().join("out/add.wast.js").exists());
}

/// --suite points at a suite root other than the working directory
#[test]
fn suite_flag() {
    let suite = Suite::with_interpreter();
    suite.standard_layout();

    suitepack_cmd()
        .current_dir(suite.workspace())
        .args(["--suite", "test", "--js", "out"])
        .assert()
        .success();

    assert!(suite.workspace().join("out/add.wast.js").exists());
}

/// Unknown keys are rejected
#[test]
fn invalid_config_fails() {
    let suite = Suite::with_interpreter();
    suite.file("suitepack.toml", "[layout]\nwat = \"x\"\n");

    suite
        .cmd()
        .args(["--js", "out"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("invalid config"));
}

/// An explicit --suite root does not pick up configs from its parents
#[test]
fn suite_flag_ignores_parent_config() {
    let suite = Suite::with_interpreter();
    suite.standard_layout();
    std::fs::write(suite.workspace().join("suitepack.toml"), "[layout]\nbogus = 1\n").unwrap();

    suitepack_cmd()
        .current_dir(suite.workspace())
        .args(["--suite", "test", "--js", "out"])
        .assert()
        .success();

    suite.cmd().args(["--js", "out"]).assert().failure().code(1);
}
