//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the suitepack crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an empty temp directory to act as a suite root.
pub fn temp_suite() -> TempDir {
    TempDir::new().unwrap()
}

/// Creates a temp suite root with a `suitepack.toml` containing `config`.
pub fn temp_suite_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("suitepack.toml"), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = temp_suite();
/// create_tree(tmp.path(), &[
///     ("core/add.wast", "(module)"),
///     ("harness/index.js", "// harness"),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Sorted file names directly under `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Writes a stand-in for the reference interpreter into `dir`.
///
/// The script answers the `-v -e ""` liveness probe, writes
/// `// converted from <input>` to the `-o` path, and fails for any
/// input whose name contains `broken`.
#[cfg(unix)]
pub fn fake_wasm_tool(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("wasm");
    fs::write(
        &path,
        r#"#!/bin/sh
if [ "$1" = "-v" ]; then
    exit 0
fi
case "$1" in
    *broken*) echo "syntax error in $1" >&2; exit 1 ;;
esac
echo "// converted from $(basename "$1")" > "$4"
"#,
    )
    .unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Writes an interpreter stand-in that always fails.
#[cfg(unix)]
pub fn failing_wasm_tool(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("wasm");
    fs::write(&path, "#!/bin/sh\necho 'not built' >&2\nexit 2\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
