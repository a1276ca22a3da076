// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reference interpreter invocation.
//!
//! The interpreter is treated as a black box: it either converts a
//! `.wast` script into JS or exits non-zero.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::error::{Error, Result};

/// Outcome of a single interpreter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Exited with status 0.
    Success,
    /// Exited non-zero or could not be started; carries the captured output.
    Failed(String),
}

/// Handle to the reference interpreter executable.
#[derive(Debug, Clone)]
pub struct WasmTool {
    path: PathBuf,
}

impl WasmTool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `<tool> -v -e ""` and fail if it does not exit cleanly.
    pub fn ensure_runnable(&self) -> Result<()> {
        let output = Command::new(&self.path)
            .args(["-v", "-e", ""])
            .output()
            .map_err(|source| Error::ToolSpawn { path: self.path().to_path_buf(), source })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(Error::ToolUnavailable { path: self.path().to_path_buf(), output: combined(&output) })
        }
    }

    /// Run `<tool> <input> -h -o <output>`.
    pub fn convert(&self, input: &Path, output: &Path) -> ToolOutcome {
        let result = Command::new(&self.path)
            .arg(input)
            .arg("-h")
            .arg("-o")
            .arg(output)
            .output();

        match result {
            Ok(out) if out.status.success() => ToolOutcome::Success,
            Ok(out) => ToolOutcome::Failed(combined(&out)),
            Err(e) => ToolOutcome::Failed(format!("failed to spawn {}: {}", self.path().display(), e)),
        }
    }
}

/// Stdout followed by stderr, trimmed.
fn combined(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text.trim().to_string()
}

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;
