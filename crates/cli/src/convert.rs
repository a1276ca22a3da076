// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `.wast` to JS conversion stage.
//!
//! Conversion is best-effort: a script the interpreter rejects is logged
//! and recorded, and the remaining scripts are still converted.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::fs_util::{file_name_str, list_matching};
use crate::tool::{ToolOutcome, WasmTool};

/// Glob for declarative test scripts.
pub const WAST_PATTERN: &str = "*.wast";

/// Scripts whose name contains this marker are expected to fail.
pub const EXPECTED_FAILURE_MARKER: &str = "fail.wast";

/// Suffix appended to a script name to form its converted name.
pub const JS_SUFFIX: &str = ".js";

/// A script the interpreter rejected.
#[derive(Debug, Clone, Serialize)]
pub struct FailedConversion {
    pub script: PathBuf,
    pub output: String,
}

/// Per-script results of a conversion pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConvertReport {
    /// Converted JS files that were written.
    pub converted: Vec<PathBuf>,
    /// Expected-failure scripts that were not converted.
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<FailedConversion>,
}

/// Whether `file_name` follows the expected-failure naming convention.
pub fn is_expected_failure(file_name: &str) -> bool {
    file_name.contains(EXPECTED_FAILURE_MARKER)
}

/// Converted file name for a script, e.g. `add.wast` -> `add.wast.js`.
pub fn converted_name(file_name: &str) -> String {
    format!("{file_name}{JS_SUFFIX}")
}

/// Convert every `.wast` script in `wast_dir` into `out_dir`.
pub fn convert_all(tool: &WasmTool, wast_dir: &Path, out_dir: &Path) -> Result<ConvertReport> {
    let mut report = ConvertReport::default();

    for script in list_matching(wast_dir, WAST_PATTERN)? {
        let Some(name) = file_name_str(&script) else {
            tracing::warn!("skipping non UTF-8 script name: {}", script.display());
            continue;
        };

        if is_expected_failure(name) {
            tracing::debug!("skipping expected failure {}", name);
            report.skipped.push(script);
            continue;
        }

        tracing::info!("Compiling {} to JS...", script.display());
        let js_file = out_dir.join(converted_name(name));
        match tool.convert(&script, &js_file) {
            ToolOutcome::Success => report.converted.push(js_file),
            ToolOutcome::Failed(output) => {
                tracing::warn!("Error when compiling {} to JS: {}", script.display(), output);
                report.failed.push(FailedConversion { script, output });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
