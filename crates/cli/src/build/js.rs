// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Script bundle: converted `.wast` tests, JS API tests, and the harness.

use std::path::Path;

use super::{JS_PATTERN, Suite};
use crate::convert::{self, ConvertReport};
use crate::error::Result;
use crate::fs_util::{copy_matching, ensure_empty_dir};

/// Harness subdirectory inside a script bundle.
pub const HARNESS_DIR: &str = "harness";

/// Build the script bundle into `out_dir`, which must already exist.
pub fn build_js(suite: &Suite, out_dir: &Path) -> Result<ConvertReport> {
    tracing::info!("Building JS...");
    let report = convert::convert_all(&suite.tool, &suite.layout.core, out_dir)?;

    tracing::info!("Copying JS tests to the JS out dir...");
    copy_matching(&suite.layout.js_api, JS_PATTERN, out_dir)?;

    let harness_dir = out_dir.join(HARNESS_DIR);
    ensure_empty_dir(&harness_dir)?;

    tracing::info!("Copying JS test harness to the JS out dir...");
    copy_matching(&suite.layout.harness, "*", &harness_dir)?;

    tracing::info!("Done building JS.");
    Ok(report)
}

#[cfg(test)]
#[path = "js_tests.rs"]
mod tests;
