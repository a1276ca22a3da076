// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML bundle: one page per script.

use std::fs;
use std::path::Path;

use super::{BUNDLE_SCRIPT_DIR, PageBuild, Suite, acquire_bundle, script_names};
use crate::error::{Error, Result};
use crate::template::{self, HARNESS_PREFIX, SCRIPT_DIR};

/// Suffix of a generated page, appended to the script file name.
pub const HTML_SUFFIX: &str = ".html";

/// Build the HTML bundle into `html_dir`, which must already exist.
///
/// Scripts come from `js_dir` when given, otherwise they are converted.
pub fn build_html(suite: &Suite, html_dir: &Path, js_dir: Option<&Path>) -> Result<PageBuild> {
    tracing::info!("Building HTML tests...");

    let bundle_dir = html_dir.join(BUNDLE_SCRIPT_DIR);
    let conversion = acquire_bundle(suite, &bundle_dir, js_dir)?;

    tracing::info!("Building WPT tests from JS tests...");
    let pages = write_pages(&bundle_dir, html_dir)?;

    tracing::info!("Done building HTML tests.");
    Ok(PageBuild { conversion, pages })
}

/// Write `<script>.html` into `html_dir` for every script in `bundle_dir`.
pub fn write_pages(bundle_dir: &Path, html_dir: &Path) -> Result<usize> {
    let scripts = script_names(bundle_dir)?;
    for script in &scripts {
        let page = html_dir.join(format!("{script}{HTML_SUFFIX}"));
        let content = template::single_test_page(HARNESS_PREFIX, SCRIPT_DIR, script);
        fs::write(&page, content).map_err(|e| Error::io(&page, e))?;
    }
    Ok(scripts.len())
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
