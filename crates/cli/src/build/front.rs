// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Front page: every script of a bundle run from one `index.html`.
//!
//! Scripts are wrapped in place so each runs in its own function scope.
//! Wrapping is single-use; it only ever runs on the private copy made by
//! [`acquire_bundle`], never on a caller's script bundle.

use std::fs;
use std::path::Path;

use super::{BUNDLE_SCRIPT_DIR, PageBuild, Suite, acquire_bundle, script_names};
use crate::error::{Error, Result};
use crate::fs_util::{file_name_str, list_matching};
use crate::template::{self, HARNESS_PREFIX, SCRIPT_DIR};

/// File name of the aggregate page.
pub const FRONT_PAGE: &str = "index.html";

/// Build the front page into `front_dir`, which must already exist.
pub fn build_front_page(suite: &Suite, front_dir: &Path, js_dir: Option<&Path>) -> Result<PageBuild> {
    tracing::info!("Building front page containing all the HTML tests...");

    let bundle_dir = front_dir.join(BUNDLE_SCRIPT_DIR);
    let conversion = acquire_bundle(suite, &bundle_dir, js_dir)?;
    wrap_scripts(&bundle_dir)?;

    let scripts = script_names(&bundle_dir)?;
    let page = front_dir.join(FRONT_PAGE);
    let content = template::front_page(HARNESS_PREFIX, SCRIPT_DIR, &scripts);
    fs::write(&page, content).map_err(|e| Error::io(&page, e))?;

    tracing::info!("Done building front page!");
    Ok(PageBuild { conversion, pages: 1 })
}

/// Wrap every script directly in `bundle_dir` in its own function scope.
fn wrap_scripts(bundle_dir: &Path) -> Result<()> {
    for script in list_matching(bundle_dir, super::JS_PATTERN)? {
        let Some(name) = file_name_str(&script) else {
            tracing::warn!("not wrapping script with non UTF-8 name: {}", script.display());
            continue;
        };
        let contents = fs::read_to_string(&script).map_err(|e| Error::io(&script, e))?;
        let wrapped = template::wrap_test_function(name, &contents);
        fs::write(&script, wrapped).map_err(|e| Error::io(&script, e))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "front_tests.rs"]
mod tests;
