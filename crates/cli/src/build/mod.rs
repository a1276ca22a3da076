// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Packagers for the three delivery targets.
//!
//! - [`js`]: converted and hand-written scripts plus harness assets.
//! - [`html`]: one HTML page per script of a script bundle.
//! - [`front`]: every script of a bundle on a single page.

pub mod front;
pub mod html;
pub mod js;

use std::path::Path;

use crate::config::LayoutConfig;
use crate::convert::ConvertReport;
use crate::error::Result;
use crate::fs_util::{
    copy_matching, copy_tree, ensure_empty_dir, ensure_remove_dir, file_name_str, list_matching,
};
use crate::tool::WasmTool;

/// Glob for JS test scripts.
pub const JS_PATTERN: &str = "*.js";

/// Subdirectory of a page bundle holding its scripts.
pub const BUNDLE_SCRIPT_DIR: &str = "js";

/// Resolved inputs of a build: source directories and the interpreter.
#[derive(Debug, Clone)]
pub struct Suite {
    pub layout: LayoutConfig,
    pub tool: WasmTool,
}

impl Suite {
    /// `layout` must already be resolved to real paths.
    pub fn new(layout: LayoutConfig, tool: WasmTool) -> Self {
        Self { layout, tool }
    }
}

/// Result of building a page bundle (HTML or front page).
#[derive(Debug, Clone, Default)]
pub struct PageBuild {
    /// Set when the scripts were converted rather than copied.
    pub conversion: Option<ConvertReport>,
    /// Number of HTML documents written.
    pub pages: usize,
}

/// Fill `bundle_dir` with a fresh script bundle plus the browser-only tests.
///
/// With `existing`, that bundle is copied wholesale; otherwise a new one
/// is built. Either way `bundle_dir` ends up as a private copy.
pub(crate) fn acquire_bundle(
    suite: &Suite,
    bundle_dir: &Path,
    existing: Option<&Path>,
) -> Result<Option<ConvertReport>> {
    let conversion = match existing {
        None => {
            ensure_empty_dir(bundle_dir)?;
            Some(js::build_js(suite, bundle_dir)?)
        }
        Some(js_dir) => {
            tracing::info!("Copying JS files into {}...", bundle_dir.display());
            ensure_remove_dir(bundle_dir)?;
            copy_tree(js_dir, bundle_dir)?;
            None
        }
    };

    let copied = copy_matching(&suite.layout.html, JS_PATTERN, bundle_dir)?;
    tracing::debug!("copied {} browser-only tests", copied);
    Ok(conversion)
}

/// Script file names directly in `dir`, in discovery order.
pub(crate) fn script_names(dir: &Path) -> Result<Vec<String>> {
    Ok(list_matching(dir, JS_PATTERN)?
        .iter()
        .filter_map(|path| file_name_str(path).map(str::to_string))
        .collect())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
