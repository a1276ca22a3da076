// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite layout configuration.
//!
//! An optional `suitepack.toml` relocates the suite's source directories
//! and the interpreter. Relative paths resolve against the directory
//! containing the config file.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level `suitepack.toml` contents.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub tool: ToolConfig,
}

/// Source directories of the suite.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Declarative `.wast` scripts.
    #[serde(default = "LayoutConfig::default_core")]
    pub core: PathBuf,

    /// Hand-written JS API tests.
    #[serde(default = "LayoutConfig::default_js_api")]
    pub js_api: PathBuf,

    /// Tests that only make sense in a browser.
    #[serde(default = "LayoutConfig::default_html")]
    pub html: PathBuf,

    /// Harness assets copied next to the scripts.
    #[serde(default = "LayoutConfig::default_harness")]
    pub harness: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            core: Self::default_core(),
            js_api: Self::default_js_api(),
            html: Self::default_html(),
            harness: Self::default_harness(),
        }
    }
}

impl LayoutConfig {
    fn default_core() -> PathBuf {
        PathBuf::from(defaults::layout::CORE)
    }

    fn default_js_api() -> PathBuf {
        PathBuf::from(defaults::layout::JS_API)
    }

    fn default_html() -> PathBuf {
        PathBuf::from(defaults::layout::HTML)
    }

    fn default_harness() -> PathBuf {
        PathBuf::from(defaults::layout::HARNESS)
    }

    /// Resolve every directory against `base`.
    pub fn resolve(&self, base: &Path) -> LayoutConfig {
        LayoutConfig {
            core: base.join(&self.core),
            js_api: base.join(&self.js_api),
            html: base.join(&self.html),
            harness: base.join(&self.harness),
        }
    }
}

/// Interpreter settings.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Path to the reference interpreter (default: `../interpreter/wasm`).
    pub wasm: Option<PathBuf>,
}

impl ToolConfig {
    /// Interpreter path resolved against `base`.
    pub fn wasm_path(&self, base: &Path) -> PathBuf {
        match &self.wasm {
            Some(path) => base.join(path),
            None => base.join(defaults::WASM_EXECUTABLE),
        }
    }
}

/// Parse config from TOML text. `path` is only used for error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    toml::from_str(content).map_err(|source| Error::Config { path: path.to_path_buf(), source })
}

/// Load config from a file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
