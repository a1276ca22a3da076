// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating `suitepack.toml` for a suite.
//!
//! A suite usually lives in the `test/` directory of a checkout, so an
//! implicit suite root searches its ancestors up to the git root. An
//! explicit `--suite` root is taken at its word and only searched itself.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE;

/// How far above the suite root to look for a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSearch {
    /// Only the suite root.
    SuiteRootOnly,
    /// The suite root and its ancestors, stopping at the git root.
    UpToGitRoot,
}

/// Find the config file for the suite rooted at `suite_root`.
pub fn find_config(suite_root: &Path, search: ConfigSearch) -> Option<PathBuf> {
    for dir in suite_root.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!("found {}", candidate.display());
            return Some(candidate);
        }
        let at_git_root = dir.join(".git").exists();
        if search == ConfigSearch::SuiteRootOnly || at_git_root {
            break;
        }
    }
    None
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
