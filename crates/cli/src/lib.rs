// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Builds the cross-browser WebAssembly test suite.
//!
//! Converts `.wast` scripts to JS with the reference interpreter and
//! packages the results as a script bundle, an HTML bundle, and a
//! single front page.

pub mod build;
pub mod cli;
pub mod config;
pub mod convert;
pub mod discovery;
pub mod error;
pub mod fs_util;
pub mod report;
pub mod template;
pub mod tool;

#[cfg(test)]
pub mod test_utils;
