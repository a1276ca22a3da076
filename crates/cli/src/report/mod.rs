// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run summary output.
//!
//! Summarizes what each selected mode produced in text or JSON format.

mod json;
mod text;

use std::path::PathBuf;

use serde::Serialize;

use crate::build::PageBuild;
use crate::cli::OutputFormat;
use crate::convert::ConvertReport;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// A delivery target selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Js,
    Html,
    Front,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Js => "js",
            Mode::Html => "html",
            Mode::Front => "front",
        }
    }
}

/// What one mode produced.
#[derive(Debug, Clone)]
pub struct ModeSummary {
    pub mode: Mode,
    pub dir: PathBuf,
    /// Present when this mode ran the interpreter itself.
    pub conversion: Option<ConvertReport>,
    pub pages: usize,
}

impl ModeSummary {
    pub fn scripts(dir: PathBuf, conversion: ConvertReport) -> Self {
        Self { mode: Mode::Js, dir, conversion: Some(conversion), pages: 0 }
    }

    pub fn pages(mode: Mode, dir: PathBuf, build: PageBuild) -> Self {
        Self { mode, dir, conversion: build.conversion, pages: build.pages }
    }
}

/// Summary of a whole run, in mode order.
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    pub modes: Vec<ModeSummary>,
}

impl BuildSummary {
    /// Total conversion failures across all modes.
    pub fn failed_conversions(&self) -> usize {
        self.modes.iter().filter_map(|m| m.conversion.as_ref()).map(|c| c.failed.len()).sum()
    }
}

/// Trait for summary formatters.
pub trait ReportFormatter {
    fn format(&self, summary: &BuildSummary) -> anyhow::Result<String>;
}

/// Format a summary in the requested format.
pub fn format_summary(format: OutputFormat, summary: &BuildSummary) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter.format(summary),
        OutputFormat::Json => JsonFormatter.format(summary),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
