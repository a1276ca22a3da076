// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format summary output.

use std::fmt::Write;

use super::{BuildSummary, ReportFormatter};

/// Text format summary formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, summary: &BuildSummary) -> anyhow::Result<String> {
        let mut out = String::new();
        for mode in &summary.modes {
            write!(out, "{}: {}", mode.mode.as_str(), mode.dir.display())?;

            let mut details = Vec::new();
            if let Some(conversion) = &mode.conversion {
                details.push(format!("{} converted", conversion.converted.len()));
                details.push(format!("{} skipped", conversion.skipped.len()));
                details.push(format!("{} failed", conversion.failed.len()));
            }
            if mode.pages > 0 {
                let noun = if mode.pages == 1 { "page" } else { "pages" };
                details.push(format!("{} {}", mode.pages, noun));
            }
            if !details.is_empty() {
                write!(out, " ({})", details.join(", "))?;
            }
            writeln!(out)?;

            if let Some(conversion) = &mode.conversion {
                for failed in &conversion.failed {
                    writeln!(out, "  failed: {}", failed.script.display())?;
                }
            }
        }
        writeln!(out, "Done!")?;
        Ok(out)
    }
}
