// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format summary output.

use serde_json::json;

use super::{BuildSummary, ReportFormatter};

/// JSON format summary formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, summary: &BuildSummary) -> anyhow::Result<String> {
        let modes: Vec<serde_json::Value> = summary
            .modes
            .iter()
            .map(|mode| {
                let mut entry = serde_json::Map::new();
                entry.insert("mode".to_string(), json!(mode.mode));
                entry.insert("dir".to_string(), json!(mode.dir));
                if let Some(conversion) = &mode.conversion {
                    entry.insert("converted".to_string(), json!(conversion.converted));
                    entry.insert("skipped".to_string(), json!(conversion.skipped));
                    entry.insert("failed".to_string(), json!(conversion.failed));
                }
                entry.insert("pages".to_string(), json!(mode.pages));
                serde_json::Value::Object(entry)
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json!({ "modes": modes }))?)
    }
}
