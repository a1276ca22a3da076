// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build command implementation.
//!
//! Resolves the suite layout, checks the interpreter, then builds every
//! selected mode in order: js, html, front.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use suitepack::build::{self, Suite};
use suitepack::cli::Cli;
use suitepack::config::{self, Config};
use suitepack::discovery::{self, ConfigSearch};
use suitepack::error::ExitCode;
use suitepack::fs_util::ensure_empty_dir;
use suitepack::report::{self, BuildSummary, Mode, ModeSummary};
use suitepack::tool::WasmTool;

/// Run the build.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let suite = resolve_suite(cli, &cwd)?;

    suite.tool.ensure_runnable()?;
    tracing::info!("Using wasm executable {}", suite.tool.path().display());

    let mut summary = BuildSummary::default();

    if let Some(js_dir) = &cli.js {
        ensure_empty_dir(js_dir)?;
        let conversion = build::js::build_js(&suite, js_dir)
            .with_context(|| format!("failed to build JS tests in {}", js_dir.display()))?;
        summary.modes.push(ModeSummary::scripts(js_dir.clone(), conversion));
    }

    if let Some(html_dir) = &cli.html {
        ensure_empty_dir(html_dir)?;
        let pages = build::html::build_html(&suite, html_dir, cli.js.as_deref())
            .with_context(|| format!("failed to build HTML tests in {}", html_dir.display()))?;
        summary.modes.push(ModeSummary::pages(Mode::Html, html_dir.clone(), pages));
    }

    if let Some(front_dir) = &cli.front {
        ensure_empty_dir(front_dir)?;
        let page = build::front::build_front_page(&suite, front_dir, cli.js.as_deref())
            .with_context(|| format!("failed to build front page in {}", front_dir.display()))?;
        summary.modes.push(ModeSummary::pages(Mode::Front, front_dir.clone(), page));
    }

    let failed = summary.failed_conversions();
    if failed > 0 {
        tracing::warn!("{} script(s) failed to convert", failed);
    }

    let output = report::format_summary(cli.output, &summary)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{}", output)?;
    if matches!(cli.output, suitepack::cli::OutputFormat::Json) {
        writeln!(handle)?;
    }

    // Per-script conversion failures do not fail the run.
    Ok(ExitCode::Success)
}

/// Combine CLI flags, config file, and defaults into a [`Suite`].
fn resolve_suite(cli: &Cli, cwd: &Path) -> anyhow::Result<Suite> {
    let (root, search) = match &cli.suite {
        Some(path) => (absolute(cwd, path), ConfigSearch::SuiteRootOnly),
        None => (cwd.to_path_buf(), ConfigSearch::UpToGitRoot),
    };

    let config_path = match &cli.config {
        Some(path) => Some(absolute(cwd, path)),
        None => discovery::find_config(&root, search),
    };

    let (config, base) = match config_path {
        Some(path) => {
            let config = config::load(&path)?;
            let base = path.parent().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
            (config, base)
        }
        None => (Config::default(), root),
    };

    let wasm = match &cli.wasm {
        Some(path) => absolute(cwd, path),
        None => config.tool.wasm_path(&base),
    };

    let layout = config.layout.resolve(&base);
    tracing::debug!("suite layout: {:?}", layout);
    Ok(Suite::new(layout, WasmTool::new(wasm)))
}

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) }
}
