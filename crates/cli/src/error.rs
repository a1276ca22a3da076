// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building the suite.
#[derive(Debug, Error)]
pub enum Error {
    /// The interpreter ran but its liveness check failed.
    #[error("unable to run the wasm executable {}: {output}", path.display())]
    ToolUnavailable { path: PathBuf, output: String },

    /// The interpreter could not be started at all.
    #[error("failed to spawn {}", path.display())]
    ToolSpawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem operation failed.
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed.
    #[error("invalid config {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A discovery glob did not compile.
    #[error("invalid glob pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every selected mode was built.
    Success = 0,
    /// A fatal error aborted the run.
    Failure = 1,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
