// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output directory staging.
//!
//! Every selected output directory is owned by the current run: it is
//! removed and recreated before anything is written into it.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};

use crate::error::{Error, Result};

/// Remove `path` recursively if it exists.
pub fn ensure_remove_dir(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path).map_err(|e| Error::io(path, e))?;
    }
    Ok(())
}

/// Remove `path` if present, then create it empty.
pub fn ensure_empty_dir(path: &Path) -> Result<()> {
    ensure_remove_dir(path)?;
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Compile a file name glob such as `*.wast`.
pub fn file_name_matcher(pattern: &str) -> Result<GlobMatcher> {
    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|source| Error::InvalidPattern { pattern: pattern.to_string(), source })
}

/// List regular files directly under `dir` whose file name matches `pattern`.
///
/// Results are sorted by file name. A missing directory yields no files.
/// Dotfiles only match patterns that themselves start with `.`.
pub fn list_matching(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = file_name_matcher(pattern)?;
    if !dir.is_dir() {
        tracing::debug!("{} does not exist, nothing to list", dir.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name() else {
            continue;
        };
        if is_hidden(name) && !pattern.starts_with('.') {
            continue;
        }
        if matcher.is_match(name) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Copy every file in `src_dir` matching `pattern` into `dest_dir`.
///
/// Returns the number of files copied.
pub fn copy_matching(src_dir: &Path, pattern: &str, dest_dir: &Path) -> Result<usize> {
    let files = list_matching(src_dir, pattern)?;
    for file in &files {
        // list_matching only returns paths with a file name
        let Some(name) = file.file_name() else {
            continue;
        };
        let dest = dest_dir.join(name);
        fs::copy(file, &dest).map_err(|e| Error::io(&dest, e))?;
    }
    Ok(files.len())
}

/// Recursively copy the directory tree at `src` to `dest`.
///
/// `dest` must not already exist. It may lie inside `src`: each
/// directory is listed before anything is written and `dest` itself is
/// never copied into itself.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    let src = fs::canonicalize(src).map_err(|e| Error::io(src, e))?;
    let entries = read_entries(&src)?;
    fs::create_dir_all(dest).map_err(|e| Error::io(dest, e))?;
    let dest_root = fs::canonicalize(dest).map_err(|e| Error::io(dest, e))?;
    copy_entries(entries, dest, &dest_root)
}

fn copy_entries(entries: Vec<fs::DirEntry>, dest: &Path, dest_root: &Path) -> Result<()> {
    for entry in entries {
        let from = entry.path();
        if from == dest_root {
            tracing::debug!("not copying {} into itself", from.display());
            continue;
        }
        let to = dest.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| Error::io(&from, e))?;
        if file_type.is_dir() {
            let children = read_entries(&from)?;
            fs::create_dir_all(&to).map_err(|e| Error::io(&to, e))?;
            copy_entries(children, &to, dest_root)?;
        } else {
            fs::copy(&from, &to).map_err(|e| Error::io(&to, e))?;
        }
    }
    Ok(())
}

fn read_entries(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .map(|entry| entry.map_err(|e| Error::io(dir, e)))
        .collect()
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// File name of `path` as UTF-8, if it has one.
pub fn file_name_str(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

#[cfg(test)]
#[path = "fs_util_tests.rs"]
mod tests;
