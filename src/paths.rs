//! Command-line path handling.
//!
//! Both the input and an explicit output path go through [`resolve`]:
//! `~` is expanded, the path is made absolute, `.` and `..` are folded
//! away and symlinks are followed as far as the path exists on disk.

use crate::error::Result;
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Extension given to the output file when none is supplied.
const DEFAULT_OUTPUT_EXTENSION: &str = "extracted.txt";

/// Turn a raw command-line argument into an absolute, normalized path.
///
/// The path does not need to exist. Existence is the caller's concern.
pub(crate) fn resolve(raw: &str) -> Result<PathBuf> {
    let expanded = expand_home(raw);
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()?.join(expanded)
    };
    Ok(follow_symlinks(&normalize(&absolute)))
}

/// Derive the output path from the input path: `report.pdf` becomes
/// `report.extracted.txt`.
pub(crate) fn default_output(input: &Path) -> PathBuf {
    input.with_extension(DEFAULT_OUTPUT_EXTENSION)
}

/// Expand a leading `~` to the current user's home directory.
///
/// Only `~` and `~/...` are expanded; `~user` forms are left alone, as is
/// everything when no home directory can be determined.
fn expand_home(raw: &str) -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        if raw == "~" {
            return home;
        }
        if let Some(rest) = raw.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

/// Fold `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `pop` is a no-op at the root, so `/..` stays `/`.
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Canonicalize the longest existing ancestor of `path` and re-attach the
/// components that do not exist yet.
fn follow_symlinks(path: &Path) -> PathBuf {
    let mut missing: Vec<OsString> = Vec::new();
    let mut current = path;
    loop {
        if let Ok(real) = fs::canonicalize(current) {
            let mut out = real;
            for name in missing.iter().rev() {
                out.push(name);
            }
            return out;
        }
        match (current.parent(), current.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                current = parent;
            }
            _ => return path.to_path_buf(),
        }
    }
}
