//! Source resolution for dropped or picked paths.
//!
//! Turns a user's raw selection (files and folders, possibly overlapping)
//! into an ordered list of candidate files:
//!
//! - folders are walked recursively, in file-name order
//! - files are kept when their extension is in the allowed set (case-insensitive)
//! - duplicates are detected on a canonical form of the path; the first
//!   occurrence wins and the caller's original spelling is returned
//!
//! Resolution never fails. Paths that cannot be read are left out here and
//! reported by the stage that actually opens them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolve `paths` to the ordered, de-duplicated files whose extension is in `allowed`.
///
/// Extensions may be given with or without a leading dot.
pub fn resolve<P: AsRef<Path>>(paths: &[P], allowed: &[&str]) -> Vec<PathBuf> {
    let allowed: HashSet<String> = allowed
        .iter()
        .map(|ext| ext.trim_start_matches('.').to_lowercase())
        .collect();

    let mut seen = HashSet::new();
    let mut resolved = Vec::new();

    for path in paths {
        for candidate in expand(path.as_ref()) {
            if !has_allowed_extension(&candidate, &allowed) {
                continue;
            }
            if seen.insert(canonical_key(&candidate)) {
                resolved.push(candidate);
            }
        }
    }

    tracing::debug!(inputs = paths.len(), files = resolved.len(), "Resolved sources");
    resolved
}

/// Expand a directory to every nested file; a file expands to itself.
fn expand(path: &Path) -> Vec<PathBuf> {
    if path.is_dir() {
        WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.into_path())
            .filter(|p| p.is_file())
            .collect()
    } else if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        Vec::new()
    }
}

fn has_allowed_extension(path: &Path, allowed: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| allowed.contains(&e.to_lowercase()))
        .unwrap_or(false)
}

/// Absolute, case-normalized form of `path`, used only for duplicate detection.
pub fn canonical_key(path: &Path) -> PathBuf {
    let absolute = std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf());

    if cfg!(windows) {
        PathBuf::from(absolute.to_string_lossy().to_lowercase())
    } else {
        absolute
    }
}
