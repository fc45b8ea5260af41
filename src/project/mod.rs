//! Project root discovery and local path keys.

use crate::domain::ROOT_KEY;
use crate::error::{AgmdError, Result};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Version-control marker that identifies a project root.
const ROOT_MARKER: &str = ".git";

/// Walk from `start` through its ancestors and return the first directory
/// containing a `.git` entry. Falls back to `start` when none is found.
pub fn locate_project_root(start: &Path) -> PathBuf {
    for candidate in start.ancestors() {
        if candidate.join(ROOT_MARKER).exists() {
            debug!(root = %candidate.display(), "Located project root");
            return candidate.to_path_buf();
        }
    }
    debug!(start = %start.display(), "No {ROOT_MARKER} marker found; using start as root");
    start.to_path_buf()
}

/// Turn a user-supplied path into the canonical manifest key.
///
/// Relative paths are resolved against `project_root`. The result is
/// forward-slash separated and relative to the root, or `.` for the root itself.
pub fn normalize_local_path(raw_path: &str, project_root: &Path) -> Result<String> {
    let candidate = Path::new(raw_path);
    let absolute = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        project_root.join(candidate)
    };

    let out_of_root =
        || AgmdError::OutOfRoot { raw: raw_path.to_string(), root: project_root.to_path_buf() };

    let resolved = lexical_normalize(&absolute).ok_or_else(out_of_root)?;
    let root = lexical_normalize(project_root).ok_or_else(out_of_root)?;
    let relative = resolved.strip_prefix(&root).map_err(|_| out_of_root())?;

    let segments: Vec<String> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();

    if segments.is_empty() {
        Ok(ROOT_KEY.to_string())
    } else {
        Ok(segments.join("/"))
    }
}

/// Resolve `.` and `..` without touching the filesystem. `None` when a `..`
/// would climb above the start of the path.
fn lexical_normalize(path: &Path) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    return None;
                }
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    Some(out)
}
