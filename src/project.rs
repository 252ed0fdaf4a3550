use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Directory whose presence marks the project root.
pub const ROOT_MARKER_DIR: &str = "test";

/// Walk upward from `start` until a directory containing a
/// subdirectory named `marker_dir` is found. Bounded by the filesystem
/// root; a clear error beats looping forever.
pub fn find_project_root(start: &Path, marker_dir: &str) -> Result<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        if dir.join(marker_dir).is_dir() {
            return Ok(dir.to_path_buf());
        }
        current = dir.parent();
    }
    bail!(
        "Could not find project root: no ancestor of {} contains a '{}' directory",
        start.display(),
        marker_dir
    )
}
