use std::fs;
use std::path::Path;

use crate::domain::AppError;

/// Result of patching one target file.
///
/// Created by a target handler after comparing pre/post content; consumed
/// by the orchestrator for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// Target path relative to the template root.
    pub path: &'static str,
    /// Whether the file on disk was rewritten.
    pub changed: bool,
}

/// Read a target file, tagging any failure with its path.
pub fn read_target(root: &Path, target: &str) -> Result<String, AppError> {
    let path = root.join(target);
    fs::read_to_string(&path)
        .map_err(|source| AppError::Filesystem { path: path.display().to_string(), source })
}

/// Write `new_content` to a target only if it differs from what is on disk.
///
/// Identical content is skipped, which is what makes re-running the full
/// patch sequence against an already-patched checkout a no-op. Differing
/// content is overwritten in place; there is no backup and no atomic
/// rename.
pub fn write_if_changed(
    root: &Path,
    target: &'static str,
    new_content: &str,
) -> Result<PatchOutcome, AppError> {
    let current = read_target(root, target)?;
    if current == new_content {
        return Ok(PatchOutcome { path: target, changed: false });
    }

    let path = root.join(target);
    fs::write(&path, new_content)
        .map_err(|source| AppError::Filesystem { path: path.display().to_string(), source })?;
    Ok(PatchOutcome { path: target, changed: true })
}
