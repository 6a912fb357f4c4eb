//! Refuse to scaffold over anything that already exists

use crate::error::{Result, ScaffoldError};
use std::path::Path;

/// Fail if `path` exists in any form.
///
/// Uses `symlink_metadata` so a dangling symlink counts as existing. The check
/// is not atomic with the copy that follows; the materializer creates the
/// root with `create_dir` so a directory appearing in between still fails.
pub fn ensure_absent(path: &Path) -> Result<()> {
    match std::fs::symlink_metadata(path) {
        Ok(_) => Err(ScaffoldError::DestinationExists {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ScaffoldError::Io(e)),
    }
}
