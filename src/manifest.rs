//! package.json patching
//!
//! The only content transformation applied to the copied template: the
//! manifest's `name` field is set to the project name. Every other field is
//! carried over untouched, in its original order.

use crate::error::{Result, ScaffoldError};
use crate::name::ProjectName;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Manifest location relative to the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Identity field rewritten by the patch
pub const NAME_FIELD: &str = "name";

/// Result of a successful patch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub path: PathBuf,
    /// Value of `name` before patching, if it was a string
    pub previous_name: Option<String>,
}

/// Path of the manifest inside a project directory
pub fn manifest_path(project_dir: &Path) -> PathBuf {
    project_dir.join(MANIFEST_FILE)
}

/// Set `name` in `<project_dir>/package.json` and write it back in place
pub fn patch_manifest(project_dir: &Path, name: &ProjectName) -> Result<PatchOutcome> {
    let path = manifest_path(project_dir);
    if !path.is_file() {
        return Err(ScaffoldError::ManifestMissing { path });
    }

    // Bytes, so invalid UTF-8 is reported as a manifest parse error
    let raw = std::fs::read(&path)?;
    let (updated, previous_name) = rewrite_name(&raw, name.as_str()).map_err(|e| match e {
        RewriteError::Parse(source) => ScaffoldError::ManifestParse {
            path: path.clone(),
            source,
        },
        RewriteError::NotObject => ScaffoldError::ManifestShape { path: path.clone() },
    })?;

    std::fs::write(&path, updated)?;
    tracing::debug!(
        previous = previous_name.as_deref().unwrap_or("<none>"),
        "patched {}",
        path.display()
    );

    Ok(PatchOutcome {
        path,
        previous_name,
    })
}

#[derive(Debug)]
enum RewriteError {
    Parse(serde_json::Error),
    NotObject,
}

/// New manifest text and the previous name
type RewriteResult = std::result::Result<(String, Option<String>), RewriteError>;

/// Pure rewrite of manifest bytes
fn rewrite_name(raw: &[u8], name: &str) -> RewriteResult {
    let mut doc: Value = serde_json::from_slice(raw).map_err(RewriteError::Parse)?;
    let obj = doc.as_object_mut().ok_or(RewriteError::NotObject)?;

    let previous = obj.insert(NAME_FIELD.to_string(), Value::String(name.to_string()));
    let previous_name = match previous {
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            tracing::warn!("replacing non-string manifest name {}", other);
            None
        }
        None => {
            tracing::warn!("template manifest had no `name` field; adding one");
            None
        }
    };

    let mut updated = serde_json::to_string_pretty(&doc).map_err(RewriteError::Parse)?;
    if raw.ends_with(b"\n") {
        updated.push('\n');
    }
    Ok((updated, previous_name))
}
