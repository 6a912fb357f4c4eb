//! Project name validation
//!
//! The name is used verbatim as the destination directory name and as the
//! `name` field of the copied package.json, so anything that would escape the
//! working directory or produce an unusable path is rejected up front.

use crate::error::{Result, ScaffoldError};
use std::fmt;

/// A validated project name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate a raw command-line argument
    pub fn parse(raw: &str) -> Result<Self> {
        let reject = |reason: &'static str| -> Result<Self> {
            Err(ScaffoldError::InvalidName {
                name: raw.to_string(),
                reason,
            })
        };

        if raw.trim().is_empty() {
            return reject("must not be empty");
        }
        if raw.trim() != raw {
            return reject("must not start or end with whitespace");
        }
        if raw == "." || raw == ".." {
            return reject("must not be '.' or '..'");
        }
        if raw.contains('/') || raw.contains('\\') {
            return reject("must not contain path separators");
        }
        if raw.chars().any(char::is_control) {
            return reject("must not contain control characters");
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
