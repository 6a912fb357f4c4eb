//! Error type shared by every scaffolding stage

use std::path::PathBuf;

/// Error type for scaffolding operations
#[derive(Debug)]
pub enum ScaffoldError {
    /// Project name rejected before touching the filesystem
    InvalidName { name: String, reason: &'static str },
    /// Destination already exists (file, directory or dangling symlink)
    DestinationExists { path: PathBuf },
    /// Template directory is missing or not a directory
    TemplateMissing { path: PathBuf },
    /// Copying the template tree failed partway
    Copy {
        source: std::io::Error,
        destination: PathBuf,
    },
    /// The copied tree has no package.json
    ManifestMissing { path: PathBuf },
    /// package.json is not valid JSON
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// package.json parsed but its root is not an object
    ManifestShape { path: PathBuf },
    /// The installer process could not be started
    InstallSpawn {
        program: String,
        source: std::io::Error,
    },
    /// The installer ran and exited unsuccessfully (`None` = killed by signal)
    InstallFailed { code: Option<i32> },
    Io(std::io::Error),
}

impl ScaffoldError {
    /// Process exit code for this error. Name problems are usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::InvalidName { .. } => 2,
            _ => 1,
        }
    }
}

impl std::fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaffoldError::InvalidName { name, reason } => {
                write!(f, "Invalid project name {:?}: {}", name, reason)
            }
            ScaffoldError::DestinationExists { path } => {
                write!(f, "Directory \"{}\" already exists.", path.display())
            }
            ScaffoldError::TemplateMissing { path } => {
                write!(f, "Template directory not found: {}", path.display())
            }
            ScaffoldError::Copy {
                source,
                destination,
            } => write!(
                f,
                "Failed to copy template into {}: {}",
                destination.display(),
                source
            ),
            ScaffoldError::ManifestMissing { path } => write!(
                f,
                "package.json not found in template (expected {}). Exiting...",
                path.display()
            ),
            ScaffoldError::ManifestParse { path, source } => {
                write!(f, "Could not parse {}: {}", path.display(), source)
            }
            ScaffoldError::ManifestShape { path } => {
                write!(f, "{} must contain a JSON object", path.display())
            }
            ScaffoldError::InstallSpawn { program, source } => {
                write!(f, "Failed to install dependencies: could not run '{}': {}", program, source)
            }
            ScaffoldError::InstallFailed { code: Some(code) } => {
                write!(f, "Failed to install dependencies: installer exited with status {}", code)
            }
            ScaffoldError::InstallFailed { code: None } => {
                write!(f, "Failed to install dependencies: installer was terminated by a signal")
            }
            ScaffoldError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::Copy { source, .. } => Some(source),
            ScaffoldError::ManifestParse { source, .. } => Some(source),
            ScaffoldError::InstallSpawn { source, .. } => Some(source),
            ScaffoldError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScaffoldError {
    fn from(e: std::io::Error) -> Self {
        ScaffoldError::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
