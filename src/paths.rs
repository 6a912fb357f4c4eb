//! Path resolution for the template and the destination project
//!
//! Nothing here touches the filesystem. The working directory is passed in
//! explicitly so resolution is deterministic.

use crate::name::ProjectName;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Where the template tree comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// The template compiled into the binary
    Bundled,
    /// A template directory on disk
    Dir(PathBuf),
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Bundled => f.write_str("bundled template"),
            TemplateSource::Dir(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolved source and destination for one scaffolding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub name: ProjectName,
    pub template: TemplateSource,
    pub project: PathBuf,
}

impl ProjectPaths {
    /// Destination under `cwd`, template defaulting to the bundled one
    pub fn resolve(cwd: &Path, name: &ProjectName) -> Self {
        Self {
            name: name.clone(),
            template: TemplateSource::Bundled,
            project: normalize(&cwd.join(name.as_str())),
        }
    }

    /// Use an on-disk template, resolving relative paths against `cwd`
    pub fn with_template(mut self, cwd: &Path, template: &Path) -> Self {
        self.template = TemplateSource::Dir(normalize(&cwd.join(template)));
        self
    }
}

/// Lexically collapse `.` and `..` components without consulting the filesystem
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root; on a relative path it is kept
                let popped = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                ) && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
