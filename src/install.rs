//! Dependency installation via an external package manager
//!
//! The child inherits our stdin/stdout/stderr so the user sees live progress.
//! We block until it exits; there is no timeout.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Exit state of the installer process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStatus {
    Success,
    /// Non-zero exit; `None` when the process was killed by a signal
    Failed(Option<i32>),
}

impl InstallStatus {
    pub fn success(self) -> bool {
        matches!(self, InstallStatus::Success)
    }
}

impl From<std::process::ExitStatus> for InstallStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        if status.success() {
            InstallStatus::Success
        } else {
            InstallStatus::Failed(status.code())
        }
    }
}

/// Capability to install dependencies inside a project directory
pub trait Installer {
    /// Human-readable command line, for progress messages
    fn describe(&self) -> String;

    /// Run to completion in `directory`. `Err` means the process never started.
    fn run_installer(&self, directory: &Path) -> io::Result<InstallStatus>;
}

/// Runs a real command, `npm install` by default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInstaller {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for CommandInstaller {
    fn default() -> Self {
        Self {
            program: "npm".to_string(),
            args: vec!["install".to_string()],
        }
    }
}

impl CommandInstaller {
    /// Build from an argv list; `None` if it is empty
    pub fn from_argv<I, S>(argv: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut iter = argv.into_iter().map(Into::<String>::into);
        let program = iter.next()?;
        if program.trim().is_empty() {
            return None;
        }
        Some(Self {
            program,
            args: iter.collect(),
        })
    }

    /// Parse a whitespace-separated command line such as `"pnpm install --frozen-lockfile"`
    pub fn parse(command_line: &str) -> Option<Self> {
        Self::from_argv(command_line.split_whitespace())
    }
}

impl Installer for CommandInstaller {
    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn run_installer(&self, directory: &Path) -> io::Result<InstallStatus> {
        tracing::debug!("running '{}' in {}", self.describe(), directory.display());
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(directory)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        tracing::debug!(code = ?status.code(), "installer exited");
        Ok(status.into())
    }
}
