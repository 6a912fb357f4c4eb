//! The scaffolding pipeline
//!
//! guard -> copy -> patch package.json -> install. Each stage is a hard gate
//! and nothing is rolled back on failure: whatever earlier stages wrote stays
//! on disk.

use crate::error::{Result, ScaffoldError};
use crate::guard::ensure_absent;
use crate::install::{InstallStatus, Installer};
use crate::manifest::{patch_manifest, PatchOutcome};
use crate::materialize::{CopyStats, TreeCopier};
use crate::paths::{ProjectPaths, TemplateSource};
use colored::Colorize;

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub paths: ProjectPaths,
    pub copied: CopyStats,
    pub patch: PatchOutcome,
    /// Whether the installer ran (false with `skip_install`)
    pub installed: bool,
}

/// Runs the pipeline with injectable copy and install capabilities
pub struct Scaffolder<C, I> {
    paths: ProjectPaths,
    copier: C,
    installer: I,
    skip_install: bool,
}

impl<C: TreeCopier, I: Installer> Scaffolder<C, I> {
    pub fn new(paths: ProjectPaths, copier: C, installer: I) -> Self {
        Self {
            paths,
            copier,
            installer,
            skip_install: false,
        }
    }

    pub fn skip_install(mut self, skip: bool) -> Self {
        self.skip_install = skip;
        self
    }

    /// Run every stage in order, stopping at the first failure
    pub fn run(&self) -> Result<ScaffoldReport> {
        let paths = &self.paths;
        tracing::debug!(
            template = %paths.template,
            project = %paths.project.display(),
            "resolved paths"
        );

        // 1. Never overwrite
        ensure_absent(&paths.project)?;

        // 2. An on-disk template must be a directory before anything is created
        if let TemplateSource::Dir(dir) = &paths.template {
            if !dir.is_dir() {
                return Err(ScaffoldError::TemplateMissing { path: dir.clone() });
            }
        }

        println!("\n{}", format!("Creating {}...", paths.name).cyan().bold());
        println!("   Directory: {}\n", paths.project.display());

        // 3. Copy the template tree
        let copied = self
            .copier
            .copy_tree(&paths.template, &paths.project)
            .map_err(|source| ScaffoldError::Copy {
                source,
                destination: paths.project.clone(),
            })?;
        println!(
            "   {} {} files, {} directories from template",
            "Copied".green(),
            copied.files,
            copied.dirs
        );

        // 4. Rename the package
        let patch = patch_manifest(&paths.project, &paths.name)?;
        println!(
            "   {} package.json (name: {})",
            "Updated".green(),
            paths.name
        );

        // 5. Install dependencies
        if self.skip_install {
            println!(
                "   {} dependency installation (--skip-install)",
                "Skipping".yellow()
            );
        } else {
            self.install()?;
        }

        Ok(ScaffoldReport {
            paths: paths.clone(),
            copied,
            patch,
            installed: !self.skip_install,
        })
    }

    fn install(&self) -> Result<()> {
        println!("\nInstalling dependencies. This may take a while...");
        let status = self
            .installer
            .run_installer(&self.paths.project)
            .map_err(|source| ScaffoldError::InstallSpawn {
                program: self.installer.describe(),
                source,
            })?;

        match status {
            InstallStatus::Success => {
                println!("{}", "Dependencies installed successfully.".green());
                Ok(())
            }
            InstallStatus::Failed(code) => Err(ScaffoldError::InstallFailed { code }),
        }
    }
}
