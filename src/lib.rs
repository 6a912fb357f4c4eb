//! create-rext - Bootstrap a new rext project
//!
//! Writes the template compiled into the binary (or a template directory
//! given with `--template`) into `<cwd>/<name>`, sets the `name` field of
//! the copied `package.json`, and runs the package manager in the new
//! directory.
//!
//! # Pipeline
//!
//! | Stage | Module | Failure |
//! |-------|--------|---------|
//! | Resolve paths | [`paths`] | none (pure) |
//! | Refuse existing destination | [`guard`] | `DestinationExists` |
//! | Copy template | [`materialize`] | `TemplateMissing`, `Copy` |
//! | Patch package.json | [`manifest`] | `ManifestMissing`, `ManifestParse`, `ManifestShape` |
//! | Install dependencies | [`install`] | `InstallSpawn`, `InstallFailed` |
//!
//! Every failure is terminal. Nothing written by earlier stages is removed.
//!
//! # Quick Start
//!
//! ```no_run
//! use create_rext::{CommandInstaller, FsCopier, ProjectName, ProjectPaths, Scaffolder};
//! use std::path::Path;
//!
//! let name = ProjectName::parse("my-app").unwrap();
//! let paths = ProjectPaths::resolve(Path::new("/home/dev"), &name);
//! let report = Scaffolder::new(paths, FsCopier, CommandInstaller::default())
//!     .run()
//!     .unwrap();
//! println!("created {}", report.paths.project.display());
//! ```

pub mod config;
pub mod error;
pub mod guard;
pub mod install;
pub mod manifest;
pub mod materialize;
pub mod name;
pub mod paths;
pub mod scaffold;

pub use config::Config;
pub use error::{Result, ScaffoldError};
pub use install::{CommandInstaller, InstallStatus, Installer};
pub use manifest::{patch_manifest, PatchOutcome, MANIFEST_FILE};
pub use materialize::{bundled_template, CopyStats, FsCopier, TreeCopier};
pub use name::ProjectName;
pub use paths::{ProjectPaths, TemplateSource};
pub use scaffold::{ScaffoldReport, Scaffolder};
