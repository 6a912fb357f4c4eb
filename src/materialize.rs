//! Copy the template tree into the new project directory

use crate::paths::TemplateSource;
use include_dir::{include_dir, Dir, DirEntry};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Template shipped inside the binary
static BUNDLED_TEMPLATE: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/template");

/// The embedded template tree
pub fn bundled_template() -> &'static Dir<'static> {
    &BUNDLED_TEMPLATE
}

/// What a copy produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
}

/// Bulk recursive copy capability
pub trait TreeCopier {
    /// Copy everything in `source` into `destination`, creating `destination`.
    ///
    /// On error the destination may be partially populated.
    fn copy_tree(&self, source: &TemplateSource, destination: &Path) -> io::Result<CopyStats>;
}

/// Writes the template to disk, from the embedded tree or a directory
#[derive(Debug, Clone, Copy, Default)]
pub struct FsCopier;

impl TreeCopier for FsCopier {
    fn copy_tree(&self, source: &TemplateSource, destination: &Path) -> io::Result<CopyStats> {
        // Plain create_dir: the destination must not exist yet
        std::fs::create_dir(destination)?;
        let mut stats = CopyStats::default();

        match source {
            TemplateSource::Bundled => {
                write_embedded(&BUNDLED_TEMPLATE, destination, &mut stats)?;
            }
            TemplateSource::Dir(dir) => copy_dir(dir, destination, &mut stats)?,
        }

        tracing::debug!(
            files = stats.files,
            dirs = stats.dirs,
            "copied {} -> {}",
            source,
            destination.display()
        );
        Ok(stats)
    }
}

/// Entry paths of an embedded `Dir` are relative to the template root
fn write_embedded(dir: &Dir<'_>, destination: &Path, stats: &mut CopyStats) -> io::Result<()> {
    for entry in dir.entries() {
        let target = destination.join(entry.path());
        match entry {
            DirEntry::Dir(sub) => {
                std::fs::create_dir(&target)?;
                stats.dirs += 1;
                write_embedded(sub, destination, stats)?;
            }
            DirEntry::File(file) => {
                std::fs::write(&target, file.contents())?;
                stats.files += 1;
            }
        }
    }
    Ok(())
}

fn copy_dir(source: &Path, destination: &Path, stats: &mut CopyStats) -> io::Result<()> {
    for entry in WalkDir::new(source).follow_links(false).min_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        let rel_path = entry
            .path()
            .strip_prefix(source)
            .map_err(io::Error::other)?;
        let target = destination.join(rel_path);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            std::fs::create_dir(&target)?;
            stats.dirs += 1;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
            stats.files += 1;
        } else {
            std::fs::copy(entry.path(), &target)?;
            stats.files += 1;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(link: &Path, target: &Path) -> io::Result<()> {
    let points_to = std::fs::read_link(link)?;
    std::os::unix::fs::symlink(points_to, target)
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, target: &Path) -> io::Result<()> {
    // No portable symlink creation; copy what it points at
    std::fs::copy(link, target).map(|_| ())
}
