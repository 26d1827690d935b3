//! Core tree rewriting for a bootstrap run.
//! One pass substitutes the placeholder tokens inside file contents, a
//! second renames the files and directories whose names carry a token.
//! The rename pass visits contents first so that nested placeholder
//! directories are renamed bottom-up and queued child paths stay valid.

use globset::GlobSet;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::BootstrapConfig;
use crate::error::{Error, Result};
use crate::ignore::build_denylist;

/// Walks the project tree and applies the placeholder rewrite.
pub struct Processor<'a> {
    config: &'a BootstrapConfig,
    denylist: GlobSet,
}

impl<'a> Processor<'a> {
    pub fn new(config: &'a BootstrapConfig) -> Result<Self> {
        let denylist = build_denylist(&config.denylist)?;
        Ok(Self { config, denylist })
    }

    /// True when a root-relative path must not be touched: denylisted, or
    /// one of the bootstrap artifacts themselves.
    fn is_excluded(&self, relative: &Path) -> bool {
        self.denylist.is_match(relative)
            || self.config.artifacts.iter().any(|artifact| artifact.as_path() == relative)
    }

    fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.config.root).unwrap_or(path)
    }

    /// Substitutes both placeholder tokens inside every eligible file.
    ///
    /// Files whose bytes are not valid UTF-8 are treated as binary and
    /// skipped; their names are still handled by the rename pass. Returns
    /// the number of files that changed.
    ///
    /// # Errors
    /// * `Error::PathIoError` on the first unreadable or unwritable file,
    ///   naming the offending path
    pub fn replace_placeholders(&self, dist_name: &str, import_name: &str) -> Result<usize> {
        let placeholders = &self.config.placeholders;
        let mut changed_file_count = 0;

        for entry in WalkDir::new(&self.config.root) {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = self.relative(path);
            if self.is_excluded(relative) {
                debug!("skipping excluded file '{}'", relative.display());
                continue;
            }

            let bytes = fs::read(path).map_err(|e| Error::PathIoError {
                path: path.display().to_string(),
                source: e,
            })?;
            let Ok(original) = String::from_utf8(bytes) else {
                debug!("skipping binary file '{}'", relative.display());
                continue;
            };

            let updated = original
                .replace(&placeholders.dist_token, dist_name)
                .replace(&placeholders.import_token, import_name);
            if updated == original {
                continue;
            }

            fs::write(path, updated).map_err(|e| Error::PathIoError {
                path: path.display().to_string(),
                source: e,
            })?;
            debug!("updated placeholders in '{}'", relative.display());
            changed_file_count += 1;
        }

        Ok(changed_file_count)
    }

    /// Renames every file and directory whose name contains a placeholder
    /// token, deepest entries first. Returns the applied renames.
    ///
    /// # Errors
    /// * `Error::RenameCollisionError` when a rename target already exists
    /// * `Error::PathIoError` when the rename itself fails
    pub fn rename_placeholder_paths(
        &self,
        dist_name: &str,
        import_name: &str,
    ) -> Result<Vec<(PathBuf, PathBuf)>> {
        let placeholders = &self.config.placeholders;

        // Snapshot before mutating. Contents-first ordering puts every
        // entry ahead of its parent directory, the one ordering that
        // keeps the queued paths valid while parents get renamed.
        let mut snapshot = Vec::new();
        for entry in WalkDir::new(&self.config.root).contents_first(true) {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            if entry.path() == self.config.root || entry.path_is_symlink() {
                continue;
            }
            snapshot.push(entry.into_path());
        }

        let mut renamed = Vec::new();
        for path in snapshot {
            let relative = self.relative(&path);
            if self.is_excluded(relative) {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            let new_name = file_name
                .replace(&placeholders.dist_token, dist_name)
                .replace(&placeholders.import_token, import_name);
            if new_name == file_name {
                continue;
            }

            let target = path.with_file_name(&new_name);
            if target.symlink_metadata().is_ok() {
                return Err(Error::RenameCollisionError {
                    from: path.display().to_string(),
                    to: target.display().to_string(),
                });
            }

            fs::rename(&path, &target).map_err(|e| Error::PathIoError {
                path: path.display().to_string(),
                source: e,
            })?;
            debug!(
                "renamed '{}' -> '{}'",
                self.relative(&path).display(),
                self.relative(&target).display()
            );
            renamed.push((path, target));
        }

        Ok(renamed)
    }
}
