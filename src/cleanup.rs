//! Final bootstrap step: remove the bootstrap artifacts and the
//! documentation section describing them. Only ever called after every
//! other step has succeeded, so a failed run always leaves the artifacts
//! behind for a retry.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Deletes the artifact paths that exist under `root`, returning the ones
/// actually removed.
pub fn delete_artifacts(root: &Path, artifacts: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut deleted = Vec::new();
    for artifact in artifacts {
        let path = root.join(artifact);
        if !path.is_file() {
            debug!("artifact '{}' already gone", artifact.display());
            continue;
        }
        fs::remove_file(&path).map_err(|e| Error::PathIoError {
            path: path.display().to_string(),
            source: e,
        })?;
        deleted.push(artifact.clone());
    }
    Ok(deleted)
}

/// Removes the bootstrap section from the documentation file: the given
/// heading line through the line before the next heading of the same or a
/// higher level. Returns whether anything was removed. A missing file or
/// heading is not an error.
pub fn strip_docs_section(docs_path: &Path, heading: &str) -> Result<bool> {
    let Ok(text) = fs::read_to_string(docs_path) else {
        return Ok(false);
    };
    let Some(stripped) = remove_section(&text, heading) else {
        return Ok(false);
    };

    fs::write(docs_path, stripped).map_err(|e| Error::PathIoError {
        path: docs_path.display().to_string(),
        source: e,
    })?;
    Ok(true)
}

fn heading_level(line: &str) -> usize {
    line.chars().take_while(|c| *c == '#').count()
}

fn remove_section(text: &str, heading: &str) -> Option<String> {
    let level = heading_level(heading);
    let mut kept = Vec::new();
    let mut skipping = false;
    let mut removed = false;

    for line in text.lines() {
        if skipping {
            let line_level = heading_level(line);
            if line_level == 0 || line_level > level {
                continue;
            }
            skipping = false;
        }
        if line.trim_end() == heading {
            skipping = true;
            removed = true;
            continue;
        }
        kept.push(line);
    }

    if !removed {
        return None;
    }

    let mut result = kept.join("\n");
    if text.ends_with('\n') {
        result.push('\n');
    }
    Some(result)
}
