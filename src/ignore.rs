//! Denylist handling for bootstrap runs.
//! Compiles the configured exclusion patterns into a glob set matched
//! against root-relative paths, similar to .gitignore functionality.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compiles denylist patterns into a `GlobSet` for path matching.
///
/// # Arguments
/// * `patterns` - Glob patterns, one entry per excluded path shape
///
/// # Errors
/// * `Error::DenylistError` if any pattern fails to compile
pub fn build_denylist(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::DenylistError(format!("invalid pattern '{}': {}", pattern, e))
        })?);
    }
    builder
        .build()
        .map_err(|e| Error::DenylistError(format!("denylist failed to compile: {}", e)))
}
