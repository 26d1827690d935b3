//! Christen turns a checkout of a project template into a concrete project.
//! It rewrites the template's placeholder identifiers in file contents and
//! paths, updates the project metadata record, re-locks dependencies and
//! verifies the result, then removes its own bootstrap artifacts so the
//! bootstrap cannot accidentally run twice.

/// Command-line interface module for the christen application
pub mod cli;

/// Deletion of bootstrap artifacts and documentation after success
pub mod cleanup;

/// Explicit run configuration: placeholder tokens, denylist, artifacts,
/// verification commands
pub mod config;

/// Error types and handling for the christen application
pub mod error;

/// Default-value inference from the git origin remote and user identity
pub mod git;

/// Denylist glob handling, excluding paths from the rewrite
pub mod ignore;

/// Metadata record parsing and byte-preserving field rewriting
pub mod metadata;

/// Core tree rewriting: content substitution and bottom-up path renames
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Collection and validation of the replacement values
pub mod values;

/// External verification commands: resolver, hooks, tests
pub mod verify;
