//! Error handling for the christen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for christen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// An I/O failure tied to a specific path in the project tree.
    /// The path is surfaced so the user knows which file stopped the run.
    #[error("cannot modify '{path}': {source}.")]
    PathIoError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A placeholder rename would overwrite an existing entry.
    #[error("cannot rename '{from}': target '{to}' already exists.")]
    RenameCollisionError { from: String, to: String },

    /// Represents errors while editing or parsing the metadata record
    #[error("Metadata error: {0}.")]
    MetadataError(String),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents errors in the denylist glob patterns
    #[error("Denylist error: {0}.")]
    DenylistError(String),

    /// A verification command exited with a non-zero status.
    /// Its own output has already been surfaced on the inherited stdio.
    #[error("command `{command}` failed: {status}.")]
    CommandError { command: String, status: String },

    /// Represents errors during interactive prompting
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with christen's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Bootstrap failed: {}", err);
    std::process::exit(1);
}
