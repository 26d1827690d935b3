//! Verification pipeline: re-lock dependencies, then run the formatter,
//! the hook runner and the test runner in the project root. Each command
//! inherits stdio so its output reaches the user verbatim; the only thing
//! interpreted here is the exit status.

use std::path::Path;
use std::process::Command;

use crate::config::BootstrapConfig;
use crate::error::{Error, Result};

/// Runs one external command in `root`, failing on a non-zero exit.
pub fn run_command(root: &Path, command: &[String]) -> Result<()> {
    let (program, args) = command.split_first().ok_or_else(|| {
        Error::ValidationError("empty verification command".to_string())
    })?;

    println!("→ {}", command.join(" "));
    let status = Command::new(program)
        .args(args)
        .current_dir(root)
        .status()
        .map_err(|e| Error::CommandError {
            command: command.join(" "),
            status: e.to_string(),
        })?;

    if !status.success() {
        return Err(Error::CommandError {
            command: command.join(" "),
            status: status.to_string(),
        });
    }

    Ok(())
}

/// Runs the configured verification commands in order, stopping at the
/// first failure.
pub fn run_verification(config: &BootstrapConfig) -> Result<()> {
    for command in &config.verify_commands {
        run_command(&config.root, command)?;
    }
    Ok(())
}
