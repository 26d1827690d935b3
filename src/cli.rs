//! Command-line interface implementation for christen.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for christen.
///
/// Every value is optional: anything not supplied on the command line is
/// either prompted for (when stdin is a terminal) or inferred from the
/// project metadata and the git origin remote.
#[derive(Parser, Debug)]
#[command(author, version, about = "Christen: one-shot project template bootstrapper", long_about = None)]
pub struct Args {
    /// Distribution package name (e.g. my-package)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Import package name (e.g. my_package)
    #[arg(long)]
    pub import_name: Option<String>,

    /// Package description
    #[arg(long)]
    pub description: Option<String>,

    /// Author name
    #[arg(long)]
    pub author_name: Option<String>,

    /// Author email
    #[arg(long)]
    pub author_email: Option<String>,

    /// Repository URL
    #[arg(long)]
    pub repository_url: Option<String>,

    /// Issues URL
    #[arg(long)]
    pub issues_url: Option<String>,

    /// Supported Python version range (requires-python)
    #[arg(long)]
    pub python_range: Option<String>,

    /// Root of the project tree to bootstrap
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Skip the re-lock, hook and test verification commands
    #[arg(long)]
    pub no_verify: bool,

    /// Keep the bootstrap artifacts on success
    #[arg(long)]
    pub keep_script: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
