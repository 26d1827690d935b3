//! Run configuration for a bootstrap pass.
//! The placeholder tokens, the denylist and the verification pipeline are
//! carried as explicit values so the core logic can be exercised against
//! arbitrary trees in tests.

use std::path::{Path, PathBuf};

/// Distribution-style placeholder token used by the template.
pub const TEMPLATE_DIST_NAME: &str = "py-template";

/// Import-style placeholder token used by the template.
pub const TEMPLATE_IMPORT_NAME: &str = "py_template";

/// Name of the project metadata record.
pub const METADATA_FILE: &str = "pyproject.toml";

/// Documentation file holding the bootstrap section.
pub const DOCS_FILE: &str = "README.md";

/// Heading of the documentation section removed after a successful run.
pub const BOOTSTRAP_HEADING: &str = "## Bootstrapping";

/// Fallback supported version range for the metadata record.
pub const DEFAULT_PYTHON_RANGE: &str = ">=3.11";

/// Paths excluded from placeholder substitution and renaming.
/// Covers version-control metadata, virtualenvs, caches, build output
/// and the lock file (regenerated by the resolver, never edited).
pub const DEFAULT_DENYLIST: [&str; 12] = [
    ".git",
    ".git/**",
    ".venv",
    ".venv/**",
    "__pycache__",
    "**/__pycache__/**",
    ".pytest_cache/**",
    ".ruff_cache/**",
    ".mypy_cache/**",
    "dist/**",
    "target/**",
    "uv.lock",
];

/// Commands run after the rewrite, in order: re-lock dependencies, then
/// hand the tree to the formatter, the hook runner and the test runner.
pub const VERIFY_COMMANDS: [&[&str]; 5] = [
    &["uv", "sync", "--group", "dev"],
    &["uv", "lock"],
    &["uv", "run", "ruff", "format", "."],
    &["uv", "run", "prek", "run", "--all-files"],
    &["uv", "run", "pytest"],
];

/// The fixed pair of template tokens being replaced.
#[derive(Debug, Clone)]
pub struct Placeholders {
    /// Hyphenated public package name used in metadata and publishing
    pub dist_token: String,
    /// Underscored identifier used for the importable directory name
    pub import_token: String,
}

impl Placeholders {
    /// Placeholder pair of the stock template.
    pub fn template_defaults() -> Self {
        Self {
            dist_token: TEMPLATE_DIST_NAME.to_string(),
            import_token: TEMPLATE_IMPORT_NAME.to_string(),
        }
    }
}

/// Everything a bootstrap run needs to know about the tree it mutates.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Root of the project tree being bootstrapped
    pub root: PathBuf,
    /// Old tokens to replace
    pub placeholders: Placeholders,
    /// Glob patterns excluded from substitution and renaming
    pub denylist: Vec<String>,
    /// Metadata record file name, relative to the root
    pub metadata_file: String,
    /// Documentation file name, relative to the root
    pub docs_file: String,
    /// Heading of the bootstrap documentation section
    pub docs_heading: String,
    /// Bootstrap artifact paths, relative to the root, deleted on success
    pub artifacts: Vec<PathBuf>,
    /// Verification commands run in the root after the rewrite
    pub verify_commands: Vec<Vec<String>>,
}

impl BootstrapConfig {
    /// Builds the stock configuration for a template checkout at `root`.
    ///
    /// The artifact list starts with the running executable itself when it
    /// lives under the root, so that a bootstrap binary shipped inside the
    /// template removes itself on success.
    pub fn for_root(root: PathBuf) -> Self {
        let artifacts = own_executable_under(&root).into_iter().collect();
        Self {
            root,
            placeholders: Placeholders::template_defaults(),
            denylist: DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect(),
            metadata_file: METADATA_FILE.to_string(),
            docs_file: DOCS_FILE.to_string(),
            docs_heading: BOOTSTRAP_HEADING.to_string(),
            artifacts,
            verify_commands: VERIFY_COMMANDS
                .iter()
                .map(|command| command.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }
}

/// Returns the running executable as a root-relative path when it is
/// located inside `root`, `None` otherwise.
fn own_executable_under(root: &Path) -> Option<PathBuf> {
    let root = root.canonicalize().ok()?;
    let exe = std::env::current_exe().ok()?.canonicalize().ok()?;
    let relative = exe.strip_prefix(&root).ok()?;
    Some(relative.to_path_buf())
}
