//! Collection and validation of the bootstrap replacement values.
//! Priority per value: command-line argument, then interactive answer,
//! then what can be inferred from the metadata record and git.

use crate::cli::Args;
use crate::config::{BootstrapConfig, Placeholders, DEFAULT_PYTHON_RANGE};
use crate::error::{Error, Result};
use crate::git::{self, ProjectOrigin};
use crate::metadata::{self, ProjectDefaults};
use crate::prompt::Prompter;
use once_cell::sync::Lazy;
use regex::Regex;

static DIST_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?$").expect("valid pattern")
});
static IMPORT_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid pattern"));

/// Replacement values driving a bootstrap run.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapValues {
    pub dist_name: String,
    pub import_name: String,
    pub description: String,
    pub author_name: String,
    pub author_email: String,
    pub repository_url: String,
    pub issues_url: String,
    pub python_range: String,
}

/// Everything that can be inferred without asking the user.
#[derive(Debug, Default, Clone)]
pub struct InferredDefaults {
    pub project: ProjectDefaults,
    pub origin: Option<ProjectOrigin>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
}

impl InferredDefaults {
    /// Gathers defaults from the metadata record and the git repository.
    pub fn gather(config: &BootstrapConfig) -> Self {
        Self {
            project: metadata::project_defaults(&config.root.join(&config.metadata_file)),
            origin: git::discover_origin(&config.root),
            author_name: git::config_value(&config.root, "user.name"),
            author_email: git::config_value(&config.root, "user.email"),
        }
    }
}

/// Derives the import-style name from a distribution name by mapping the
/// `-` and `.` separators to `_`.
pub fn dist_to_import_name(dist_name: &str) -> String {
    dist_name.replace(['-', '.'], "_")
}

/// Validates the replacement pair before any file is touched.
pub fn validate_names(dist_name: &str, import_name: &str) -> Result<()> {
    if !DIST_NAME_PATTERN.is_match(dist_name) {
        return Err(Error::ValidationError(
            "Invalid distribution name. Use letters/numbers and optional '-', '_', '.' separators"
                .to_string(),
        ));
    }

    if !IMPORT_NAME_PATTERN.is_match(import_name) {
        return Err(Error::ValidationError(
            "Invalid import name. Use letters/numbers/underscore, not starting with a number"
                .to_string(),
        ));
    }

    Ok(())
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|s| !s.is_empty()).cloned()
}

fn derived_issues_url(repository_url: &str) -> String {
    if repository_url.is_empty() {
        String::new()
    } else {
        format!("{}/issues", repository_url.trim_end_matches('/'))
    }
}

/// Collects the replacement values from arguments, prompts and inference.
///
/// Interactive mode asks for the distribution and import names with no
/// default shown (an empty answer falls back to the inferred value), then
/// for the remaining fields with their inferred defaults. Non-interactive
/// mode takes arguments and inference only, and fails when no distribution
/// name can be determined at all.
pub fn collect_values(
    args: &Args,
    inferred: &InferredDefaults,
    placeholders: &Placeholders,
    prompter: &dyn Prompter,
    interactive: bool,
) -> Result<BootstrapValues> {
    let origin_name = inferred.origin.as_ref().and_then(|o| o.repo_name.clone());
    let origin_repo_url =
        inferred.origin.as_ref().and_then(|o| o.repository_url.clone());

    // The record's own name is no inference source while it still equals
    // the placeholder.
    let project_name_fallback = match &inferred.project.name {
        Some(name) if name != &placeholders.dist_token => name.clone(),
        _ => String::new(),
    };
    let inferred_dist_name = non_empty(args.name.as_ref())
        .or(origin_name)
        .unwrap_or(project_name_fallback);

    let default_import = non_empty(args.import_name.as_ref()).unwrap_or_else(|| {
        if inferred_dist_name.is_empty() {
            String::new()
        } else {
            dist_to_import_name(&inferred_dist_name)
        }
    });
    let default_description = non_empty(args.description.as_ref())
        .or_else(|| non_empty(inferred.project.description.as_ref()))
        .unwrap_or_default();
    let default_python = non_empty(args.python_range.as_ref())
        .or_else(|| non_empty(inferred.project.requires_python.as_ref()))
        .unwrap_or_else(|| DEFAULT_PYTHON_RANGE.to_string());
    let default_repo = non_empty(args.repository_url.as_ref())
        .or(origin_repo_url)
        .unwrap_or_default();
    let default_author_name = non_empty(args.author_name.as_ref())
        .or_else(|| non_empty(inferred.author_name.as_ref()))
        .unwrap_or_default();
    let default_author_email = non_empty(args.author_email.as_ref())
        .or_else(|| non_empty(inferred.author_email.as_ref()))
        .unwrap_or_default();

    if interactive {
        let mut dist_name = match non_empty(args.name.as_ref()) {
            Some(name) => name,
            None => prompter.ask("Distribution name (e.g. my-package)", "")?,
        };
        if dist_name.is_empty() {
            dist_name = inferred_dist_name;
        }

        let mut import_name = match non_empty(args.import_name.as_ref()) {
            Some(name) => name,
            None => prompter.ask("Import name (e.g. my_package)", "")?,
        };
        if import_name.is_empty() {
            import_name = if dist_name.is_empty() {
                default_import
            } else {
                dist_to_import_name(&dist_name)
            };
        }

        let description = prompter.ask("Description", &default_description)?;
        let author_name = prompter.ask("Author name", &default_author_name)?;
        let author_email = prompter.ask("Author email", &default_author_email)?;
        let repository_url = prompter.ask("Repository URL", &default_repo)?;

        let issues_default = non_empty(args.issues_url.as_ref())
            .unwrap_or_else(|| derived_issues_url(&repository_url));
        let issues_url = prompter.ask("Issues URL", &issues_default)?;
        let python_range = prompter.ask("Python range", &default_python)?;

        Ok(BootstrapValues {
            dist_name,
            import_name,
            description,
            author_name,
            author_email,
            repository_url,
            issues_url,
            python_range,
        })
    } else {
        if inferred_dist_name.is_empty() {
            return Err(Error::ValidationError(
                "Could not infer distribution name. Pass NAME or set the git origin remote"
                    .to_string(),
            ));
        }

        let issues_url = non_empty(args.issues_url.as_ref())
            .unwrap_or_else(|| derived_issues_url(&default_repo));

        Ok(BootstrapValues {
            dist_name: inferred_dist_name,
            import_name: default_import,
            description: default_description,
            author_name: default_author_name,
            author_email: default_author_email,
            repository_url: default_repo,
            issues_url,
            python_range: default_python,
        })
    }
}
