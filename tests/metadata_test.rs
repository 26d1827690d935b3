use std::fs;

use christen::metadata::{
    ensure_section, format_authors_line, project_defaults, set_key_in_section,
    toml_quote, update_metadata,
};
use christen::values::BootstrapValues;
use tempfile::TempDir;

const RECORD: &str = "\
[build-system]
requires = [\"hatchling\"]

[project]
name = \"py-template\"
description = \"Template project\"
requires-python = \">=3.11\"
dependencies = []

[dependency-groups]
dev = [\"pytest\"]

[tool.ruff]
line-length = 100
";

fn values() -> BootstrapValues {
    BootstrapValues {
        dist_name: "acme-widget".to_string(),
        import_name: "acme_widget".to_string(),
        description: "A widget".to_string(),
        author_name: "Jake".to_string(),
        author_email: "jake@example.com".to_string(),
        repository_url: "https://github.com/acme/acme-widget".to_string(),
        issues_url: "https://github.com/acme/acme-widget/issues".to_string(),
        python_range: ">=3.12".to_string(),
    }
}

#[test]
fn test_toml_quote() {
    assert_eq!(toml_quote("plain"), "\"plain\"");
    assert_eq!(toml_quote("with \"quotes\""), "\"with \\\"quotes\\\"\"");
    assert_eq!(toml_quote("back\\slash"), "\"back\\\\slash\"");
}

#[test]
fn test_format_authors_line() {
    assert_eq!(format_authors_line("", ""), None);
    assert_eq!(
        format_authors_line("Jake", "").unwrap(),
        "authors = [{ name = \"Jake\" }]"
    );
    assert_eq!(
        format_authors_line("", "jake@example.com").unwrap(),
        "authors = [{ email = \"jake@example.com\" }]"
    );
    assert_eq!(
        format_authors_line("Jake", "jake@example.com").unwrap(),
        "authors = [{ name = \"Jake\", email = \"jake@example.com\" }]"
    );
}

#[test]
fn test_set_key_replaces_only_the_target_line() {
    let updated =
        set_key_in_section(RECORD, "project", "name", "name = \"acme-widget\"").unwrap();

    assert!(updated.contains("name = \"acme-widget\"\n"));
    assert!(!updated.contains("name = \"py-template\""));
    // Every byte outside the replaced line is untouched.
    let expected = RECORD.replace("name = \"py-template\"", "name = \"acme-widget\"");
    assert_eq!(updated, expected);
}

#[test]
fn test_set_key_appends_when_missing() {
    let updated =
        set_key_in_section(RECORD, "project", "license", "license = \"MIT\"").unwrap();

    let project_start = updated.find("[project]").unwrap();
    let groups_start = updated.find("[dependency-groups]").unwrap();
    let license_start = updated.find("license = \"MIT\"").unwrap();
    assert!(project_start < license_start && license_start < groups_start);
}

#[test]
fn test_set_key_missing_section_is_an_error() {
    let err = set_key_in_section(RECORD, "nonexistent", "key", "key = 1").unwrap_err();
    assert!(err.to_string().contains("missing section [nonexistent]"));
}

#[test]
fn test_set_key_value_with_dollar_sign() {
    let updated = set_key_in_section(
        RECORD,
        "project",
        "description",
        "description = \"costs $1\"",
    )
    .unwrap();
    assert!(updated.contains("description = \"costs $1\"\n"));
}

#[test]
fn test_ensure_section_inserts_before_anchor() {
    let updated = ensure_section(RECORD, "project.urls", Some("dependency-groups")).unwrap();

    let urls_start = updated.find("[project.urls]").unwrap();
    let groups_start = updated.find("[dependency-groups]").unwrap();
    assert!(urls_start < groups_start);

    // Already present: no change.
    let again = ensure_section(&updated, "project.urls", Some("dependency-groups")).unwrap();
    assert_eq!(again, updated);
}

#[test]
fn test_ensure_section_appends_without_anchor() {
    let updated = ensure_section(RECORD, "project.urls", Some("not-there")).unwrap();
    assert!(updated.trim_end().ends_with("[project.urls]"));
}

#[test]
fn test_update_metadata_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pyproject.toml");
    fs::write(&path, RECORD).unwrap();

    update_metadata(&path, &values()).unwrap();
    let updated = fs::read_to_string(&path).unwrap();

    assert!(updated.contains("name = \"acme-widget\"\n"));
    assert!(updated.contains("description = \"A widget\"\n"));
    assert!(updated.contains("requires-python = \">=3.12\"\n"));
    assert!(updated
        .contains("authors = [{ name = \"Jake\", email = \"jake@example.com\" }]\n"));
    assert!(updated
        .contains("Repository = \"https://github.com/acme/acme-widget\"\n"));
    assert!(updated
        .contains("Issues = \"https://github.com/acme/acme-widget/issues\"\n"));

    // The urls section sits ahead of the dependency groups.
    let urls_start = updated.find("[project.urls]").unwrap();
    let groups_start = updated.find("[dependency-groups]").unwrap();
    assert!(urls_start < groups_start);

    // Sections this run does not target are byte-identical.
    assert!(updated.contains("[build-system]\nrequires = [\"hatchling\"]\n"));
    assert!(updated.contains("[tool.ruff]\nline-length = 100\n"));
    assert!(updated.contains("dependencies = []\n"));
}

#[test]
fn test_update_metadata_without_urls() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pyproject.toml");
    fs::write(&path, RECORD).unwrap();

    let mut values = values();
    values.repository_url = String::new();
    values.issues_url = String::new();
    update_metadata(&path, &values).unwrap();

    let updated = fs::read_to_string(&path).unwrap();
    assert!(!updated.contains("[project.urls]"));
}

#[test]
fn test_update_metadata_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pyproject.toml");

    let err = update_metadata(&path, &values()).unwrap_err();
    assert!(err.to_string().contains("pyproject.toml"));
}

#[test]
fn test_project_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pyproject.toml");
    fs::write(&path, RECORD).unwrap();

    let defaults = project_defaults(&path);
    assert_eq!(defaults.name.as_deref(), Some("py-template"));
    assert_eq!(defaults.description.as_deref(), Some("Template project"));
    assert_eq!(defaults.requires_python.as_deref(), Some(">=3.11"));

    // Missing record: empty defaults, no error.
    let missing = project_defaults(&temp_dir.path().join("absent.toml"));
    assert_eq!(missing.name, None);
}
