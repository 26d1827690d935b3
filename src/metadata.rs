//! Metadata record handling.
//! Reading goes through the toml parser; writing is textual section/key
//! editing so every byte outside the targeted fields survives unchanged.

use crate::error::{Error, Result};
use crate::values::BootstrapValues;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use serde::Deserialize;
use std::fs;
use std::path::Path;

static NEXT_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\[").expect("valid pattern"));

/// `[project]` fields consulted for prompt defaults.
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
pub struct ProjectDefaults {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "requires-python")]
    pub requires_python: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MetadataDoc {
    project: Option<ProjectDefaults>,
}

/// Reads prompt defaults from the metadata record.
/// A missing or unparseable record yields empty defaults; the record is
/// only required once the update step actually rewrites it.
pub fn project_defaults(path: &Path) -> ProjectDefaults {
    let Ok(text) = fs::read_to_string(path) else {
        return ProjectDefaults::default();
    };
    toml::from_str::<MetadataDoc>(&text)
        .ok()
        .and_then(|doc| doc.project)
        .unwrap_or_default()
}

/// Quotes a value as a TOML basic string.
pub fn toml_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Formats the `[project]` authors line, or `None` when both parts are empty.
pub fn format_authors_line(author_name: &str, author_email: &str) -> Option<String> {
    if author_name.is_empty() && author_email.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    if !author_name.is_empty() {
        parts.push(format!("name = {}", toml_quote(author_name)));
    }
    if !author_email.is_empty() {
        parts.push(format!("email = {}", toml_quote(author_email)));
    }

    Some(format!("authors = [{{ {} }}]", parts.join(", ")))
}

/// Byte span of the body of `[section]`: from the end of the header line
/// to the start of the next section header (or end of input).
fn section_span(text: &str, section: &str) -> Result<Option<(usize, usize)>> {
    let header = Regex::new(&format!(r"(?m)^\[{}\]\r?\n", regex::escape(section)))
        .map_err(|e| Error::MetadataError(format!("bad section pattern: {}", e)))?;

    let Some(header_match) = header.find(text) else {
        return Ok(None);
    };
    let start = header_match.end();
    let end = NEXT_SECTION
        .find_at(text, start)
        .map(|m| m.start())
        .unwrap_or(text.len());
    Ok(Some((start, end)))
}

/// Replaces the first `key = …` line inside `[section]` with `line`, or
/// appends `line` to the section body when the key is absent.
pub fn set_key_in_section(
    text: &str,
    section: &str,
    key: &str,
    line: &str,
) -> Result<String> {
    let (start, end) = section_span(text, section)?
        .ok_or_else(|| Error::MetadataError(format!("missing section [{}]", section)))?;

    let body = &text[start..end];
    let key_pattern = Regex::new(&format!(r"(?m)^{}\s*=.*$", regex::escape(key)))
        .map_err(|e| Error::MetadataError(format!("bad key pattern: {}", e)))?;

    let new_body = if key_pattern.is_match(body) {
        key_pattern.replace(body, NoExpand(line)).into_owned()
    } else {
        let mut body = body.to_string();
        if !body.is_empty() && !body.ends_with('\n') {
            body.push('\n');
        }
        body.push_str(line);
        body.push('\n');
        body
    };

    Ok(format!("{}{}{}", &text[..start], new_body, &text[end..]))
}

/// Ensures `[section]` exists, inserting it before `[before]` when given
/// and present, otherwise appending it at the end of the document.
pub fn ensure_section(text: &str, section: &str, before: Option<&str>) -> Result<String> {
    if section_span(text, section)?.is_some() {
        return Ok(text.to_string());
    }

    let new_section = format!("\n[{}]\n", section);
    if let Some(before) = before {
        let anchor = Regex::new(&format!(r"(?m)^\[{}\]\r?\n", regex::escape(before)))
            .map_err(|e| Error::MetadataError(format!("bad section pattern: {}", e)))?;
        if let Some(anchor_match) = anchor.find(text) {
            let head = format!("{}\n", text[..anchor_match.start()].trim_end());
            let tail = &text[anchor_match.start()..];
            return Ok(format!("{}{}\n{}", head, new_section, tail));
        }
    }

    Ok(format!("{}{}", text.trim_end(), new_section))
}

/// Rewrites the targeted `[project]` fields from the collected values and
/// writes the record back, leaving every other byte untouched.
pub fn update_metadata(path: &Path, values: &BootstrapValues) -> Result<()> {
    let mut text = fs::read_to_string(path).map_err(|e| Error::PathIoError {
        path: path.display().to_string(),
        source: e,
    })?;

    for (key, value) in [
        ("name", &values.dist_name),
        ("description", &values.description),
        ("requires-python", &values.python_range),
    ] {
        let line = format!("{} = {}", key, toml_quote(value));
        text = set_key_in_section(&text, "project", key, &line)?;
    }

    if let Some(authors_line) = format_authors_line(&values.author_name, &values.author_email)
    {
        text = set_key_in_section(&text, "project", "authors", &authors_line)?;
    }

    if !values.repository_url.is_empty() || !values.issues_url.is_empty() {
        text = ensure_section(&text, "project.urls", Some("dependency-groups"))?;
        if !values.repository_url.is_empty() {
            let line = format!("Repository = {}", toml_quote(&values.repository_url));
            text = set_key_in_section(&text, "project.urls", "Repository", &line)?;
        }
        if !values.issues_url.is_empty() {
            let line = format!("Issues = {}", toml_quote(&values.issues_url));
            text = set_key_in_section(&text, "project.urls", "Issues", &line)?;
        }
    }

    fs::write(path, text).map_err(|e| Error::PathIoError {
        path: path.display().to_string(),
        source: e,
    })
}
