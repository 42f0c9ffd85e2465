// crates/coffeeshop-config/src/docs.rs
// ============================================================================
// Module: Configuration Docs
// Description: Markdown reference generation for the Coffee Shop config file.
// Purpose: Keep the committed config reference in lockstep with the schema.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The configuration reference is generated from [`config_schema`] and
//! committed at `docs/configuration/coffeeshop.toml.md`. `generate` renders
//! the markdown, `write` persists it, and `verify` fails when the committed
//! file has drifted from the schema.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::examples::config_toml_example;
use crate::schema::config_schema;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Repository-relative path of the committed configuration reference.
pub const DOCS_PATH: &str = "docs/configuration/coffeeshop.toml.md";

/// Documented sections in render order.
const SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        title: "Top-level settings",
        intro: "Settings at the root of `coffeeshop.toml`.",
        path: &[],
        fields: &["production", "api_server_url", "allow_insecure_http"],
    },
    SectionSpec {
        title: "`[auth0]` section",
        intro: "Auth0 tenant settings used by the frontend login flow.",
        path: &["auth0"],
        fields: &["url", "audience", "client_id", "callback_url"],
    },
];

// ============================================================================
// SECTION: Types
// ============================================================================

/// One documented section of the configuration file.
struct SectionSpec {
    /// Section heading.
    title: &'static str,
    /// One-line section introduction.
    intro: &'static str,
    /// Schema path to the section object (empty for the root).
    path: &'static [&'static str],
    /// Field names in documented order.
    fields: &'static [&'static str],
}

/// Documentation generation or verification errors.
#[derive(Debug, Error)]
pub enum DocsError {
    /// I/O failure while reading or writing the docs file.
    #[error("docs io error: {0}")]
    Io(String),
    /// Schema shape did not match the documented sections.
    #[error("docs schema error: {0}")]
    Schema(String),
    /// Committed docs no longer match the generated output.
    #[error("docs drift: {0}")]
    Drift(String),
}

// ============================================================================
// SECTION: Generation
// ============================================================================

/// Renders the configuration reference markdown from the schema.
///
/// # Errors
///
/// Returns [`DocsError::Schema`] when the schema is missing a documented
/// section or field.
pub fn config_docs_markdown() -> Result<String, DocsError> {
    let schema = config_schema();
    let mut out = String::new();
    out.push_str("# Coffee Shop configuration reference\n\n");
    out.push_str(
        "Generated from the configuration schema. Do not edit by hand; run\n\
         `coffeeshop docs generate` after changing the configuration model.\n\n",
    );
    for section in SECTIONS {
        render_section(&schema, section, &mut out)?;
    }
    out.push_str("## Example\n\n");
    out.push_str("```toml\n");
    out.push_str(config_toml_example());
    out.push_str("```\n");
    Ok(out)
}

/// Writes the configuration reference to `path` (or [`DOCS_PATH`]).
///
/// # Errors
///
/// Returns [`DocsError`] when generation or writing fails.
pub fn write_config_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let markdown = config_docs_markdown()?;
    let target = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| DocsError::Io(err.to_string()))?;
        }
    }
    fs::write(target, markdown).map_err(|err| DocsError::Io(err.to_string()))
}

/// Verifies the committed reference at `path` (or [`DOCS_PATH`]) is current.
///
/// # Errors
///
/// Returns [`DocsError::Drift`] when the committed file differs from the
/// generated output.
pub fn verify_config_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let markdown = config_docs_markdown()?;
    let target = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let committed = fs::read_to_string(target).map_err(|err| DocsError::Io(err.to_string()))?;
    if committed != markdown {
        return Err(DocsError::Drift(format!(
            "{} is out of date; run `coffeeshop docs generate`",
            target.display()
        )));
    }
    Ok(())
}

// ============================================================================
// SECTION: Rendering Helpers
// ============================================================================

/// Renders one section heading plus its field table.
fn render_section(schema: &Value, section: &SectionSpec, out: &mut String) -> Result<(), DocsError> {
    let properties = section_properties(schema, section)?;
    out.push_str(&format!("## {}\n\n", section.title));
    out.push_str(section.intro);
    out.push_str("\n\n");
    out.push_str("| Field | Type | Default | Description |\n");
    out.push_str("| --- | --- | --- | --- |\n");
    for field in section.fields {
        let spec = properties.get(*field).ok_or_else(|| {
            DocsError::Schema(format!("schema missing field {} in {}", field, section.title))
        })?;
        out.push_str(&render_field_row(field, spec));
    }
    out.push('\n');
    Ok(())
}

/// Resolves the `properties` object for a section path.
fn section_properties<'a>(
    schema: &'a Value,
    section: &SectionSpec,
) -> Result<&'a serde_json::Map<String, Value>, DocsError> {
    let mut node = schema;
    for segment in section.path {
        node = &node["properties"][*segment];
    }
    node["properties"].as_object().ok_or_else(|| {
        DocsError::Schema(format!("schema missing properties for {}", section.title))
    })
}

/// Renders one markdown table row for a field.
fn render_field_row(name: &str, spec: &Value) -> String {
    let field_type = spec["type"].as_str().unwrap_or("object");
    let default = match &spec["default"] {
        Value::Null => "—".to_string(),
        Value::String(text) => format!("`\"{text}\"`"),
        other => format!("`{other}`"),
    };
    let description = spec["description"].as_str().unwrap_or("");
    format!("| `{name}` | {field_type} | {default} | {description} |\n")
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use super::*;

    #[test]
    fn docs_render_without_schema_errors() {
        let markdown = config_docs_markdown().expect("docs should render");
        assert!(markdown.starts_with("# Coffee Shop configuration reference"));
    }

    #[test]
    fn docs_contain_every_documented_field() {
        let markdown = config_docs_markdown().unwrap();
        for field in [
            "production",
            "api_server_url",
            "allow_insecure_http",
            "url",
            "audience",
            "client_id",
            "callback_url",
        ] {
            assert!(markdown.contains(&format!("| `{field}` |")), "docs missing field {field}");
        }
    }

    #[test]
    fn docs_embed_the_toml_example() {
        let markdown = config_docs_markdown().unwrap();
        assert!(markdown.contains(config_toml_example()), "docs should embed the TOML example");
    }

    #[test]
    fn write_then_verify_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coffeeshop.toml.md");
        write_config_docs(Some(&path)).expect("write should succeed");
        verify_config_docs(Some(&path)).expect("freshly written docs should verify");
    }

    #[test]
    fn verify_detects_drift() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coffeeshop.toml.md");
        fs::write(&path, "stale contents\n").unwrap();
        let result = verify_config_docs(Some(&path));
        assert!(matches!(result, Err(DocsError::Drift(_))), "stale docs should report drift");
    }

    #[test]
    fn verify_reports_missing_file_as_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.md");
        let result = verify_config_docs(Some(&path));
        assert!(matches!(result, Err(DocsError::Io(_))), "missing docs should report io error");
    }
}
