// crates/coffeeshop-config/tests/config_artifacts.rs
// ============================================================================
// Module: Config Artifact Tests
// Description: Integration tests for committed configuration artifacts.
// Purpose: Fail CI when the committed reference drifts from the generators.
// Dependencies: coffeeshop-config
// ============================================================================

//! Committed artifact drift tests for coffeeshop-config.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test fixtures use explicit asserts and unwraps for clarity."
)]

use std::path::Path;
use std::path::PathBuf;

use coffeeshop_config::DOCS_PATH;
use coffeeshop_config::EnvironmentConfig;
use coffeeshop_config::config_docs_markdown;
use coffeeshop_config::config_toml_example;
use coffeeshop_config::verify_config_docs;

/// Resolves the workspace root from the crate manifest directory.
fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

#[test]
fn committed_docs_match_generated_output() {
    let path = workspace_root().join(DOCS_PATH);
    verify_config_docs(Some(&path)).expect("committed configuration reference must be current");
}

#[test]
fn generated_docs_embed_canonical_example() {
    let markdown = config_docs_markdown().expect("docs should render");
    assert!(markdown.contains(config_toml_example()), "docs must embed the TOML example");
}

#[test]
fn canonical_example_loads_and_validates() {
    let config: EnvironmentConfig =
        toml::from_str(config_toml_example()).expect("example must parse");
    config.validate().expect("example must validate");
}
