// crates/coffeeshop-config/src/lib.rs
// ============================================================================
// Module: Coffee Shop Config Library
// Description: Canonical config model, validation, and artifact generation.
// Purpose: Single source of truth for coffeeshop.toml semantics.
// Dependencies: serde, serde_json, thiserror, toml, url
// ============================================================================

//! ## Overview
//! `coffeeshop-config` defines the canonical environment configuration for
//! the Coffee Shop application: the API server base URL and the Auth0
//! identity-provider settings (domain, audience, client id, callback URL).
//! It provides strict, fail-closed validation and deterministic generators
//! for the config schema, example, and docs.
//!
//! The record is loaded once at startup and passed by reference to whatever
//! components need it; nothing in this crate mutates a loaded config.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod docs;
pub mod examples;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use docs::DOCS_PATH;
pub use docs::DocsError;
pub use docs::config_docs_markdown;
pub use docs::verify_config_docs;
pub use docs::write_config_docs;
pub use examples::config_toml_example;
pub use schema::config_schema;
