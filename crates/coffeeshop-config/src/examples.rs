// crates/coffeeshop-config/src/examples.rs
// ============================================================================
// Module: Configuration Examples
// Description: Canonical TOML example for the Coffee Shop config file.
// Purpose: Single example reused by docs, schema tests, and the CLI.
// Dependencies: none
// ============================================================================

//! ## Overview
//! One example, kept loadable: integration tests parse and validate this
//! string with the real loader, and the schema tests check it against the
//! generated JSON Schema.

/// Returns the canonical `coffeeshop.toml` example.
#[must_use]
pub const fn config_toml_example() -> &'static str {
    r#"# coffeeshop.toml
# Development defaults for the Coffee Shop application. Every field is
# optional; omitted fields fall back to these values.

production = false
api_server_url = "http://127.0.0.1:5000"

[auth0]
url = "hadi-alnehlawi.eu.auth0.com"
audience = "coffeshop"
client_id = "Edn6kp5ncXj1XslT1NeEVeUR7oakGSG4"
callback_url = "http://localhost:8100"
"#
}
