// crates/coffeeshop-config/src/schema.rs
// ============================================================================
// Module: Configuration Schema
// Description: JSON Schema generation for the Coffee Shop config file.
// Purpose: Publish a machine-readable contract kept in sync with the model.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The schema mirrors the serde model in `config.rs`: every field is
//! optional (defaults apply), unknown fields are rejected, and value
//! constraints match the runtime validators. Docs generation reads this
//! schema, so field descriptions live here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::config::MAX_AUDIENCE_LENGTH;
use crate::config::MAX_CLIENT_ID_LENGTH;
use crate::config::MAX_HOSTNAME_LENGTH;
use crate::config::MAX_URL_LENGTH;
use crate::config::default_api_server_url;
use crate::config::default_auth0_audience;
use crate::config::default_auth0_callback_url;
use crate::config::default_auth0_client_id;
use crate::config::default_auth0_url;

// ============================================================================
// SECTION: Schema Root
// ============================================================================

/// Returns the JSON Schema for the Coffee Shop configuration file.
#[must_use]
pub fn config_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "Coffee Shop Configuration",
        "description": "Environment configuration for the Coffee Shop application.",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "production": {
                "type": "boolean",
                "description": "Flag indicating build/deployment mode.",
                "default": false
            },
            "api_server_url": {
                "type": "string",
                "description": "Base address of the backend HTTP service.",
                "pattern": "^https?://",
                "maxLength": MAX_URL_LENGTH,
                "default": default_api_server_url()
            },
            "allow_insecure_http": {
                "type": "boolean",
                "description": "Allow http:// URLs in production mode (explicit opt-in).",
                "default": false
            },
            "auth0": auth0_schema()
        }
    })
}

// ============================================================================
// SECTION: Section Schemas
// ============================================================================

/// Schema for the `[auth0]` identity-provider section.
fn auth0_schema() -> Value {
    json!({
        "type": "object",
        "description": "Identity-provider configuration.",
        "additionalProperties": false,
        "properties": {
            "url": {
                "type": "string",
                "description": "Identity-provider domain (bare hostname, no scheme).",
                "pattern": "^[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)+$",
                "maxLength": MAX_HOSTNAME_LENGTH,
                "default": default_auth0_url()
            },
            "audience": {
                "type": "string",
                "description": "Audience identifier configured for the Auth0 application.",
                "pattern": "^\\S+$",
                "maxLength": MAX_AUDIENCE_LENGTH,
                "default": default_auth0_audience()
            },
            "client_id": {
                "type": "string",
                "description": "Public client identifier generated for the Auth0 application.",
                "pattern": "^[A-Za-z0-9]+$",
                "maxLength": MAX_CLIENT_ID_LENGTH,
                "default": default_auth0_client_id()
            },
            "callback_url": {
                "type": "string",
                "description": "Redirect target after the authentication handshake completes.",
                "pattern": "^https?://",
                "maxLength": MAX_URL_LENGTH,
                "default": default_auth0_callback_url()
            }
        }
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
