//! Common test utilities for response filtering tests.

use scim_response_filter::{AttributeSet, ResourceSchema, Schema, SchemaRegistry};
use serde_json::json;
use std::sync::Once;

static LOGGER: Once = Once::new();

/// Route `log` output through env_logger so `RUST_LOG=debug cargo test` shows decisions.
pub fn init_logging() {
    LOGGER.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .is_test(true)
            .try_init();
    });
}

pub fn user_schema() -> ResourceSchema {
    SchemaRegistry::new()
        .expect("embedded schemas load")
        .resource_schema("User")
        .expect("User is registered")
}

pub fn group_schema() -> ResourceSchema {
    SchemaRegistry::new()
        .expect("embedded schemas load")
        .resource_schema("Group")
        .expect("Group is registered")
}

/// A resource type covering every combination the policy distinguishes.
pub fn policy_schema() -> ResourceSchema {
    let base: Schema = serde_json::from_value(json!({
        "id": "urn:example:params:scim:schemas:Policy",
        "name": "Policy",
        "attributes": [
            { "name": "id", "type": "string", "mutability": "readOnly", "returned": "always" },
            { "name": "userName", "type": "string", "required": true },
            { "name": "nickName", "type": "string" },
            {
                "name": "password",
                "type": "string",
                "required": true,
                "mutability": "writeOnly",
                "returned": "never"
            },
            { "name": "secretHint", "type": "string", "returned": "never" },
            { "name": "pin", "type": "string", "mutability": "writeOnly" },
            { "name": "emails", "type": "string", "multiValued": true, "returned": "request" },
            { "name": "serial", "type": "string", "required": true, "returned": "always" },
            { "name": "badge", "type": "string", "required": true, "returned": "request" },
            {
                "name": "name",
                "type": "complex",
                "subAttributes": [
                    { "name": "givenName", "type": "string" },
                    { "name": "familyName", "type": "string" }
                ]
            },
            {
                "name": "address",
                "type": "complex",
                "required": true,
                "subAttributes": [
                    { "name": "street", "type": "string" },
                    { "name": "secretCode", "type": "string", "returned": "never" }
                ]
            },
            {
                "name": "manager",
                "type": "complex",
                "subAttributes": [
                    { "name": "value", "type": "string" },
                    { "name": "$ref", "type": "reference", "referenceTypes": ["resource", "User", "Group"] },
                    { "name": "type", "type": "string" },
                    { "name": "displayName", "type": "string" }
                ]
            }
        ]
    }))
    .expect("policy schema is valid");

    let extension: Schema = serde_json::from_value(json!({
        "id": "urn:example:params:scim:schemas:extension:Badge",
        "name": "Badge",
        "attributes": [
            { "name": "level", "type": "integer", "returned": "request" },
            { "name": "issuer", "type": "string" }
        ]
    }))
    .expect("extension schema is valid");

    ResourceSchema::new("Policy", &base).with_extension(&extension, false)
}

/// Resolve node names against `schema` into an attribute set.
pub fn set<'a>(schema: &'a ResourceSchema, names: &[&str]) -> AttributeSet<'a> {
    AttributeSet::resolve(schema, names.iter().copied())
        .unwrap_or_else(|error| panic!("{}", error))
}

/// Resolver building `https://api/<Type>s/<id>`.
pub fn api_resolver(resource_id: &str, resource_type: &str) -> Option<String> {
    Some(format!("https://api/{}s/{}", resource_type, resource_id))
}

/// Resolver that never knows a URL.
pub fn no_resolver(_resource_id: &str, _resource_type: &str) -> Option<String> {
    None
}
