//! SCIM 2.0 response attribute filtering for Rust.
//!
//! Decides, attribute by attribute, what a SCIM service provider puts into a
//! response: it applies the `returned` and `mutability` characteristics of
//! RFC 7643, honors the `attributes` / `excludedAttributes` parameters of
//! RFC 7644, rejects responses that lack required attributes and fills in
//! missing `$ref` links of resource references.
//!
//! # Core Components
//!
//! - [`SchemaRegistry`] - Schema documents and resource types
//! - [`ResponseFilter`] - Visibility policy and resource filtering for one response
//! - [`AttributeSet`] - Resolved `attributes` / `excludedAttributes` parameters
//! - [`ReferenceUrlResolver`] - Builds `$ref` URLs, see [`EndpointConfig`]
//!
//! # Quick Start
//!
//! ```rust
//! use scim_response_filter::{AttributeSet, EndpointConfig, ResponseFilter, SchemaRegistry, ServiceProviderConfig};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let group = SchemaRegistry::new()?.resource_schema("Group")?;
//! let config = ServiceProviderConfig::default();
//! let endpoints = EndpointConfig::new("https://scim.example.com");
//! let resolver = endpoints.resolver(None);
//!
//! let members: AttributeSet = group.find("members").into_iter().collect();
//! let filter = ResponseFilter::new(&config, &resolver).with_attributes(members);
//!
//! let response = filter.filter_resource(&group, json!({
//!     "id": "e9e30dba",
//!     "displayName": "Tour Guides",
//!     "members": [{ "value": "2819c223", "type": "User" }]
//! }))?;
//!
//! assert_eq!(response["members"][0]["$ref"], "https://scim.example.com/v2/Users/2819c223");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod reference;
pub mod response;
pub mod schema;
pub mod service_provider;

// Re-export commonly used types for convenience
pub use error::{ScimError, ScimResult, ValidationError, ValidationResult};
pub use reference::{EndpointConfig, ReferenceUrlResolver, TenantReferenceResolver, TenantStrategy};
pub use response::{AttributeSet, ContextValidator, ResponseFilter};
pub use schema::{ResourceSchema, Schema, SchemaAttribute, SchemaRegistry};
pub use service_provider::ServiceProviderConfig;
