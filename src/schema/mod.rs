//! Schema definitions for SCIM resources.
//!
//! This module provides the schema registry and the resolved attribute tree the
//! response filter evaluates, following the RFC 7643 schema model.
//!
//! # Key Types
//!
//! - [`Schema`] - SCIM schema document with attributes and metadata
//! - [`SchemaRegistry`] - Registry for schemas and resource types
//! - [`SchemaAttribute`] - Attribute resolved against its schema and parent
//! - [`ResourceSchema`] - Base schema plus extensions of one resource type
//!
//! # Examples
//!
//! ```rust
//! use scim_response_filter::schema::SchemaRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let user = registry.resource_schema("User")?;
//! let given_name = user.find("name.givenName").expect("declared by the core schema");
//! assert_eq!(
//!     given_name.parent(),
//!     Some("urn:ietf:params:scim:schemas:core:2.0:User:name")
//! );
//! # Ok(())
//! # }
//! ```

pub mod attribute;
pub mod embedded;
pub mod registry;
pub mod types;


// Re-export the main types for convenience
pub use attribute::{ResourceSchema, SchemaAttribute, SchemaExtension};
pub use registry::SchemaRegistry;
pub use types::{
    AttributeDefinition, AttributeType, Mutability, ReferenceType, Returned, Schema, Uniqueness,
};
