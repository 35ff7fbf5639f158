//! Schema registry for loading, managing, and resolving SCIM schemas.
//!
//! The registry owns the raw schema documents and knows which schemas make up
//! each resource type. [`SchemaRegistry::resource_schema`] resolves a resource
//! type into the [`ResourceSchema`] the response filter works on.

use super::attribute::ResourceSchema;
use super::embedded;
use super::types::Schema;
use crate::error::{ScimError, ScimResult};

use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const USER_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:User";
pub const GROUP_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:Group";
pub const ENTERPRISE_USER_SCHEMA: &str =
    "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User";

/// Schemas that make up one resource type.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResourceType {
    schema: String,
    extensions: Vec<(String, bool)>,
}

/// Registry for SCIM schemas and resource types.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Schema>,
    resource_types: HashMap<String, ResourceType>,
}

impl SchemaRegistry {
    /// Create a new schema registry with embedded core schemas.
    ///
    /// Registers the `User` resource type (with the optional Enterprise User
    /// extension) and the `Group` resource type.
    pub fn new() -> ScimResult<Self> {
        Self::with_embedded_schemas()
    }

    /// Create a new schema registry with embedded core schemas.
    pub fn with_embedded_schemas() -> ScimResult<Self> {
        let mut registry = Self::default();
        registry.add_schema(Self::load_schema_from_str(embedded::core_user_schema())?);
        registry.add_schema(Self::load_schema_from_str(embedded::core_group_schema())?);
        registry.add_schema(Self::load_schema_from_str(embedded::enterprise_user_schema())?);

        registry.register_resource_type("User", USER_SCHEMA, [(ENTERPRISE_USER_SCHEMA, false)])?;
        registry.register_resource_type("Group", GROUP_SCHEMA, std::iter::empty())?;
        Ok(registry)
    }

    /// Create a schema registry by loading every `*.json` schema in a directory.
    ///
    /// No resource types are registered; call [`register_resource_type`](Self::register_resource_type)
    /// for each resource type the directory describes.
    pub fn from_schema_dir<P: AsRef<Path>>(schema_dir: P) -> ScimResult<Self> {
        let mut registry = Self::default();
        for entry in fs::read_dir(schema_dir.as_ref())? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                let schema = Self::load_schema_from_file(&path)?;
                debug!("Loaded schema '{}' from {}", schema.id, path.display());
                registry.add_schema(schema);
            }
        }
        Ok(registry)
    }

    /// Load a schema from a JSON file.
    fn load_schema_from_file<P: AsRef<Path>>(path: P) -> ScimResult<Schema> {
        let content = fs::read_to_string(&path)?;
        Self::load_schema_from_str(&content)
    }

    /// Load a schema from a JSON string.
    pub fn load_schema_from_str(content: &str) -> ScimResult<Schema> {
        Ok(serde_json::from_str(content)?)
    }

    /// Get all available schemas.
    pub fn get_schemas(&self) -> Vec<&Schema> {
        self.schemas.values().collect()
    }

    /// Get a specific schema by ID.
    pub fn get_schema(&self, id: &str) -> Option<&Schema> {
        self.schemas.get(id)
    }

    /// Add a schema to the registry, replacing any schema with the same id.
    pub fn add_schema(&mut self, schema: Schema) {
        self.schemas.insert(schema.id.clone(), schema);
    }

    /// Register a resource type made of a base schema and `(extension id, required)` pairs.
    ///
    /// All referenced schemas must already be present in the registry.
    pub fn register_resource_type<'a>(
        &mut self,
        name: impl Into<String>,
        schema: &str,
        extensions: impl IntoIterator<Item = (&'a str, bool)>,
    ) -> ScimResult<()> {
        if !self.schemas.contains_key(schema) {
            return Err(ScimError::schema_not_found(schema));
        }
        let extensions = extensions
            .into_iter()
            .map(|(id, required)| {
                if self.schemas.contains_key(id) {
                    Ok((id.to_string(), required))
                } else {
                    Err(ScimError::schema_not_found(id))
                }
            })
            .collect::<ScimResult<Vec<_>>>()?;

        self.resource_types.insert(
            name.into(),
            ResourceType {
                schema: schema.to_string(),
                extensions,
            },
        );
        Ok(())
    }

    /// Names of all registered resource types.
    pub fn resource_type_names(&self) -> Vec<&str> {
        self.resource_types.keys().map(String::as_str).collect()
    }

    /// Resolve a registered resource type into its attribute tree.
    pub fn resource_schema(&self, resource_type: &str) -> ScimResult<ResourceSchema> {
        let definition = self.resource_types.get(resource_type).ok_or_else(|| {
            ScimError::invalid_request(format!("Unknown resource type '{}'", resource_type))
        })?;
        let base = self
            .get_schema(&definition.schema)
            .ok_or_else(|| ScimError::schema_not_found(&definition.schema))?;

        definition.extensions.iter().try_fold(
            ResourceSchema::new(resource_type, base),
            |resolved, (id, required)| {
                let extension = self
                    .get_schema(id)
                    .ok_or_else(|| ScimError::schema_not_found(id))?;
                Ok(resolved.with_extension(extension, *required))
            },
        )
    }
}
