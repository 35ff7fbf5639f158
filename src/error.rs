//! Error types for SCIM response filtering.
//!
//! This module provides the error hierarchy used by the schema registry and the
//! response filter. Policy decisions that simply drop an attribute are not errors;
//! only a required attribute that resolves to nothing is reported.

use crate::schema::Mutability;

/// Main error type for schema loading and response filtering.
#[derive(Debug, thiserror::Error)]
pub enum ScimError {
    /// Validation errors raised while filtering a response document
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema files could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Schema not found errors
    #[error("Schema not found: {schema_id}")]
    SchemaNotFound { schema_id: String },

    /// Internal errors
    #[error("Internal server error: {message}")]
    Internal { message: String },

    /// Invalid request format or parameters
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

/// Validation errors raised by the response filter.
///
/// A missing required attribute signals a server-side inconsistency between the
/// schema and the stored data, so it is always propagated to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A required attribute resolved to an absent or null value
    #[error("Required '{mutability}' attribute '{attribute}' is missing")]
    RequiredAttributeMissing {
        attribute: String,
        mutability: Mutability,
    },

    /// A required complex attribute became empty once its sub-attributes were filtered
    #[error(
        "The required attribute '{attribute}' was evaluated to an empty during schema validation but the attribute is required '{original}'"
    )]
    RequiredComplexAttributeEmpty {
        attribute: String,
        original: String,
        #[source]
        source: Box<ValidationError>,
    },

    /// The document handed to the filter is not a JSON object
    #[error("Invalid resource: {message}")]
    InvalidResource { message: String },

    /// An attribute name does not resolve against the resource schema
    #[error("Unknown attribute '{attribute}' in resource type '{resource_type}'")]
    UnknownAttribute {
        attribute: String,
        resource_type: String,
    },
}

impl ScimError {
    /// Create a schema not found error
    pub fn schema_not_found(schema_id: impl Into<String>) -> Self {
        Self::SchemaNotFound {
            schema_id: schema_id.into(),
        }
    }

    /// Create an internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

impl ValidationError {
    /// Create a missing required attribute error
    pub fn missing_required(attribute: impl Into<String>, mutability: Mutability) -> Self {
        Self::RequiredAttributeMissing {
            attribute: attribute.into(),
            mutability,
        }
    }

    /// Create an invalid resource error
    pub fn invalid_resource(message: impl Into<String>) -> Self {
        Self::InvalidResource {
            message: message.into(),
        }
    }

    /// Create an unknown attribute error
    pub fn unknown_attribute(attribute: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            attribute: attribute.into(),
            resource_type: resource_type.into(),
        }
    }

    /// The fully qualified name of the attribute this error is about, if any.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Self::RequiredAttributeMissing { attribute, .. }
            | Self::RequiredComplexAttributeEmpty { attribute, .. }
            | Self::UnknownAttribute { attribute, .. } => Some(attribute),
            Self::InvalidResource { .. } => None,
        }
    }
}

// Result type aliases for convenience
pub type ScimResult<T> = Result<T, ScimError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
