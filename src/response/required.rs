//! Required-attribute enforcement for response documents.

use super::matcher::AttributeSet;
use crate::error::{ValidationError, ValidationResult};
use crate::schema::{Mutability, Returned, SchemaAttribute};
use crate::service_provider::ServiceProviderConfig;

use log::trace;

/// Check that a required attribute is present in a response.
///
/// A missing required attribute is accepted when the client asked for a minimal
/// set that does not name it directly, or explicitly excluded it. Write-only and
/// never-returned attributes are expected to be missing.
pub fn enforce_required(
    attribute: &SchemaAttribute,
    is_null: bool,
    attributes: &AttributeSet<'_>,
    excluded_attributes: &AttributeSet<'_>,
    config: &ServiceProviderConfig,
) -> ValidationResult<()> {
    if !attribute.is_required() || config.ignore_required_attributes_on_response {
        return Ok(());
    }
    if !is_null {
        return Ok(());
    }
    if attribute.mutability() == Mutability::WriteOnly || attribute.returned() == Returned::Never {
        return Ok(());
    }

    if attribute.returned() != Returned::Always && !attributes.is_empty() {
        if attributes.contains(attribute) {
            return Err(missing(attribute));
        }
        trace!(
            "Required attribute '{}' is missing but was not part of the requested minimal set",
            attribute.full_resource_name()
        );
        return Ok(());
    }

    if !excluded_attributes.is_empty() && excluded_attributes.contains(attribute) {
        trace!(
            "Required attribute '{}' is missing but was excluded by the client",
            attribute.full_resource_name()
        );
        return Ok(());
    }

    Err(missing(attribute))
}

fn missing(attribute: &SchemaAttribute) -> ValidationError {
    ValidationError::missing_required(attribute.full_resource_name(), attribute.mutability())
}
