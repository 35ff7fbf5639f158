//! Generic walk over an attribute value guided by its schema.
//!
//! The walker knows how simple, complex and multi-valued complex attributes are
//! shaped; what to keep is decided by a [`ContextValidator`] consulted once per
//! attribute node before its children are visited.

use crate::error::ValidationResult;
use crate::schema::SchemaAttribute;

use serde_json::{Map, Value};

/// Per-attribute policy consulted by [`validate_node`].
pub trait ContextValidator {
    /// Decide whether `attribute` is kept. The value may be adjusted in place
    /// before the walker descends into it.
    fn validate_context(
        &self,
        attribute: &SchemaAttribute,
        value: Option<&mut Value>,
    ) -> ValidationResult<bool>;
}

/// Walk `value` as an instance of `attribute`, returning the filtered copy.
///
/// Complex values are rebuilt from their declared sub-attributes only; objects
/// and arrays that end up empty are reported as `None`.
pub fn validate_node(
    attribute: &SchemaAttribute,
    mut value: Option<Value>,
    validator: &dyn ContextValidator,
) -> ValidationResult<Option<Value>> {
    if !validator.validate_context(attribute, value.as_mut())? {
        return Ok(None);
    }
    let Some(value) = value else {
        return Ok(None);
    };
    if value.is_null() {
        return Ok(None);
    }
    if !attribute.is_complex() {
        return Ok(Some(value));
    }

    match value {
        Value::Array(elements) if attribute.is_multi_valued() => {
            let mut kept = Vec::with_capacity(elements.len());
            for element in elements {
                if let Some(filtered) = validate_complex_object(attribute, element, validator)? {
                    kept.push(filtered);
                }
            }
            Ok((!kept.is_empty()).then_some(Value::Array(kept)))
        }
        other => validate_complex_object(attribute, other, validator),
    }
}

fn validate_complex_object(
    attribute: &SchemaAttribute,
    value: Value,
    validator: &dyn ContextValidator,
) -> ValidationResult<Option<Value>> {
    let mut object = match value {
        Value::Object(object) => object,
        // not shaped like a complex value; type validation happens elsewhere
        other => return Ok(Some(other)),
    };

    let mut filtered = Map::new();
    for sub_attribute in attribute.sub_attributes() {
        let child = take_member(&mut object, sub_attribute.name());
        if let Some(kept) = validate_node(sub_attribute, child, validator)? {
            filtered.insert(sub_attribute.name().to_string(), kept);
        }
    }

    Ok((!filtered.is_empty()).then_some(Value::Object(filtered)))
}

/// Remove the member called `name`, ignoring ASCII case as SCIM attribute names
/// do. An exact match wins over a case-insensitive one.
pub(crate) fn take_member(object: &mut Map<String, Value>, name: &str) -> Option<Value> {
    if let Some(value) = object.remove(name) {
        return Some(value);
    }
    let key = object
        .keys()
        .find(|key| key.eq_ignore_ascii_case(name))?
        .clone();
    object.remove(&key)
}
