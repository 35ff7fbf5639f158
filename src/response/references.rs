//! Filling in missing `$ref` members of complex reference attributes.

use crate::reference::ReferenceUrlResolver;
use crate::schema::SchemaAttribute;
use crate::schema::attribute::{REF, TYPE, VALUE};

use log::debug;
use serde_json::{Map, Value};

/// Set `$ref` on every object of a complex attribute that lacks one.
///
/// Applies only when the attribute declares a `$ref` sub-attribute referencing
/// `resource`. The resource id is read from `value` and the resource type from
/// `type`; objects missing either, or whose reference the resolver cannot build,
/// are left untouched. Existing non-null `$ref` values are never replaced.
pub fn inject_reference_urls(
    attribute: &SchemaAttribute,
    value: &mut Value,
    resolver: &dyn ReferenceUrlResolver,
) {
    if !attribute
        .sub_attributes()
        .iter()
        .any(SchemaAttribute::is_resource_reference)
    {
        return;
    }

    match value {
        Value::Array(elements) if attribute.is_multi_valued() => {
            for element in elements.iter_mut() {
                if let Value::Object(object) = element {
                    inject_into_object(attribute, object, resolver);
                }
            }
        }
        Value::Object(object) => inject_into_object(attribute, object, resolver),
        _ => {}
    }
}

fn inject_into_object(
    attribute: &SchemaAttribute,
    object: &mut Map<String, Value>,
    resolver: &dyn ReferenceUrlResolver,
) {
    if object.get(REF).is_some_and(|reference| !reference.is_null()) {
        return;
    }

    let (Some(value_attribute), Some(type_attribute)) =
        (attribute.sub_attribute(VALUE), attribute.sub_attribute(TYPE))
    else {
        return;
    };

    let Some(resource_id) = non_blank_text(object, value_attribute.name()) else {
        return;
    };
    let Some(resource_type) = non_blank_text(object, type_attribute.name()) else {
        return;
    };

    let Some(url) = resolver.resolve(resource_id, resource_type) else {
        return;
    };

    debug!(
        "Setting '{}' of '{}' to '{}'",
        REF,
        attribute.full_resource_name(),
        url
    );
    object.insert(REF.to_string(), Value::String(url));
}

fn non_blank_text<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    object
        .get(name)
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
}
