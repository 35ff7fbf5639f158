//! Detection of attributes the client sent in its request.
//!
//! An attribute present in the request body is returned even when its
//! `returned` characteristic is `request` or the client asked for a minimal set.

use crate::schema::SchemaAttribute;

use serde_json::Value;

/// Whether `attribute` appears in the client's request document.
///
/// Extension attributes are looked up inside the extension's namespace member
/// when the request has one. Only the first two segments of a dotted name are
/// followed; for a multi-valued parent any element carrying the sub-attribute
/// counts.
pub fn is_present_in_request(attribute: &SchemaAttribute, request: Option<&Value>) -> bool {
    let Some(request) = request else {
        return false;
    };

    let document = attribute
        .resource_uri()
        .and_then(|uri| request.get(uri))
        .unwrap_or(request);

    let mut segments = attribute.scim_node_name().split('.');
    let Some(node) = segments.next().and_then(|first| document.get(first)) else {
        return false;
    };
    let Some(sub_name) = segments.next() else {
        return true;
    };

    match node {
        Value::Array(elements) => elements.iter().any(|element| element.get(sub_name).is_some()),
        other => other.get(sub_name).is_some(),
    }
}
