//! Response-context filtering of SCIM resources.
//!
//! When a resource is serialized into a response, every attribute is run through
//! the visibility policy of RFC 7643 Section 7 combined with the client's
//! `attributes` / `excludedAttributes` parameters (RFC 7644 Section 3.9):
//!
//! - `writeOnly` and `returned: never` attributes are always removed
//! - a required attribute that is missing fails with
//!   [`ValidationError::RequiredAttributeMissing`] unless the client asked for a
//!   minimal set without it or excluded it
//! - `returned: always` attributes survive any parameter
//! - `returned: request` attributes need to be requested or echoed from the request body
//! - `returned: default` attributes follow the parameters, except that a required
//!   attribute is not silently lost to a minimal set
//!
//! Complex attributes that survive get missing `$ref` members filled in through a
//! [`ReferenceUrlResolver`].
//!
//! # Examples
//!
//! ```rust
//! use scim_response_filter::response::ResponseFilter;
//! use scim_response_filter::schema::SchemaRegistry;
//! use scim_response_filter::ServiceProviderConfig;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let user = SchemaRegistry::new()?.resource_schema("User")?;
//! let config = ServiceProviderConfig::default();
//! let resolver = |id: &str, kind: &str| Some(format!("https://example.com/v2/{}s/{}", kind, id));
//!
//! let filter = ResponseFilter::new(&config, &resolver);
//! let response = filter.filter_resource(&user, json!({
//!     "schemas": ["urn:ietf:params:scim:schemas:core:2.0:User"],
//!     "id": "2819c223",
//!     "userName": "bjensen",
//!     "password": "t1meMa$heen"
//! }))?;
//!
//! assert!(response.get("password").is_none());
//! assert_eq!(response["userName"], "bjensen");
//! # Ok(())
//! # }
//! ```

pub mod echo;
pub mod matcher;
pub mod references;
pub mod required;
pub mod walker;

pub use echo::is_present_in_request;
pub use matcher::AttributeSet;
pub use references::inject_reference_urls;
pub use required::enforce_required;
pub use walker::{ContextValidator, validate_node};

use walker::take_member;

use crate::error::{ValidationError, ValidationResult};
use crate::reference::ReferenceUrlResolver;
use crate::schema::{Mutability, ResourceSchema, Returned, SchemaAttribute};
use crate::service_provider::ServiceProviderConfig;

use log::debug;
use serde_json::{Map, Value};

/// Name of the member listing a resource's schema URIs.
const SCHEMAS: &str = "schemas";

/// Filters resources for one response.
///
/// Holds the read-only inputs of a single filtering pass; the filter itself
/// keeps no state between calls.
pub struct ResponseFilter<'a> {
    config: &'a ServiceProviderConfig,
    resolver: &'a dyn ReferenceUrlResolver,
    attributes: AttributeSet<'a>,
    excluded_attributes: AttributeSet<'a>,
    request: Option<&'a Value>,
}

impl std::fmt::Debug for ResponseFilter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseFilter")
            .field("config", &self.config)
            .field("attributes", &self.attributes)
            .field("excluded_attributes", &self.excluded_attributes)
            .field("request", &self.request.is_some())
            .finish()
    }
}

impl<'a> ResponseFilter<'a> {
    pub fn new(config: &'a ServiceProviderConfig, resolver: &'a dyn ReferenceUrlResolver) -> Self {
        Self {
            config,
            resolver,
            attributes: AttributeSet::new(),
            excluded_attributes: AttributeSet::new(),
            request: None,
        }
    }

    /// Attributes named by the `attributes` parameter.
    pub fn with_attributes(mut self, attributes: AttributeSet<'a>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Attributes named by the `excludedAttributes` parameter.
    pub fn with_excluded_attributes(mut self, excluded_attributes: AttributeSet<'a>) -> Self {
        self.excluded_attributes = excluded_attributes;
        self
    }

    /// The body the client sent, if the operation had one.
    pub fn with_request_document(mut self, request: &'a Value) -> Self {
        self.request = Some(request);
        self
    }

    /// Decide whether `attribute` is emitted in the response.
    ///
    /// Returns `Ok(false)` when the attribute is dropped. When a complex attribute
    /// is kept, missing `$ref` members of `value` are filled in.
    pub fn is_returned(
        &self,
        attribute: &SchemaAttribute,
        value: Option<&mut Value>,
    ) -> ValidationResult<bool> {
        let name = attribute.full_resource_name();

        if attribute.mutability() == Mutability::WriteOnly || attribute.returned() == Returned::Never {
            if value.as_deref().is_some_and(|v| !v.is_null()) {
                debug!(
                    "Removing attribute '{}' from document due to its definition of mutability '{}' and returned '{}'",
                    name,
                    attribute.mutability(),
                    attribute.returned()
                );
            }
            return Ok(false);
        }

        let is_null = value.as_deref().is_none_or(Value::is_null);
        self.enforce_required(attribute, is_null)?;

        let Some(value) = value.filter(|v| !v.is_null()) else {
            return Ok(false);
        };

        let keep = self.is_visible(attribute);
        if keep && attribute.is_complex() {
            inject_reference_urls(attribute, value, self.resolver);
        }
        Ok(keep)
    }

    /// Steps of the policy that only apply to present values.
    fn is_visible(&self, attribute: &SchemaAttribute) -> bool {
        let name = attribute.full_resource_name();
        let returned = attribute.returned();

        if returned == Returned::Always {
            return true;
        }

        let attributes_used = !self.attributes.is_empty();
        let is_requested = (attributes_used && self.attributes.matches_requested(attribute))
            || is_present_in_request(attribute, self.request);

        if returned == Returned::Request && !is_requested {
            debug!(
                "Removing attribute '{}' from response. Returned value is '{}' and it was not present in the clients request",
                name, returned
            );
            return false;
        }

        let is_excluded = !self.excluded_attributes.is_empty()
            && self.excluded_attributes.matches_excluded(attribute);

        if returned == Returned::Default && attributes_used && !is_requested {
            if attribute.is_required() && !is_excluded {
                return true;
            }
            debug!(
                "Removing attribute '{}' from response. Param 'attributes' was used, the returned value is '{}' and the attribute is not directly requested",
                name, returned
            );
            return false;
        }

        if is_excluded {
            debug!(
                "Removing attribute '{}' from response. Attribute is present in the list of 'excludedAttributes'",
                name
            );
            return false;
        }

        true
    }

    /// Run the required-attribute check with this pass's parameters.
    pub fn enforce_required(&self, attribute: &SchemaAttribute, is_null: bool) -> ValidationResult<()> {
        enforce_required(
            attribute,
            is_null,
            &self.attributes,
            &self.excluded_attributes,
            self.config,
        )
    }

    /// Filter one attribute value, including its sub-attributes.
    ///
    /// A complex attribute that is empty after its children were filtered is
    /// checked for presence once more, since it may be required itself.
    pub fn validate_attribute(
        &self,
        attribute: &SchemaAttribute,
        value: Option<Value>,
    ) -> ValidationResult<Option<Value>> {
        let original = attribute.is_complex().then(|| value.clone()).flatten();
        let validated = validate_node(attribute, value, self)?;

        if attribute.is_complex() {
            self.enforce_required(attribute, validated.is_none())
                .map_err(|source| ValidationError::RequiredComplexAttributeEmpty {
                    attribute: attribute.full_resource_name().to_string(),
                    original: original.map_or_else(|| "null".to_string(), |v| v.to_string()),
                    source: Box::new(source),
                })?;
        }
        Ok(validated)
    }

    /// Filter a whole resource document of the given resource type.
    ///
    /// The `schemas` member is copied as-is, base attributes are filtered in schema
    /// order, and each extension namespace is filtered against its extension schema.
    /// Members unknown to the schema are dropped; member names match case-insensitively.
    ///
    /// An optional extension missing from the document is skipped. A required one
    /// is filtered as if it were empty, so its required attributes are enforced.
    pub fn filter_resource(&self, schema: &ResourceSchema, resource: Value) -> ValidationResult<Value> {
        let Value::Object(mut document) = resource else {
            return Err(ValidationError::invalid_resource(format!(
                "a '{}' resource must be a JSON object",
                schema.name()
            )));
        };

        let mut filtered = Map::new();
        if let Some(schemas) = document.remove(SCHEMAS) {
            filtered.insert(SCHEMAS.to_string(), schemas);
        }

        self.filter_attributes(schema.attributes(), &mut document, &mut filtered)?;

        for extension in schema.extensions() {
            let mut members = match take_member(&mut document, extension.id()) {
                Some(Value::Object(members)) => members,
                // a required extension is checked even when the document lacks it
                _ if extension.is_required() => Map::new(),
                _ => continue,
            };
            let mut kept = Map::new();
            self.filter_attributes(extension.attributes(), &mut members, &mut kept)?;
            if !kept.is_empty() {
                filtered.insert(extension.id().to_string(), Value::Object(kept));
            }
        }

        Ok(Value::Object(filtered))
    }

    fn filter_attributes(
        &self,
        attributes: &[SchemaAttribute],
        source: &mut Map<String, Value>,
        target: &mut Map<String, Value>,
    ) -> ValidationResult<()> {
        for attribute in attributes {
            let value = take_member(source, attribute.name());
            if let Some(kept) = self.validate_attribute(attribute, value)? {
                target.insert(attribute.name().to_string(), kept);
            }
        }
        Ok(())
    }
}

impl ContextValidator for ResponseFilter<'_> {
    fn validate_context(
        &self,
        attribute: &SchemaAttribute,
        value: Option<&mut Value>,
    ) -> ValidationResult<bool> {
        self.is_returned(attribute, value)
    }
}
