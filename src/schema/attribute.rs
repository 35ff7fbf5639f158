//! Resolved attribute definitions.
//!
//! A [`SchemaAttribute`] is an [`AttributeDefinition`] placed in its context:
//! it knows the schema it belongs to, its dotted node name and its parent.
//! Resolution happens once when a [`ResourceSchema`] is built; afterwards the
//! tree is immutable and can be shared between concurrent filter passes.

use super::types::{
    AttributeDefinition, AttributeType, Mutability, ReferenceType, Returned, Schema, Uniqueness,
};

/// Name of the sub-attribute holding a resource URL.
pub const REF: &str = "$ref";
/// Name of the sub-attribute holding a referenced resource's id.
pub const VALUE: &str = "value";
/// Name of the sub-attribute holding a referenced resource's type.
pub const TYPE: &str = "type";

/// An attribute definition resolved against its schema and parent.
///
/// The parent is stored as its fully qualified name rather than a pointer, so
/// the tree has a single owner and no reference cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaAttribute {
    name: String,
    full_resource_name: String,
    scim_node_name: String,
    resource_uri: Option<String>,
    data_type: AttributeType,
    mutability: Mutability,
    returned: Returned,
    uniqueness: Uniqueness,
    required: bool,
    multi_valued: bool,
    case_exact: bool,
    reference_types: Vec<ReferenceType>,
    sub_attributes: Vec<SchemaAttribute>,
    parent: Option<String>,
}

impl SchemaAttribute {
    /// Resolve a top-level attribute of `schema_id`.
    ///
    /// `resource_uri` is only set for attributes of an extension schema.
    pub fn resolve(
        definition: &AttributeDefinition,
        schema_id: &str,
        resource_uri: Option<&str>,
    ) -> Self {
        Self::resolve_node(definition, schema_id, resource_uri, None)
    }

    fn resolve_node(
        definition: &AttributeDefinition,
        schema_id: &str,
        resource_uri: Option<&str>,
        parent: Option<(&str, &str)>,
    ) -> Self {
        let scim_node_name = match parent {
            Some((_, parent_node)) => format!("{}.{}", parent_node, definition.name),
            None => definition.name.clone(),
        };
        let full_resource_name = format!("{}:{}", schema_id, scim_node_name);

        let sub_attributes = definition
            .sub_attributes
            .iter()
            .map(|sub| {
                Self::resolve_node(
                    sub,
                    schema_id,
                    resource_uri,
                    Some((full_resource_name.as_str(), scim_node_name.as_str())),
                )
            })
            .collect();

        Self {
            name: definition.name.clone(),
            resource_uri: resource_uri.map(str::to_string),
            data_type: definition.data_type,
            mutability: definition.mutability,
            returned: definition.returned,
            uniqueness: definition.uniqueness,
            required: definition.required,
            multi_valued: definition.multi_valued,
            case_exact: definition.case_exact,
            reference_types: definition.reference_types.clone(),
            sub_attributes,
            parent: parent.map(|(parent_full, _)| parent_full.to_string()),
            full_resource_name,
            scim_node_name,
        }
    }

    /// Local attribute name, e.g. `givenName`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Schema-qualified name, e.g. `urn:ietf:params:scim:schemas:core:2.0:User:name.givenName`.
    pub fn full_resource_name(&self) -> &str {
        &self.full_resource_name
    }

    /// Dotted name relative to the schema, e.g. `name.givenName`.
    pub fn scim_node_name(&self) -> &str {
        &self.scim_node_name
    }

    /// Extension schema id for extension attributes, `None` for base attributes.
    pub fn resource_uri(&self) -> Option<&str> {
        self.resource_uri.as_deref()
    }

    pub fn data_type(&self) -> AttributeType {
        self.data_type
    }

    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    pub fn returned(&self) -> Returned {
        self.returned
    }

    pub fn uniqueness(&self) -> Uniqueness {
        self.uniqueness
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_multi_valued(&self) -> bool {
        self.multi_valued
    }

    pub fn is_case_exact(&self) -> bool {
        self.case_exact
    }

    pub fn is_complex(&self) -> bool {
        self.data_type == AttributeType::Complex
    }

    pub fn reference_types(&self) -> &[ReferenceType] {
        &self.reference_types
    }

    pub fn sub_attributes(&self) -> &[SchemaAttribute] {
        &self.sub_attributes
    }

    /// Fully qualified name of the enclosing complex attribute.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Find a direct sub-attribute by its local name.
    pub fn sub_attribute(&self, name: &str) -> Option<&SchemaAttribute> {
        self.sub_attributes.iter().find(|sub| sub.name == name)
    }

    /// Whether this is a `$ref` sub-attribute pointing at provider-managed resources.
    pub fn is_resource_reference(&self) -> bool {
        self.name == REF
            && self.data_type == AttributeType::Reference
            && self.reference_types.contains(&ReferenceType::Resource)
    }

    /// This attribute followed by all of its descendants, depth first.
    pub fn iter(&self) -> impl Iterator<Item = &SchemaAttribute> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.sub_attributes.iter().rev());
            Some(next)
        })
    }
}

/// An extension schema attached to a resource type.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaExtension {
    id: String,
    required: bool,
    attributes: Vec<SchemaAttribute>,
}

impl SchemaExtension {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn attributes(&self) -> &[SchemaAttribute] {
        &self.attributes
    }
}

/// The resolved schema of one resource type: its base schema plus extensions.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSchema {
    name: String,
    schema_id: String,
    attributes: Vec<SchemaAttribute>,
    extensions: Vec<SchemaExtension>,
}

impl ResourceSchema {
    /// Resolve a resource type from its base schema.
    pub fn new(name: impl Into<String>, base: &Schema) -> Self {
        let attributes = base
            .attributes
            .iter()
            .map(|definition| SchemaAttribute::resolve(definition, &base.id, None))
            .collect();

        Self {
            name: name.into(),
            schema_id: base.id.clone(),
            attributes,
            extensions: Vec::new(),
        }
    }

    /// Attach an extension schema; its attributes are scoped by the extension id.
    pub fn with_extension(mut self, extension: &Schema, required: bool) -> Self {
        let attributes = extension
            .attributes
            .iter()
            .map(|definition| SchemaAttribute::resolve(definition, &extension.id, Some(&extension.id)))
            .collect();

        self.extensions.push(SchemaExtension {
            id: extension.id.clone(),
            required,
            attributes,
        });
        self
    }

    /// Resource type name, e.g. `User`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the base schema.
    pub fn schema_id(&self) -> &str {
        &self.schema_id
    }

    /// Top-level attributes of the base schema.
    pub fn attributes(&self) -> &[SchemaAttribute] {
        &self.attributes
    }

    pub fn extensions(&self) -> &[SchemaExtension] {
        &self.extensions
    }

    /// Every attribute of the base schema and all extensions, sub-attributes included.
    pub fn all_attributes(&self) -> impl Iterator<Item = &SchemaAttribute> {
        self.attributes
            .iter()
            .chain(self.extensions.iter().flat_map(|ext| ext.attributes.iter()))
            .flat_map(|attr| attr.iter())
    }

    /// Look up an attribute by fully qualified name or by dotted node name.
    ///
    /// Node names are matched case-insensitively, as attribute names are in
    /// SCIM; base schema attributes win over extension attributes of the same name.
    pub fn find(&self, name: &str) -> Option<&SchemaAttribute> {
        self.all_attributes()
            .find(|attr| attr.full_resource_name == name)
            .or_else(|| {
                self.all_attributes()
                    .find(|attr| attr.scim_node_name.eq_ignore_ascii_case(name))
            })
    }
}
