//! Membership tests for the `attributes` and `excludedAttributes` parameters.

use crate::error::{ValidationError, ValidationResult};
use crate::schema::{ResourceSchema, SchemaAttribute};

/// Attributes named by a client's `attributes` or `excludedAttributes` parameter,
/// already resolved against the resource schema.
#[derive(Debug, Clone, Default)]
pub struct AttributeSet<'a> {
    attributes: Vec<&'a SchemaAttribute>,
}

impl<'a> AttributeSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the names of an `attributes` or `excludedAttributes` parameter.
    ///
    /// Names may be fully qualified or dotted node names, matched as
    /// [`ResourceSchema::find`] does.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownAttribute`] for a name the resource type
    /// does not declare.
    pub fn resolve<I, S>(schema: &'a ResourceSchema, names: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                schema
                    .find(name)
                    .ok_or_else(|| ValidationError::unknown_attribute(name, schema.name()))
            })
            .collect()
    }

    pub fn insert(&mut self, attribute: &'a SchemaAttribute) {
        if !self.contains(attribute) {
            self.attributes.push(attribute);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a SchemaAttribute> + '_ {
        self.attributes.iter().copied()
    }

    /// Exact membership by fully qualified name.
    pub fn contains(&self, attribute: &SchemaAttribute) -> bool {
        self.attributes
            .iter()
            .any(|entry| entry.full_resource_name() == attribute.full_resource_name())
    }

    /// Membership in the requested set.
    ///
    /// Requesting a sub-attribute also requests its parent container, and
    /// requesting a complex attribute requests all of its sub-attributes. Only one
    /// level of nesting is considered.
    pub fn matches_requested(&self, attribute: &SchemaAttribute) -> bool {
        let name = attribute.full_resource_name();
        self.attributes.iter().any(|entry| {
            entry.full_resource_name() == name
                || entry.parent() == Some(name)
                || attribute.parent() == Some(entry.full_resource_name())
        })
    }

    /// Membership in the excluded set.
    ///
    /// Exact names only: excluding a parent does not exclude its children and
    /// excluding a child does not exclude its parent.
    pub fn matches_excluded(&self, attribute: &SchemaAttribute) -> bool {
        self.contains(attribute)
    }
}

impl<'a> FromIterator<&'a SchemaAttribute> for AttributeSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a SchemaAttribute>>(iter: I) -> Self {
        let mut set = Self::new();
        for attribute in iter {
            set.insert(attribute);
        }
        set
    }
}
