//! EDM metadata types for the store abstraction.
//!
//! These types are Rust-native representations of an already-parsed EDM
//! metadata document. They mirror the CSDL element structure closely
//! enough to be filled in by an external parser, and serialize to the
//! JSON snapshot format read by [`EdmMetadata::from_json_file`].
//!
//! [`EdmMetadata::from_json_file`]: super::EdmMetadata::from_json_file

use serde::{Deserialize, Serialize};

/// Join a namespace and a simple name into a qualified type name.
///
/// An empty namespace yields the bare name.
pub fn qualified_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", namespace, name)
    }
}

/// Strip any namespace qualifier from a type reference.
///
/// `"NorthwindModel.Product"` becomes `"Product"`; an unqualified
/// reference is returned unchanged.
pub fn simple_name(type_ref: &str) -> &str {
    type_ref.rsplit('.').next().unwrap_or(type_ref)
}

/// A structural property of an entity or complex type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdmProperty {
    /// Property name.
    pub name: String,
    /// EDM type name as declared (`Edm.Int32`, `NS.Address`, ...).
    #[serde(rename = "type")]
    pub type_name: String,
    /// Whether NULL values are allowed.
    #[serde(default = "default_nullable")]
    pub nullable: bool,
}

fn default_nullable() -> bool {
    true
}

impl EdmProperty {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            nullable,
        }
    }
}

/// A navigation property: a named relationship to another entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdmNavigationProperty {
    /// Navigation property name.
    pub name: String,
    /// Name of the partner end (the target entity set).
    pub partner_name: String,
    /// Multiplicity literal as declared ("1", "*", "0..1").
    pub multiplicity: String,
}

impl EdmNavigationProperty {
    pub fn new(
        name: impl Into<String>,
        partner_name: impl Into<String>,
        multiplicity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            partner_name: partner_name.into(),
            multiplicity: multiplicity.into(),
        }
    }
}

/// A declared entity key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdmKey {
    /// Key property names (ordered, composite when more than one).
    pub properties: Vec<String>,
}

impl EdmKey {
    pub fn new<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// An entity type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdmEntityType {
    /// Schema namespace the type is declared in (may be empty).
    #[serde(default)]
    pub namespace: String,
    /// Simple type name.
    pub name: String,
    /// Base type reference, possibly namespace-qualified.
    #[serde(default)]
    pub base_type: Option<String>,
    /// Declared properties, in document order.
    #[serde(default)]
    pub properties: Vec<EdmProperty>,
    /// Declared navigation properties, in document order.
    #[serde(default)]
    pub navigation_properties: Vec<EdmNavigationProperty>,
    /// Key declared on this type, if any.
    #[serde(default)]
    pub key: Option<EdmKey>,
}

impl EdmEntityType {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            base_type: None,
            properties: Vec::new(),
            navigation_properties: Vec::new(),
            key: None,
        }
    }

    pub fn with_base(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = Some(base_type.into());
        self
    }

    pub fn with_property(
        mut self,
        name: impl Into<String>,
        type_name: impl Into<String>,
        nullable: bool,
    ) -> Self {
        self.properties
            .push(EdmProperty::new(name, type_name, nullable));
        self
    }

    pub fn with_navigation(
        mut self,
        name: impl Into<String>,
        partner_name: impl Into<String>,
        multiplicity: impl Into<String>,
    ) -> Self {
        self.navigation_properties
            .push(EdmNavigationProperty::new(name, partner_name, multiplicity));
        self
    }

    pub fn with_key<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key = Some(EdmKey::new(properties));
        self
    }

    /// Namespace-qualified name, used as the type's identity.
    pub fn qualified_name(&self) -> String {
        qualified_name(&self.namespace, &self.name)
    }

    /// Simple name of the declared base type, if any.
    pub fn base_type_name(&self) -> Option<&str> {
        self.base_type.as_deref().map(simple_name)
    }

    /// The declared key, when it names at least one property.
    pub fn declared_key(&self) -> Option<&EdmKey> {
        self.key.as_ref().filter(|k| !k.is_empty())
    }
}

/// A complex (structured, keyless) type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdmComplexType {
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<EdmProperty>,
}

impl EdmComplexType {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn with_property(
        mut self,
        name: impl Into<String>,
        type_name: impl Into<String>,
        nullable: bool,
    ) -> Self {
        self.properties
            .push(EdmProperty::new(name, type_name, nullable));
        self
    }

    pub fn qualified_name(&self) -> String {
        qualified_name(&self.namespace, &self.name)
    }
}

/// An entity set: a named, queryable collection of one entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdmEntitySet {
    /// Entity set name.
    pub name: String,
    /// Entity type reference, possibly namespace-qualified.
    pub entity_type: String,
}

impl EdmEntitySet {
    pub fn new(name: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entity_type: entity_type.into(),
        }
    }

    /// The entity type reference with any namespace qualifier removed.
    pub fn entity_type_name(&self) -> &str {
        simple_name(&self.entity_type)
    }
}

/// An entity container hosting entity sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdmEntityContainer {
    pub name: String,
    #[serde(default)]
    pub entity_sets: Vec<EdmEntitySet>,
}

impl EdmEntityContainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entity_sets: Vec::new(),
        }
    }

    pub fn with_entity_set(
        mut self,
        name: impl Into<String>,
        entity_type: impl Into<String>,
    ) -> Self {
        self.entity_sets.push(EdmEntitySet::new(name, entity_type));
        self
    }
}
