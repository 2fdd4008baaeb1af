//! Schema projection values returned by the resolver.
//!
//! All values are owned and immutable once built; each query constructs
//! them fresh from the metadata store.

use serde::Serialize;

use crate::metadata::{EdmEntityType, EdmKey, EdmNavigationProperty, EdmProperty};

/// A queryable table: an entity set bound to an entity type, or a derived
/// entity type hanging off its parent table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Entity set name, or the derived type name for subtype tables.
    pub name: String,
    /// The resolved entity type.
    pub entity_type: EdmEntityType,
    /// Parent table (set only for derived-type tables).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Table>>,
}

impl Table {
    pub fn new(name: impl Into<String>, entity_type: EdmEntityType, parent: Option<Table>) -> Self {
        Self {
            name: name.into(),
            entity_type,
            parent: parent.map(Box::new),
        }
    }

    /// The name this table was resolved under.
    pub fn actual_name(&self) -> &str {
        &self.name
    }

    /// Whether this table represents a derived entity type.
    pub fn is_derived(&self) -> bool {
        self.parent.is_some()
    }

    /// The entity-set table this table ultimately derives from.
    pub fn root(&self) -> &Table {
        let mut current = self;
        while let Some(parent) = &current.parent {
            current = parent;
        }
        current
    }
}

/// A column: one flattened structural property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub type_name: String,
    pub nullable: bool,
}

impl From<&EdmProperty> for Column {
    fn from(p: &EdmProperty) -> Self {
        Self {
            name: p.name.clone(),
            type_name: p.type_name.clone(),
            nullable: p.nullable,
        }
    }
}

/// An association: one flattened navigation property.
///
/// The multiplicity literal is carried verbatim; no cardinality
/// interpretation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Association {
    pub name: String,
    /// Partner entity set name.
    pub partner: String,
    /// Multiplicity literal as declared ("1", "*", "0..1").
    pub multiplicity: String,
}

impl From<&EdmNavigationProperty> for Association {
    fn from(np: &EdmNavigationProperty) -> Self {
        Self {
            name: np.name.clone(),
            partner: np.partner_name.clone(),
            multiplicity: np.multiplicity.clone(),
        }
    }
}

/// A primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Key {
    /// Key property names (ordered).
    pub columns: Vec<String>,
}

impl Key {
    pub fn is_composite(&self) -> bool {
        self.columns.len() > 1
    }
}

impl From<&EdmKey> for Key {
    fn from(k: &EdmKey) -> Self {
        Self {
            columns: k.properties.clone(),
        }
    }
}

/// Outcome of a primary key lookup.
///
/// Distinguishes "nothing matched" from "more than one thing matched",
/// which [`Model::get_primary_key`](super::Model::get_primary_key)
/// collapses into `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum KeyResolution {
    /// Exactly one entity set and type matched, and a key was declared.
    Found(Key),
    /// No entity set matched, the set bound to no type, or no type in
    /// the chain declares a key.
    NotFound,
    /// More than one entity set carries the table's name.
    AmbiguousEntitySet { entity_set: String, count: usize },
    /// The entity set binds to more than one entity type.
    AmbiguousEntityType {
        entity_set: String,
        entity_types: Vec<String>,
    },
}

impl KeyResolution {
    pub fn into_key(self) -> Option<Key> {
        match self {
            KeyResolution::Found(key) => Some(key),
            _ => None,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(
            self,
            KeyResolution::AmbiguousEntitySet { .. } | KeyResolution::AmbiguousEntityType { .. }
        )
    }
}
