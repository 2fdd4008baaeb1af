//! Error types for schema resolution.
//!
//! Resolution never fails for "nothing matched": those cases surface as
//! empty sequences or absent keys. The errors here cover metadata that is
//! malformed in ways resolution cannot work around, plus ambiguous
//! bindings when the caller asked for them to be rejected.

/// Result type for schema resolution.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Error type for schema resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The base-type chain loops back on itself.
    ///
    /// `chain` lists the qualified type names walked, descendant first,
    /// ending with the type that was reached twice.
    #[error("Cyclic inheritance detected: {}", .chain.join(" -> "))]
    CyclicInheritance { chain: Vec<String> },

    /// A declared base type does not name any entity type in the store.
    #[error("Base type '{base_type}' of entity type '{entity_type}' not found")]
    UnresolvedBaseType {
        entity_type: String,
        base_type: String,
    },

    /// A declared base type matches more than one entity type.
    #[error(
        "Ambiguous base type '{base_type}' of entity type '{entity_type}' - matches: {}",
        .candidates.join(", ")
    )]
    AmbiguousBaseType {
        entity_type: String,
        base_type: String,
        candidates: Vec<String>,
    },

    /// An entity set's type reference matches more than one entity type.
    #[error(
        "Ambiguous entity type '{entity_type}' for entity set '{entity_set}' - matches: {}",
        .candidates.join(", ")
    )]
    AmbiguousBinding {
        entity_set: String,
        entity_type: String,
        candidates: Vec<String>,
    },
}
