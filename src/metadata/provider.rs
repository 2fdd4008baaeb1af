//! MetadataStore trait definition.
//!
//! The MetadataStore trait abstracts over the different places an
//! already-parsed EDM document can live. The resolver only ever reads
//! through this trait, so a store populated by a CSDL parser, a JSON
//! snapshot or a test fixture are interchangeable.

use std::path::PathBuf;

use super::types::{EdmComplexType, EdmEntityContainer, EdmEntitySet, EdmEntityType};

/// Result type for metadata loading.
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Errors raised while loading a metadata snapshot.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Metadata snapshot not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read metadata snapshot: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse metadata snapshot: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Read access to an immutable, already-parsed EDM metadata document.
///
/// Implementations must return the same sequences, in the same order,
/// every time they are asked: the resolver relies on declaration order
/// for determinism and never caches anything between calls.
///
/// # Example
///
/// ```ignore
/// use edm_schema::metadata::{EdmMetadata, MetadataStore};
///
/// let metadata = EdmMetadata::from_json_file("northwind.json")?;
/// for set in metadata.entity_sets() {
///     println!("{} -> {}", set.name, set.entity_type);
/// }
/// ```
pub trait MetadataStore: Send + Sync {
    /// All entity types, in declaration order.
    fn entity_types(&self) -> &[EdmEntityType];

    /// All complex types, in declaration order.
    fn complex_types(&self) -> &[EdmComplexType];

    /// All entity containers, in declaration order.
    fn entity_containers(&self) -> &[EdmEntityContainer];

    /// Every entity set across all containers, container-then-set order.
    fn entity_sets(&self) -> Box<dyn Iterator<Item = &EdmEntitySet> + '_> {
        Box::new(
            self.entity_containers()
                .iter()
                .flat_map(|c| c.entity_sets.iter()),
        )
    }
}
