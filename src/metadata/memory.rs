//! In-memory metadata store.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::provider::{MetadataError, MetadataResult, MetadataStore};
use super::types::{EdmComplexType, EdmEntityContainer, EdmEntityType};

/// An owned, frozen EDM metadata document.
///
/// Built either in code (an external parser or a test fixture pushes
/// declarations in document order) or from a JSON snapshot of the same
/// structure.
///
/// ```ignore
/// let metadata = EdmMetadata::new()
///     .with_entity_type(
///         EdmEntityType::new("NorthwindModel", "Product")
///             .with_key(["ProductID"])
///             .with_property("ProductID", "Edm.Int32", false),
///     )
///     .with_container(
///         EdmEntityContainer::new("NorthwindEntities")
///             .with_entity_set("Products", "NorthwindModel.Product"),
///     );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdmMetadata {
    #[serde(default)]
    pub entity_types: Vec<EdmEntityType>,
    #[serde(default)]
    pub complex_types: Vec<EdmComplexType>,
    #[serde(default)]
    pub entity_containers: Vec<EdmEntityContainer>,
}

impl EdmMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity_type(mut self, entity_type: EdmEntityType) -> Self {
        self.entity_types.push(entity_type);
        self
    }

    pub fn with_complex_type(mut self, complex_type: EdmComplexType) -> Self {
        self.complex_types.push(complex_type);
        self
    }

    pub fn with_container(mut self, container: EdmEntityContainer) -> Self {
        self.entity_containers.push(container);
        self
    }

    /// Parse a JSON snapshot.
    pub fn from_json_str(json: &str) -> MetadataResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON snapshot from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> MetadataResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MetadataError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let metadata = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            entity_types = metadata.entity_types.len(),
            complex_types = metadata.complex_types.len(),
            containers = metadata.entity_containers.len(),
            "loaded metadata snapshot"
        );
        Ok(metadata)
    }
}

impl MetadataStore for EdmMetadata {
    fn entity_types(&self) -> &[EdmEntityType] {
        &self.entity_types
    }

    fn complex_types(&self) -> &[EdmComplexType] {
        &self.complex_types
    }

    fn entity_containers(&self) -> &[EdmEntityContainer] {
        &self.entity_containers
    }
}
