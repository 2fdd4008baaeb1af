//! Metadata store module.
//!
//! This module holds the input side of the crate: an immutable, already
//! parsed EDM metadata document. Parsing the CSDL wire format is the job of
//! an external collaborator; anything that can hand out ordered slices of
//! entity types, complex types and entity containers can back the resolver.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MetadataStore (trait)                      │
//! │  - entity_types()        - complex_types()                      │
//! │  - entity_containers()   - entity_sets() (flattened)            │
//! └─────────────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      EdmMetadata                                │
//! │         (in-memory, built in code or from a JSON snapshot)      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use edm_schema::metadata::{EdmMetadata, MetadataStore};
//!
//! let metadata = EdmMetadata::from_json_file("northwind.json")?;
//! let types = metadata.entity_types();
//! ```

mod memory;
mod provider;
mod types;

pub use memory::EdmMetadata;
pub use provider::{MetadataError, MetadataResult, MetadataStore};
pub use types::*;
