//! # edm-schema
//!
//! Resolves an already-parsed EDM metadata document (the `$metadata` of an
//! OData-style service) into the client-side schema a query builder needs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │          External CSDL parser / JSON snapshot            │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [metadata]
//! ┌─────────────────────────────────────────────────────────┐
//! │   MetadataStore: entity types, complex types, containers │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [schema::Model]
//! ┌─────────────────────────────────────────────────────────┐
//! │   Table / Column / Association / Key                     │
//! │   (sets bound to types, inheritance flattened)           │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Query-building layer                     │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod metadata;
pub mod render;
pub mod schema;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::metadata::{
        EdmComplexType, EdmEntityContainer, EdmEntitySet, EdmEntityType, EdmKey, EdmMetadata,
        EdmNavigationProperty, EdmProperty, MetadataStore,
    };
    pub use crate::schema::{
        Association, BindingPolicy, Column, Key, KeyResolution, Model, ModelOptions, SchemaError,
        SchemaResult, Table,
    };
}

pub use metadata::{EdmMetadata, MetadataStore};
pub use schema::{Model, SchemaError, SchemaResult};
