//! Schema resolution.
//!
//! Projects an EDM metadata store onto the client-side schema the query
//! layer works with:
//!
//! ```text
//!   EntityContainer ─┬─ EntitySet "Products" ──(simple name)──▶ EntityType Product
//!                    │                                               │ base
//!                    │                                               ▼
//!                    │                                       ... ─▶ root type
//!                    ▼
//!   Table "Products" ── columns / associations flattened root-first
//!                    └─ primary key: first key declared from the root down
//! ```
//!
//! Entity sets bind to entity types by simple name. Inheritance chains are
//! walked iteratively and a cyclic hierarchy is reported as
//! [`SchemaError::CyclicInheritance`].

mod error;
mod inheritance;
mod model;
mod options;
mod types;

pub use error::{SchemaError, SchemaResult};
pub use model::Model;
pub use options::{BindingPolicy, ModelOptions};
pub use types::{Association, Column, Key, KeyResolution, Table};
