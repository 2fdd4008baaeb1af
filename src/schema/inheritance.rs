//! Base-type chain resolution.
//!
//! Walks base-type references iteratively, keeping the qualified names
//! already visited so a cyclic hierarchy fails instead of looping.

use std::collections::HashSet;

use crate::metadata::{simple_name, EdmEntityType};

use super::error::{SchemaError, SchemaResult};

/// Compute the ancestor-to-descendant chain of `entity_type`.
///
/// The root (the type with no base) comes first and `entity_type` itself
/// last. A type without a base yields `[entity_type]`.
pub(crate) fn entity_type_chain<'a>(
    types: &'a [EdmEntityType],
    entity_type: &'a EdmEntityType,
) -> SchemaResult<Vec<&'a EdmEntityType>> {
    let mut chain = vec![entity_type];
    let mut seen = HashSet::new();
    seen.insert(entity_type.qualified_name());

    let mut current = entity_type;
    while let Some(base_ref) = current.base_type.as_deref() {
        let base = resolve_base_type(types, current, base_ref)?;
        let base_name = base.qualified_name();
        if !seen.insert(base_name.clone()) {
            let mut names: Vec<String> = chain.iter().map(|t| t.qualified_name()).collect();
            names.push(base_name);
            return Err(SchemaError::CyclicInheritance { chain: names });
        }
        chain.push(base);
        current = base;
    }

    chain.reverse();
    tracing::trace!(
        entity_type = %entity_type.qualified_name(),
        depth = chain.len(),
        "resolved entity type chain"
    );
    Ok(chain)
}

/// Resolve a base-type reference to exactly one entity type.
///
/// An exact qualified-name match wins; otherwise the reference's simple
/// name is matched against the names of the other types in the store.
fn resolve_base_type<'a>(
    types: &'a [EdmEntityType],
    derived: &EdmEntityType,
    base_ref: &str,
) -> SchemaResult<&'a EdmEntityType> {
    let mut candidates: Vec<&EdmEntityType> = types
        .iter()
        .filter(|t| t.qualified_name() == base_ref)
        .collect();

    if candidates.is_empty() {
        let name = simple_name(base_ref);
        let derived_name = derived.qualified_name();
        candidates = types
            .iter()
            .filter(|t| t.name == name && t.qualified_name() != derived_name)
            .collect();
    }

    match candidates.as_slice() {
        [] => Err(SchemaError::UnresolvedBaseType {
            entity_type: derived.qualified_name(),
            base_type: base_ref.to_string(),
        }),
        [base] => Ok(*base),
        _ => Err(SchemaError::AmbiguousBaseType {
            entity_type: derived.qualified_name(),
            base_type: base_ref.to_string(),
            candidates: candidates.iter().map(|t| t.qualified_name()).collect(),
        }),
    }
}
