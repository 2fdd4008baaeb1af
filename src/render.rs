//! Plain-text rendering of resolver output.
//!
//! One line per item, no trailing newline.

use crate::metadata::{EdmComplexType, EdmEntityType};
use crate::schema::{Association, Column, KeyResolution, Table};

pub fn render_tables(tables: &[Table]) -> String {
    tables
        .iter()
        .map(|t| match &t.parent {
            Some(parent) => format!(
                "{} -> {} (derived from {})",
                t.name,
                t.entity_type.qualified_name(),
                parent.name
            ),
            None => format!("{} -> {}", t.name, t.entity_type.qualified_name()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_columns(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| {
            let null = if c.nullable { "null" } else { "not null" };
            format!("{} {} {}", c.name, c.type_name, null)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_associations(associations: &[Association]) -> String {
    associations
        .iter()
        .map(|a| format!("{} -> {} [{}]", a.name, a.partner, a.multiplicity))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_key(resolution: &KeyResolution) -> String {
    match resolution {
        KeyResolution::Found(key) => format!("key ({})", key.columns.join(", ")),
        KeyResolution::NotFound => "no key".to_string(),
        KeyResolution::AmbiguousEntitySet { entity_set, count } => {
            format!("ambiguous: {} entity sets named '{}'", count, entity_set)
        }
        KeyResolution::AmbiguousEntityType {
            entity_set,
            entity_types,
        } => format!(
            "ambiguous: entity set '{}' binds to {}",
            entity_set,
            entity_types.join(", ")
        ),
    }
}

pub fn render_types<'a>(
    entity_types: impl IntoIterator<Item = &'a EdmEntityType>,
    complex_types: impl IntoIterator<Item = &'a EdmComplexType>,
) -> String {
    let mut lines = Vec::new();
    for et in entity_types {
        match &et.base_type {
            Some(base) => lines.push(format!("entity {} : {}", et.qualified_name(), base)),
            None => lines.push(format!("entity {}", et.qualified_name())),
        }
    }
    for ct in complex_types {
        lines.push(format!("complex {}", ct.qualified_name()));
    }
    lines.join("\n")
}
