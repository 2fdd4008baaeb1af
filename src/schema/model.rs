//! The schema resolver.
//!
//! [`Model`] answers schema-shape questions against a [`MetadataStore`]
//! without mutating it. Every query re-walks the store in declaration
//! order; nothing is indexed or cached between calls.

use crate::metadata::{EdmComplexType, EdmEntitySet, EdmEntityType, MetadataStore};

use super::error::{SchemaError, SchemaResult};
use super::inheritance::entity_type_chain;
use super::options::{BindingPolicy, ModelOptions};
use super::types::{Association, Column, Key, KeyResolution, Table};

/// Read-only schema resolver over a metadata store.
///
/// # Example
///
/// ```ignore
/// use edm_schema::metadata::EdmMetadata;
/// use edm_schema::schema::Model;
///
/// let metadata = EdmMetadata::from_json_file("northwind.json")?;
/// let model = Model::new(&metadata);
///
/// for table in model.get_tables()? {
///     let columns = model.get_columns(&table)?;
///     let key = model.get_primary_key(&table)?;
///     println!("{}: {} columns, key {:?}", table.name, columns.len(), key);
/// }
/// ```
pub struct Model<'a, S: MetadataStore + ?Sized> {
    store: &'a S,
    options: ModelOptions,
}

impl<S: MetadataStore + ?Sized> Clone for Model<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: MetadataStore + ?Sized> Copy for Model<'_, S> {}

impl<'a, S: MetadataStore + ?Sized> Model<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self::with_options(store, ModelOptions::default())
    }

    pub fn with_options(store: &'a S, options: ModelOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> ModelOptions {
        self.options
    }

    /// One table per (entity set, matching entity type) pair.
    ///
    /// Sets are visited container by container in declaration order. A set
    /// whose type reference matches nothing produces no table. A set that
    /// matches several entity types produces a table for each, unless the
    /// binding policy is [`BindingPolicy::Reject`].
    pub fn get_tables(&self) -> SchemaResult<Vec<Table>> {
        let mut tables = Vec::new();

        for entity_set in self.store.entity_sets() {
            let matches = self.entity_set_types(entity_set);
            tracing::debug!(
                entity_set = %entity_set.name,
                entity_type = %entity_set.entity_type,
                matches = matches.len(),
                "binding entity set"
            );

            if matches.len() > 1 {
                let candidates: Vec<String> = matches.iter().map(|t| t.qualified_name()).collect();
                match self.options.binding_policy {
                    BindingPolicy::Reject => {
                        return Err(SchemaError::AmbiguousBinding {
                            entity_set: entity_set.name.clone(),
                            entity_type: entity_set.entity_type.clone(),
                            candidates,
                        });
                    }
                    BindingPolicy::CrossProduct => {
                        tracing::warn!(
                            entity_set = %entity_set.name,
                            candidates = %candidates.join(", "),
                            "entity set binds to several entity types"
                        );
                    }
                }
            }

            tables.extend(
                matches
                    .into_iter()
                    .map(|et| Table::new(entity_set.name.clone(), et.clone(), None)),
            );
        }

        Ok(tables)
    }

    /// Tables for the entity types directly derived from `table`'s type.
    ///
    /// A type is derived when its base reference's simple name equals
    /// `table.entity_type.name` (case-sensitive).
    pub fn get_derived_tables(&self, table: &Table) -> Vec<Table> {
        self.store
            .entity_types()
            .iter()
            .filter(|et| et.base_type_name() == Some(table.entity_type.name.as_str()))
            .map(|et| Table::new(et.name.clone(), et.clone(), Some(table.clone())))
            .collect()
    }

    /// Flattened columns of `table`, root type first.
    ///
    /// Properties redeclared further down the chain are kept as-is, so the
    /// result may repeat a name.
    pub fn get_columns(&self, table: &Table) -> SchemaResult<Vec<Column>> {
        let chain = self.entity_type_chain(&table.entity_type)?;
        Ok(chain
            .iter()
            .flat_map(|t| t.properties.iter())
            .map(Column::from)
            .collect())
    }

    /// Flattened associations of `table`, root type first.
    pub fn get_associations(&self, table: &Table) -> SchemaResult<Vec<Association>> {
        let chain = self.entity_type_chain(&table.entity_type)?;
        Ok(chain
            .iter()
            .flat_map(|t| t.navigation_properties.iter())
            .map(Association::from)
            .collect())
    }

    /// Primary key of `table`, or `None` when it cannot be determined
    /// unambiguously.
    ///
    /// See [`Model::resolve_primary_key`] to tell the cases apart.
    pub fn get_primary_key(&self, table: &Table) -> SchemaResult<Option<Key>> {
        Ok(self.resolve_primary_key(table)?.into_key())
    }

    /// Resolve the primary key of `table`.
    ///
    /// Looks up the entity sets named `table.actual_name()`. Exactly one
    /// set must match and it must bind to exactly one entity type; the key
    /// is then the first non-empty key declared along that type's chain,
    /// searching from the root.
    pub fn resolve_primary_key(&self, table: &Table) -> SchemaResult<KeyResolution> {
        let name = table.actual_name();
        let sets: Vec<&EdmEntitySet> = self
            .store
            .entity_sets()
            .filter(|s| s.name == name)
            .collect();

        let entity_set = match sets.as_slice() {
            [] => return Ok(KeyResolution::NotFound),
            [entity_set] => *entity_set,
            _ => {
                tracing::debug!(entity_set = %name, count = sets.len(), "ambiguous entity set");
                return Ok(KeyResolution::AmbiguousEntitySet {
                    entity_set: name.to_string(),
                    count: sets.len(),
                });
            }
        };

        let types = self.entity_set_types(entity_set);
        let entity_type = match types.as_slice() {
            [] => return Ok(KeyResolution::NotFound),
            [entity_type] => *entity_type,
            _ => {
                return Ok(KeyResolution::AmbiguousEntityType {
                    entity_set: entity_set.name.clone(),
                    entity_types: types.iter().map(|t| t.qualified_name()).collect(),
                });
            }
        };

        let chain = self.entity_type_chain(entity_type)?;
        Ok(chain
            .iter()
            .find_map(|t| t.declared_key())
            .map(|k| KeyResolution::Found(Key::from(k)))
            .unwrap_or(KeyResolution::NotFound))
    }

    /// All entity types in the store, in declaration order.
    pub fn get_entity_types(&self) -> std::slice::Iter<'a, EdmEntityType> {
        self.store.entity_types().iter()
    }

    /// All complex types in the store, in declaration order.
    pub fn get_complex_types(&self) -> std::slice::Iter<'a, EdmComplexType> {
        self.store.complex_types().iter()
    }

    /// Ancestor-to-descendant chain of `entity_type`.
    pub fn entity_type_chain<'t>(
        &self,
        entity_type: &'t EdmEntityType,
    ) -> SchemaResult<Vec<&'t EdmEntityType>>
    where
        'a: 't,
    {
        entity_type_chain(self.store.entity_types(), entity_type)
    }

    /// Find a table by name.
    ///
    /// Entity set tables are searched first; otherwise derived tables are
    /// searched breadth-first below every entity set table. The first match
    /// in that order wins.
    pub fn find_table(&self, name: &str) -> SchemaResult<Option<Table>> {
        let mut pending = self.get_tables()?;
        if let Some(table) = pending.iter().find(|t| t.name == name) {
            return Ok(Some(table.clone()));
        }

        let mut visited = std::collections::HashSet::new();
        while !pending.is_empty() {
            let mut next = Vec::new();
            for table in &pending {
                if !visited.insert(table.entity_type.qualified_name()) {
                    continue;
                }
                for derived in self.get_derived_tables(table) {
                    if derived.name == name {
                        return Ok(Some(derived));
                    }
                    next.push(derived);
                }
            }
            pending = next;
        }

        Ok(None)
    }

    /// Entity types an entity set's type reference binds to.
    fn entity_set_types(&self, entity_set: &EdmEntitySet) -> Vec<&'a EdmEntityType> {
        let name = entity_set.entity_type_name();
        self.store
            .entity_types()
            .iter()
            .filter(|et| et.name == name)
            .collect()
    }
}
