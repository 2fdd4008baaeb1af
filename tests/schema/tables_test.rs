//! Entity set binding and derived table discovery.

use edm_schema::prelude::*;

fn catalog() -> EdmMetadata {
    EdmMetadata::new()
        .with_entity_type(
            EdmEntityType::new("NS", "Product")
                .with_key(["ProductID"])
                .with_property("ProductID", "Edm.Int32", false),
        )
        .with_entity_type(
            EdmEntityType::new("NS", "Supplier")
                .with_key(["SupplierID"])
                .with_property("SupplierID", "Edm.Int32", false),
        )
        .with_container(
            EdmEntityContainer::new("Catalog")
                .with_entity_set("Products", "NS.Product")
                .with_entity_set("Suppliers", "NS.Supplier"),
        )
}

#[test]
fn test_set_binds_to_simple_type_name() {
    let metadata = EdmMetadata::new()
        .with_entity_type(EdmEntityType::new("", "Product"))
        .with_container(EdmEntityContainer::new("C").with_entity_set("Products", "NS.Product"));
    let model = Model::new(&metadata);

    let tables = model.get_tables().unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].name, "Products");
    assert_eq!(tables[0].entity_type.name, "Product");
    assert!(tables[0].parent.is_none());
}

#[test]
fn test_tables_follow_container_then_set_order() {
    let metadata = catalog().with_container(
        EdmEntityContainer::new("Archive")
            .with_entity_set("OldProducts", "NS.Product")
            .with_entity_set("OldSuppliers", "NS.Supplier"),
    );
    let model = Model::new(&metadata);

    let names: Vec<_> = model
        .get_tables()
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["Products", "Suppliers", "OldProducts", "OldSuppliers"]);
}

#[test]
fn test_same_simple_name_in_two_namespaces_yields_two_tables() {
    let metadata = EdmMetadata::new()
        .with_entity_type(EdmEntityType::new("Sales", "Product"))
        .with_entity_type(EdmEntityType::new("Catalog", "Product"))
        .with_container(EdmEntityContainer::new("C").with_entity_set("Products", "Sales.Product"));
    let model = Model::new(&metadata);

    let tables = model.get_tables().unwrap();
    assert_eq!(tables.len(), 2);
    assert!(tables.iter().all(|t| t.name == "Products"));
    assert_eq!(tables[0].entity_type.namespace, "Sales");
    assert_eq!(tables[1].entity_type.namespace, "Catalog");
}

#[test]
fn test_reject_policy_reports_ambiguous_binding() {
    let metadata = EdmMetadata::new()
        .with_entity_type(EdmEntityType::new("Sales", "Product"))
        .with_entity_type(EdmEntityType::new("Catalog", "Product"))
        .with_container(EdmEntityContainer::new("C").with_entity_set("Products", "Sales.Product"));
    let options = ModelOptions::default().with_binding_policy(BindingPolicy::Reject);
    let model = Model::with_options(&metadata, options);

    let err = model.get_tables().unwrap_err();
    assert_eq!(
        err,
        SchemaError::AmbiguousBinding {
            entity_set: "Products".to_string(),
            entity_type: "Sales.Product".to_string(),
            candidates: vec!["Sales.Product".to_string(), "Catalog.Product".to_string()],
        }
    );
}

#[test]
fn test_reject_policy_allows_unique_bindings() {
    let metadata = catalog();
    let options = ModelOptions::default().with_binding_policy(BindingPolicy::Reject);
    let model = Model::with_options(&metadata, options);

    assert_eq!(model.get_tables().unwrap().len(), 2);
}

#[test]
fn test_set_without_matching_type_is_skipped() {
    let metadata = catalog().with_container(
        EdmEntityContainer::new("Extra").with_entity_set("Ghosts", "NS.Ghost"),
    );
    let model = Model::new(&metadata);

    let tables = model.get_tables().unwrap();
    assert_eq!(tables.len(), 2);
    assert!(tables.iter().all(|t| t.name != "Ghosts"));
}

#[test]
fn test_binding_is_case_sensitive() {
    let metadata = EdmMetadata::new()
        .with_entity_type(EdmEntityType::new("NS", "product"))
        .with_container(EdmEntityContainer::new("C").with_entity_set("Products", "NS.Product"));
    let model = Model::new(&metadata);

    assert!(model.get_tables().unwrap().is_empty());
}

#[test]
fn test_empty_store() {
    let metadata = EdmMetadata::new();
    let model = Model::new(&metadata);

    assert!(model.get_tables().unwrap().is_empty());
    assert_eq!(model.get_entity_types().count(), 0);
    assert_eq!(model.get_complex_types().count(), 0);
}

#[test]
fn test_derived_tables_empty_without_subtypes() {
    let metadata = catalog();
    let model = Model::new(&metadata);
    let products = &model.get_tables().unwrap()[0];

    assert!(model.get_derived_tables(products).is_empty());
}

#[test]
fn test_derived_tables_reference_parent() {
    let metadata = EdmMetadata::new()
        .with_entity_type(EdmEntityType::new("Hr", "Person").with_key(["Id"]))
        .with_entity_type(EdmEntityType::new("Hr", "Employee").with_base("Hr.Person"))
        .with_entity_type(EdmEntityType::new("Hr", "Contractor").with_base("Person"))
        .with_entity_type(EdmEntityType::new("Hr", "Manager").with_base("Hr.Employee"))
        .with_container(EdmEntityContainer::new("C").with_entity_set("People", "Hr.Person"));
    let model = Model::new(&metadata);
    let people = &model.get_tables().unwrap()[0];

    let derived = model.get_derived_tables(people);
    let names: Vec<_> = derived.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Employee", "Contractor"]);
    assert!(derived
        .iter()
        .all(|t| t.parent.as_deref().map(|p| p.name.as_str()) == Some("People")));

    // Only direct subtypes; Manager hangs off Employee.
    let below_employee = model.get_derived_tables(&derived[0]);
    assert_eq!(below_employee.len(), 1);
    assert_eq!(below_employee[0].name, "Manager");
    assert_eq!(below_employee[0].root().name, "People");
}

#[test]
fn test_derived_tables_match_base_name_case_sensitively() {
    let metadata = EdmMetadata::new()
        .with_entity_type(EdmEntityType::new("NS", "Person"))
        .with_entity_type(EdmEntityType::new("NS", "Emp").with_base("NS.person"))
        .with_container(EdmEntityContainer::new("C").with_entity_set("People", "NS.Person"));
    let model = Model::new(&metadata);
    let people = &model.get_tables().unwrap()[0];

    assert!(model.get_derived_tables(people).is_empty());
}

#[test]
fn test_derived_tables_ignore_base_namespace() {
    let metadata = EdmMetadata::new()
        .with_entity_type(EdmEntityType::new("NS", "Person"))
        .with_entity_type(EdmEntityType::new("NS", "Emp").with_base("Other.Person"))
        .with_container(EdmEntityContainer::new("C").with_entity_set("People", "NS.Person"));
    let model = Model::new(&metadata);
    let people = &model.get_tables().unwrap()[0];

    let derived = model.get_derived_tables(people);
    assert_eq!(derived.len(), 1);
    assert_eq!(derived[0].name, "Emp");
}

#[test]
fn test_find_table_terminates_on_cyclic_hierarchy() {
    let metadata = EdmMetadata::new()
        .with_entity_type(EdmEntityType::new("NS", "A").with_base("NS.B"))
        .with_entity_type(EdmEntityType::new("NS", "B").with_base("NS.A"))
        .with_container(EdmEntityContainer::new("C").with_entity_set("As", "NS.A"));
    let model = Model::new(&metadata);

    assert!(model.find_table("Nope").unwrap().is_none());
    let b = model.find_table("B").unwrap().unwrap();
    assert_eq!(b.root().name, "As");
}

#[test]
fn test_find_table_searches_derived_tables() {
    let metadata = EdmMetadata::new()
        .with_entity_type(EdmEntityType::new("Hr", "Person"))
        .with_entity_type(EdmEntityType::new("Hr", "Employee").with_base("Hr.Person"))
        .with_entity_type(EdmEntityType::new("Hr", "Manager").with_base("Hr.Employee"))
        .with_container(EdmEntityContainer::new("C").with_entity_set("People", "Hr.Person"));
    let model = Model::new(&metadata);

    let people = model.find_table("People").unwrap().unwrap();
    assert!(!people.is_derived());

    let manager = model.find_table("Manager").unwrap().unwrap();
    assert_eq!(manager.parent.as_deref().map(|p| p.name.as_str()), Some("Employee"));

    assert!(model.find_table("Nobody").unwrap().is_none());
}

#[test]
fn test_queries_are_idempotent() {
    let metadata = catalog();
    let model = Model::new(&metadata);

    let first = model.get_tables().unwrap();
    let second = model.get_tables().unwrap();
    assert_eq!(first, second);

    for table in &first {
        assert_eq!(model.get_columns(table).unwrap(), model.get_columns(table).unwrap());
        assert_eq!(
            model.get_associations(table).unwrap(),
            model.get_associations(table).unwrap()
        );
        assert_eq!(
            model.get_primary_key(table).unwrap(),
            model.get_primary_key(table).unwrap()
        );
        assert_eq!(model.get_derived_tables(table), model.get_derived_tables(table));
    }
}
