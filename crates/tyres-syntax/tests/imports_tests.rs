use super::*;

fn table() -> ImportTable {
    let mut imports = ImportTable::new();
    imports.add(UseKind::Class, &Name::parse("App\\Bar\\Foo"), None);
    imports.add(UseKind::Class, &Name::parse("Vendor\\Lib\\Thing"), Some("Alias"));
    imports.add(UseKind::Function, &Name::parse("App\\helper"), None);
    imports
}

#[test]
fn test_alias_defaults_to_last_segment() {
    let imports = table();
    assert_eq!(imports.class("Foo").map(Name::full).as_deref(), Some("App\\Bar\\Foo"));
    assert_eq!(imports.class("Alias").map(Name::full).as_deref(), Some("Vendor\\Lib\\Thing"));
    assert!(imports.class("Thing").is_none());
}

#[test]
fn test_imported_names_are_absolute() {
    let imports = table();
    assert!(imports.class("Foo").unwrap().was_fully_qualified());
}

#[test]
fn test_kinds_are_kept_apart() {
    let imports = table();
    assert!(imports.function("helper").is_some());
    assert!(imports.class("helper").is_none());
    assert!(imports.constant("helper").is_none());
}

#[test]
fn test_resolve_exact_alias() {
    let resolved = table().resolve_class(&Name::parse("Foo")).unwrap();
    assert_eq!(resolved.full(), "App\\Bar\\Foo");
}

#[test]
fn test_resolve_head_alias_reattaches_tail() {
    let resolved = table().resolve_class(&Name::parse("Foo\\Baz")).unwrap();
    assert_eq!(resolved.full(), "App\\Bar\\Foo\\Baz");
    assert!(resolved.was_fully_qualified());
}

#[test]
fn test_resolve_without_match_is_none() {
    assert!(table().resolve_class(&Name::parse("Other\\Foo")).is_none());
    assert!(ImportTable::new().resolve_class(&Name::parse("Foo")).is_none());
}

#[test]
fn test_classes_iterate_in_declaration_order() {
    let imports = table();
    let aliases: Vec<&str> = imports.classes().map(|(alias, _)| alias).collect();
    assert_eq!(aliases, ["Foo", "Alias"]);
}

#[test]
fn test_function_and_constant_imports_do_not_resolve_classes() {
    let mut imports = ImportTable::new();
    imports.add(UseKind::Function, &Name::parse("App\\Util\\Foo"), None);
    imports.add(UseKind::Constant, &Name::parse("App\\Config\\Foo"), None);

    assert!(imports.resolve_class(&Name::parse("Foo")).is_none());
    assert!(imports.resolve_class(&Name::parse("Foo\\Bar")).is_none());

    imports.add(UseKind::Class, &Name::parse("App\\Model\\Foo"), None);
    assert_eq!(
        imports.resolve_class(&Name::parse("Foo")).map(|name| name.full()),
        Some("App\\Model\\Foo".to_string())
    );
}
