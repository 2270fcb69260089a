use super::*;

#[test]
fn test_missing_and_unknown_are_not_defined() {
    assert!(!Type::Missing.is_defined());
    assert!(!Type::Unknown.is_defined());
    assert!(Type::Null.is_defined());
    assert!(Type::Mixed.is_defined());
    assert!(Type::class("Foo").is_defined());
}

#[test]
fn test_scalar_like_classification() {
    assert!(Type::Int.is_scalar_like());
    assert!(Type::int_literal(3).is_scalar_like());
    assert!(Type::Unknown.is_scalar_like());
    assert!(!Type::class("Foo").is_scalar_like());
    assert!(!Type::array(Type::Int).is_scalar_like());
    assert!(!Type::SelfType.is_scalar_like());
}

#[test]
fn test_literal_truthiness() {
    assert!(!LiteralValue::Int(0).is_truthy());
    assert!(LiteralValue::Int(-1).is_truthy());
    assert!(!LiteralValue::Float(0.0).is_truthy());
    assert!(!LiteralValue::String(String::new()).is_truthy());
    assert!(!LiteralValue::String("0".into()).is_truthy());
    assert!(LiteralValue::String("00".into()).is_truthy());
    assert!(LiteralValue::Bool(true).is_truthy());
}

#[test]
fn test_literal_string_cast() {
    assert_eq!(LiteralValue::Bool(true).cast_to_string(), "1");
    assert_eq!(LiteralValue::Bool(false).cast_to_string(), "");
    assert_eq!(LiteralValue::Float(1.5).cast_to_string(), "1.5");
}

#[test]
fn test_with_class_name_keeps_generic_arguments() {
    let generic = Type::generic(Name::parse("Collection"), vec![Type::Int, Type::class("Foo")]);
    let renamed = generic.with_class_name(Name::fully_qualified("App\\Collection"));

    let Type::Generic { class, arguments } = renamed else {
        panic!("expected generic type");
    };
    assert_eq!(class.full(), "App\\Collection");
    assert_eq!(arguments, vec![Type::Int, Type::class("Foo")]);
}

#[test]
fn test_with_class_name_ignores_non_class_types() {
    assert_eq!(Type::Int.with_class_name(Name::parse("Foo")), Type::Int);
}

#[test]
fn test_class_name_query() {
    assert_eq!(Type::class("Foo").class_name().map(Name::full).as_deref(), Some("Foo"));
    assert!(Type::array(Type::class("Foo")).class_name().is_none());
}

#[test]
fn test_type_serializes_with_variant_tags() {
    let json = serde_json::to_value(Type::array(Type::int_literal(1))).unwrap();
    assert_eq!(json, serde_json::json!({ "Array": { "Literal": { "Int": 1 } } }));
}
