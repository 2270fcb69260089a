use super::*;
use tyres_common::Name;

#[test]
fn test_scalar_keywords() {
    assert_eq!(Type::Mixed.to_string(), "mixed");
    assert_eq!(Type::Missing.to_string(), "<missing>");
    assert_eq!(Type::Unknown.to_string(), "<unknown>");
    assert_eq!(Type::Boolean.to_string(), "bool");
    assert_eq!(Type::Int.to_string(), "int");
}

#[test]
fn test_literals_render_as_source_text() {
    assert_eq!(Type::bool_literal(true).to_string(), "true");
    assert_eq!(Type::int_literal(-12).to_string(), "-12");
    assert_eq!(Type::float_literal(1.5).to_string(), "1.5");
    assert_eq!(Type::string_literal("foo").to_string(), "'foo'");
}

#[test]
fn test_whole_floats_keep_a_fraction() {
    assert_eq!(Type::float_literal(1.0).to_string(), "1.0");
    assert_eq!(Type::float_literal(-0.0).to_string(), "-0.0");
    assert_eq!(
        crate::TypeFactory::from_string(&Type::float_literal(1.0).to_string()),
        Type::float_literal(1.0)
    );
    assert_eq!(
        crate::TypeFactory::from_string(&Type::float_literal(1e20).to_string()),
        Type::float_literal(1e20)
    );
}

#[test]
fn test_string_literals_escape_quotes_and_backslashes() {
    let quoted = Type::string_literal("it's");
    assert_eq!(quoted.to_string(), "'it\\'s'");
    assert_eq!(crate::TypeFactory::from_string(&quoted.to_string()), quoted);

    let trailing = Type::string_literal("C:\\");
    assert_eq!(trailing.to_string(), "'C:\\\\'");
    assert_eq!(crate::TypeFactory::from_string(&trailing.to_string()), trailing);
}

#[test]
fn test_class_renders_without_leading_separator() {
    assert_eq!(Type::Class(Name::parse("\\App\\Foo")).to_string(), "App\\Foo");
}

#[test]
fn test_generic_rendering() {
    let ty = Type::generic(Name::parse("Map"), vec![Type::String, Type::class("Foo")]);
    assert_eq!(ty.to_string(), "Map<string,Foo>");
}

#[test]
fn test_array_rendering() {
    assert_eq!(Type::array(Type::Mixed).to_string(), "array");
    assert_eq!(Type::array(Type::class("Foo")).to_string(), "Foo[]");
    assert_eq!(
        Type::array(Type::Union(vec![Type::Int, Type::String])).to_string(),
        "array<int|string>"
    );
}

#[test]
fn test_callable_and_union_rendering() {
    let callable = Type::callable(vec![Type::Int, Type::class("Foo")], Type::Void);
    assert_eq!(callable.to_string(), "callable(int, Foo): void");
    assert_eq!(Type::Union(vec![Type::class("Foo"), Type::Null]).to_string(), "Foo|null");
}

#[test]
fn test_pseudo_types() {
    assert_eq!(Type::SelfType.to_string(), "self");
    assert_eq!(Type::Static.to_string(), "static");
    assert_eq!(Type::Parent.to_string(), "parent");
}
