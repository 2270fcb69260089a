use super::*;
use crate::types::LiteralValue;

#[test]
fn test_literals_widen_to_scalar_kind() {
    assert_eq!(Type::int_literal(1).generalize(), Type::Int);
    assert_eq!(Type::float_literal(1.5).generalize(), Type::Float);
    assert_eq!(Type::bool_literal(false).generalize(), Type::Boolean);
    assert_eq!(Type::string_literal("a").generalize(), Type::String);
}

#[test]
fn test_array_widens_element() {
    let array = Type::array(Type::array(Type::string_literal("x")));
    assert_eq!(array.generalize(), Type::array(Type::array(Type::String)));
}

#[test]
fn test_general_types_are_fixed_points() {
    for ty in [
        Type::Int,
        Type::Mixed,
        Type::Null,
        Type::class("Foo"),
        Type::Union(vec![Type::int_literal(1), Type::Null]),
        Type::callable(vec![Type::int_literal(1)], Type::Int),
    ] {
        assert_eq!(ty.generalize(), ty);
        assert_eq!(ty.generalize().generalize(), ty.generalize());
    }
}

#[test]
fn test_generalize_leaves_input_untouched() {
    let literal = Type::Literal(LiteralValue::Int(7));
    let _ = literal.generalize();
    assert_eq!(literal, Type::int_literal(7));
}
