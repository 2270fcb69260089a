//! Coercion and combination utilities.
//!
//! Free functions used wherever resolved types have to be combined (branches
//! of an expression) or coerced (casts, conditions). They operate purely on
//! `Type` values and never consult syntax or context.

use crate::trinary::Trinary;
use crate::type_factory::TypeFactory;
use crate::types::{LiteralValue, Type};

/// Returns the first defined type.
///
/// An empty slice yields `Missing`. When none of a non-empty slice is
/// defined, the last candidate examined is returned as-is.
pub fn first_defined(types: &[Type]) -> Type {
    let Some(last) = types.last() else {
        return TypeFactory::undefined();
    };
    types
        .iter()
        .find(|ty| ty.is_defined())
        .unwrap_or(last)
        .clone()
}

/// The captured value of a literal type, if any.
pub fn value_or_null(ty: &Type) -> Option<&LiteralValue> {
    ty.literal_value()
}

/// Coerce to a boolean type.
///
/// Literals become the boolean literal of their truthiness and `null` is
/// `false`. Boolean types pass through; everything else is plain `bool`.
pub fn to_bool(ty: &Type) -> Type {
    match ty {
        Type::Literal(value) => Type::bool_literal(value.is_truthy()),
        Type::Null => Type::bool_literal(false),
        // Also the identity for `bool` itself
        _ => Type::Boolean,
    }
}

/// Coerce to a numeric type.
///
/// Literals are re-read through their string form into the most specific
/// numeric literal; everything else is plain `int`.
pub fn to_number(ty: &Type) -> Type {
    match ty {
        Type::Literal(value) => TypeFactory::from_numeric_string(&value.cast_to_string()),
        _ => Type::Int,
    }
}

pub fn trinary_to_boolean(trinary: Trinary) -> Type {
    match trinary {
        Trinary::True => Type::bool_literal(true),
        Trinary::False => Type::bool_literal(false),
        Trinary::Maybe => Type::Boolean,
    }
}

/// Widen a set of types to one common type.
///
/// Every type is generalized; if all results are structurally equal that
/// type is returned, otherwise `Mixed`. No types at all is `Missing`.
pub fn general_type_from_types(types: &[Type]) -> Type {
    let mut common: Option<Type> = None;
    for ty in types {
        let general = ty.generalize();
        match &common {
            None => common = Some(general),
            Some(existing) if *existing != general => {
                tracing::trace!(%existing, %general, "general type diverges, widening to mixed");
                return Type::Mixed;
            }
            Some(_) => {}
        }
    }
    common.unwrap_or(Type::Missing)
}

#[cfg(test)]
#[path = "../tests/coercion_tests.rs"]
mod tests;
