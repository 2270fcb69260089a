//! Type Algebra
//!
//! This crate implements the value-level side of type resolution:
//!
//! - **`Type`**: a closed set of type variants (scalars, literals, classes,
//!   generics, arrays, callables, unions and the `self`/`static`/`parent`
//!   pseudo-types)
//! - **Widening**: `Type::generalize` maps literals to their scalar kinds
//! - **`TypeFactory`**: parses textual annotations into `Type` values
//! - **Coercions**: truthiness and numeric casts, trinary mapping and
//!   widening of several types to a common one
//!
//! Nothing here knows about syntax trees; context-dependent resolution lives
//! in the checker.
mod coercion;
mod format;
mod trinary;
mod type_factory;
mod types;
mod widening;

pub use coercion::{
    first_defined, general_type_from_types, to_bool, to_number, trinary_to_boolean, value_or_null,
};
pub use trinary::Trinary;
pub use type_factory::{MAX_ANNOTATION_DEPTH, TypeFactory};
pub use types::{LiteralValue, Type};
