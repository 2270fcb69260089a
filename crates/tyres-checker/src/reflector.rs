//! Name-to-type lookup.
//!
//! The resolver never builds types from text itself; it asks a
//! `TypeReflector`. Hosts with class metadata can return richer types here
//! (e.g. knowing that a name is an interface); the default simply parses.

use tyres_solver::{Type, TypeFactory};

pub trait TypeReflector {
    /// Produce a type for annotation text. Must not fail: unparseable text
    /// yields `Type::Unknown`.
    fn type_from_str(&self, text: &str) -> Type;
}

/// Reflector backed by `TypeFactory` alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct FactoryReflector;

impl TypeReflector for FactoryReflector {
    fn type_from_str(&self, text: &str) -> Type {
        TypeFactory::from_string(text)
    }
}

impl<F> TypeReflector for F
where
    F: Fn(&str) -> Type,
{
    fn type_from_str(&self, text: &str) -> Type {
        self(text)
    }
}
