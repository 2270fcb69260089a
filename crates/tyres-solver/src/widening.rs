//! Literal widening.
//!
//! `generalize` maps a type to its least specific structural category:
//! literals become their scalar kind and arrays widen their element type.
//! It is a pure structural transform and never consults context.

use crate::types::Type;

impl Type {
    pub fn generalize(&self) -> Type {
        match self {
            Type::Literal(value) => value.general_type(),
            Type::Array(element) => Type::Array(Box::new(element.generalize())),
            _ => self.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/widening_tests.rs"]
mod tests;
