//! Type representation.
//!
//! `Type` is a closed set of variants. Operations over types match on it
//! exhaustively instead of dispatching through an open hierarchy, so adding
//! a variant forces every rule to say what it does with it.
//!
//! Types are plain values: every transformation (widening, resolution)
//! builds a new `Type` and leaves its input untouched.

use serde::{Deserialize, Serialize};
use tyres_common::Name;

/// Value captured by a literal type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl LiteralValue {
    /// Truthiness under the host language's boolean cast.
    ///
    /// `0`, `0.0`, `""` and `"0"` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            LiteralValue::Bool(value) => *value,
            LiteralValue::Int(value) => *value != 0,
            LiteralValue::Float(value) => *value != 0.0,
            LiteralValue::String(value) => !(value.is_empty() || value == "0"),
        }
    }

    /// Text the value converts to under the host language's string cast.
    pub fn cast_to_string(&self) -> String {
        match self {
            LiteralValue::Bool(true) => "1".to_string(),
            LiteralValue::Bool(false) => String::new(),
            LiteralValue::Int(value) => value.to_string(),
            LiteralValue::Float(value) => value.to_string(),
            LiteralValue::String(value) => value.clone(),
        }
    }

    /// The non-literal scalar this value belongs to.
    pub fn general_type(&self) -> Type {
        match self {
            LiteralValue::Bool(_) => Type::Boolean,
            LiteralValue::Int(_) => Type::Int,
            LiteralValue::Float(_) => Type::Float,
            LiteralValue::String(_) => Type::String,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Type {
    /// Top type: any value.
    Mixed,
    /// Absent / undefined type.
    Missing,
    /// Resolution could not determine a type.
    Unknown,
    Null,
    Void,
    Boolean,
    Int,
    Float,
    String,
    Literal(LiteralValue),
    Class(Name),
    Generic {
        class: Name,
        arguments: Vec<Type>,
    },
    /// Container of values of a single type; keys are not tracked.
    Array(Box<Type>),
    Callable {
        parameters: Vec<Type>,
        return_type: Box<Type>,
    },
    Union(Vec<Type>),
    SelfType,
    Static,
    Parent,
}

impl Type {
    pub fn class(name: &str) -> Type {
        Type::Class(Name::parse(name))
    }

    pub fn array(element: Type) -> Type {
        Type::Array(Box::new(element))
    }

    pub fn generic(class: Name, arguments: Vec<Type>) -> Type {
        Type::Generic { class, arguments }
    }

    pub fn callable(parameters: Vec<Type>, return_type: Type) -> Type {
        Type::Callable {
            parameters,
            return_type: Box::new(return_type),
        }
    }

    pub fn bool_literal(value: bool) -> Type {
        Type::Literal(LiteralValue::Bool(value))
    }

    pub fn int_literal(value: i64) -> Type {
        Type::Literal(LiteralValue::Int(value))
    }

    pub fn float_literal(value: f64) -> Type {
        Type::Literal(LiteralValue::Float(value))
    }

    pub fn string_literal(value: impl Into<String>) -> Type {
        Type::Literal(LiteralValue::String(value.into()))
    }

    /// False only for the absent and unknown markers.
    pub fn is_defined(&self) -> bool {
        !matches!(self, Type::Missing | Type::Unknown)
    }

    /// Scalar-like types carry no names and are never rewritten by
    /// context resolution.
    pub fn is_scalar_like(&self) -> bool {
        match self {
            Type::Mixed
            | Type::Missing
            | Type::Unknown
            | Type::Null
            | Type::Void
            | Type::Boolean
            | Type::Int
            | Type::Float
            | Type::String
            | Type::Literal(_) => true,
            Type::Class(_)
            | Type::Generic { .. }
            | Type::Array(_)
            | Type::Callable { .. }
            | Type::Union(_)
            | Type::SelfType
            | Type::Static
            | Type::Parent => false,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Type::Literal(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Type::Boolean | Type::Literal(LiteralValue::Bool(_)))
    }

    pub fn literal_value(&self) -> Option<&LiteralValue> {
        match self {
            Type::Literal(value) => Some(value),
            _ => None,
        }
    }

    /// The class name of a class-shaped type (plain or generic).
    pub fn class_name(&self) -> Option<&Name> {
        match self {
            Type::Class(name) | Type::Generic { class: name, .. } => Some(name),
            _ => None,
        }
    }

    /// Rebuild a class-shaped type under a different name, keeping generic
    /// arguments. Other types are returned unchanged.
    pub fn with_class_name(self, name: Name) -> Type {
        match self {
            Type::Class(_) => Type::Class(name),
            Type::Generic { arguments, .. } => Type::Generic {
                class: name,
                arguments,
            },
            other => other,
        }
    }

    /// Mark every class name reachable from this type as fully qualified.
    pub fn into_fully_qualified(self) -> Type {
        match self {
            Type::Class(name) => Type::Class(name.into_fully_qualified()),
            Type::Generic { class, arguments } => Type::Generic {
                class: class.into_fully_qualified(),
                arguments,
            },
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
