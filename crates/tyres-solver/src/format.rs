//! Textual rendering of types, in annotation syntax.

use crate::types::{LiteralValue, Type};
use std::fmt;

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Bool(value) => write!(f, "{value}"),
            LiteralValue::Int(value) => write!(f, "{value}"),
            // Always with a fraction or exponent, so it reads back as a float
            LiteralValue::Float(value) => write!(f, "{value:?}"),
            LiteralValue::String(value) => write_quoted(f, value),
        }
    }
}

/// Single-quoted with `\` and `'` escaped, the form the annotation
/// tokenizer reads back.
fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("'")?;
    for c in value.chars() {
        if matches!(c, '\\' | '\'') {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("'")
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Mixed => f.write_str("mixed"),
            Type::Missing => f.write_str("<missing>"),
            Type::Unknown => f.write_str("<unknown>"),
            Type::Null => f.write_str("null"),
            Type::Void => f.write_str("void"),
            Type::Boolean => f.write_str("bool"),
            Type::Int => f.write_str("int"),
            Type::Float => f.write_str("float"),
            Type::String => f.write_str("string"),
            Type::Literal(value) => write!(f, "{value}"),
            Type::Class(name) => write!(f, "{name}"),
            Type::Generic { class, arguments } => {
                write!(f, "{class}<")?;
                write_list(f, arguments, ",")?;
                f.write_str(">")
            }
            Type::Array(element) => match element.as_ref() {
                Type::Mixed | Type::Missing => f.write_str("array"),
                Type::Union(_) | Type::Callable { .. } => write!(f, "array<{element}>"),
                _ => write!(f, "{element}[]"),
            },
            Type::Callable {
                parameters,
                return_type,
            } => {
                f.write_str("callable(")?;
                write_list(f, parameters, ", ")?;
                write!(f, "): {return_type}")
            }
            Type::Union(members) => write_list(f, members, "|"),
            Type::SelfType => f.write_str("self"),
            Type::Static => f.write_str("static"),
            Type::Parent => f.write_str("parent"),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, types: &[Type], separator: &str) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{ty}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
