//! Type factory: builds `Type` values from textual annotations.
//!
//! Annotations come from parsed signatures and structured comments, so the
//! accepted grammar is the comment-annotation dialect:
//!
//! ```text
//! union    := nullable ('|' nullable)*
//! nullable := '?' postfix | postfix
//! postfix  := primary ('[' ']')*
//! primary  := '(' union ')' | number | string | keyword | name type-args?
//!           | ('callable' | 'Closure') ('(' params? ')' (':' nullable)?)?
//!           | ('array' | 'list') type-args?
//! ```
//!
//! Parsing never fails: empty text is `Missing`, anything outside the
//! grammar is `Unknown`, and so is anything nested deeper than
//! `MAX_ANNOTATION_DEPTH`.

use crate::types::Type;
use tyres_common::Name;

/// Maximum nesting of groups, type arguments, callable signatures and
/// `[]` suffixes in one annotation.
pub const MAX_ANNOTATION_DEPTH: u32 = 64;

pub struct TypeFactory;

impl TypeFactory {
    pub fn from_string(text: &str) -> Type {
        if text.trim().is_empty() {
            return Type::Missing;
        }

        let Some(tokens) = tokenize(text) else {
            tracing::debug!(text, "type annotation contains unexpected characters");
            return Type::Unknown;
        };

        let mut parser = AnnotationParser {
            tokens,
            pos: 0,
            depth: 0,
        };
        match parser.parse_union() {
            Some(ty) if parser.at_end() => ty,
            _ => {
                tracing::debug!(text, "type annotation is malformed");
                Type::Unknown
            }
        }
    }

    pub fn unknown() -> Type {
        Type::Unknown
    }

    pub fn undefined() -> Type {
        Type::Missing
    }

    pub fn mixed() -> Type {
        Type::Mixed
    }

    /// Build a union, flattening nested unions.
    ///
    /// A single member collapses to that member; no members is `Missing`.
    pub fn union(members: impl IntoIterator<Item = Type>) -> Type {
        let mut flat = Vec::new();
        for member in members {
            match member {
                Type::Union(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        if flat.len() > 1 {
            return Type::Union(flat);
        }
        flat.pop().unwrap_or(Type::Missing)
    }

    pub fn nullable(inner: Type) -> Type {
        if inner == Type::Null {
            return inner;
        }
        Self::union([inner, Type::Null])
    }

    /// Parse numeric text into the most specific numeric literal.
    ///
    /// Follows the host language's numeric cast: `0x`, `0b`, `0o` and
    /// leading-zero octal prefixes select the radix, a fractional part or
    /// exponent selects a float, `_` separators are ignored and any trailing
    /// garbage is dropped (text with no numeric prefix is `0`).
    pub fn from_numeric_string(text: &str) -> Type {
        let trimmed = text.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let cleaned: String = unsigned
            .chars()
            .filter(|c| *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        let sign: i64 = if negative { -1 } else { 1 };

        for (prefix, radix) in [("0x", 16), ("0b", 2), ("0o", 8)] {
            if let Some(digits) = cleaned.strip_prefix(prefix) {
                return Type::int_literal(sign * parse_radix_prefix(digits, radix));
            }
        }

        let float_text = float_prefix(&cleaned);
        if float_text.contains(['.', 'e']) {
            let value: f64 = float_text.parse().unwrap_or(0.0);
            return Type::float_literal(if negative { -value } else { value });
        }

        if cleaned.len() > 1
            && cleaned.starts_with('0')
            && cleaned.bytes().all(|b| b.is_ascii_digit())
        {
            return Type::int_literal(sign * parse_radix_prefix(&cleaned[1..], 8));
        }

        match float_text.parse::<i64>() {
            Ok(value) => Type::int_literal(sign * value),
            // Integer overflow promotes to float
            Err(_) if !float_text.is_empty() => {
                let value: f64 = float_text.parse().unwrap_or(0.0);
                Type::float_literal(if negative { -value } else { value })
            }
            Err(_) => Type::int_literal(0),
        }
    }
}

fn parse_radix_prefix(text: &str, radix: u32) -> i64 {
    let end = text
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map_or(text.len(), |(i, _)| i);
    i64::from_str_radix(&text[..end], radix).unwrap_or(0)
}

/// Longest leading slice of `text` that reads as a decimal number,
/// including an optional fraction and exponent.
fn float_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if end > 0 && end < bytes.len() && bytes[end] == b'e' {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let digits_start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > digits_start {
            end = exp;
        }
    }
    &text[..end]
}

// =============================================================================
// Tokenizer
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Ident(String),
    Number(String),
    Str(String),
    Pipe,
    Question,
    Lt,
    Gt,
    Comma,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Colon,
    Ellipsis,
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '\\' || c == '$' || !c.is_ascii()
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\\' || c == '$' || !c.is_ascii()
}

fn tokenize(text: &str) -> Option<Vec<Token>> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let single = match c {
            '|' => Some(Token::Pipe),
            '?' => Some(Token::Question),
            '<' => Some(Token::Lt),
            '>' => Some(Token::Gt),
            ',' => Some(Token::Comma),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            '[' => Some(Token::LBracket),
            ']' => Some(Token::RBracket),
            ':' => Some(Token::Colon),
            _ => None,
        };
        if let Some(token) = single {
            tokens.push(token);
            i += 1;
            continue;
        }

        if c.is_whitespace() {
            i += 1;
        } else if c == '.' {
            if chars.get(i + 1) != Some(&'.') || chars.get(i + 2) != Some(&'.') {
                return None;
            }
            tokens.push(Token::Ellipsis);
            i += 3;
        } else if c == '\'' || c == '"' {
            let (value, end) = quoted_string(&chars, i + 1, c)?;
            tokens.push(Token::Str(value));
            i = end + 1;
        } else if c.is_ascii_digit()
            || (c == '-' && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit()))
        {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_alphanumeric() || matches!(chars[i], '.' | '_'))
            {
                i += 1;
            }
            tokens.push(Token::Number(chars[start..i].iter().collect()));
        } else if is_ident_start(c) {
            let start = i;
            while i < chars.len() && is_ident_char(chars[i]) {
                i += 1;
            }
            tokens.push(Token::Ident(chars[start..i].iter().collect()));
        } else {
            return None;
        }
    }

    Some(tokens)
}

/// Read a quoted string starting after its opening `quote`. A backslash
/// escapes a following backslash or `quote`; any other backslash is kept.
///
/// Returns the value and the index of the closing quote.
fn quoted_string(chars: &[char], start: usize, quote: char) -> Option<(String, usize)> {
    let mut value = String::new();
    let mut i = start;
    while let Some(&c) = chars.get(i) {
        if c == quote {
            return Some((value, i));
        }
        match chars.get(i + 1) {
            Some(&next) if c == '\\' && (next == '\\' || next == quote) => {
                value.push(next);
                i += 2;
            }
            _ => {
                value.push(c);
                i += 1;
            }
        }
    }
    None
}

// =============================================================================
// Parser
// =============================================================================

struct AnnotationParser {
    tokens: Vec<Token>,
    pos: usize,
    depth: u32,
}

impl AnnotationParser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            return true;
        }
        false
    }

    fn expect(&mut self, expected: &Token) -> Option<()> {
        self.eat(expected).then_some(())
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn parse_union(&mut self) -> Option<Type> {
        if self.depth >= MAX_ANNOTATION_DEPTH {
            tracing::trace!(depth = self.depth, "annotation nesting limit reached");
            return None;
        }
        self.depth += 1;
        let union = self.parse_union_members();
        self.depth -= 1;
        union
    }

    fn parse_union_members(&mut self) -> Option<Type> {
        let mut members = vec![self.parse_nullable()?];
        while self.eat(&Token::Pipe) {
            members.push(self.parse_nullable()?);
        }
        Some(TypeFactory::union(members))
    }

    fn parse_nullable(&mut self) -> Option<Type> {
        if self.eat(&Token::Question) {
            let inner = self.parse_postfix()?;
            return Some(TypeFactory::nullable(inner));
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Option<Type> {
        let mut ty = self.parse_primary()?;
        let mut dimensions = 0;
        while self.eat(&Token::LBracket) {
            self.expect(&Token::RBracket)?;
            dimensions += 1;
            if self.depth + dimensions > MAX_ANNOTATION_DEPTH {
                return None;
            }
            ty = Type::array(ty);
        }
        Some(ty)
    }

    fn parse_primary(&mut self) -> Option<Type> {
        match self.bump()? {
            Token::LParen => {
                let inner = self.parse_union()?;
                self.expect(&Token::RParen)?;
                Some(inner)
            }
            Token::Number(text) => Some(TypeFactory::from_numeric_string(&text)),
            Token::Str(text) => Some(Type::string_literal(text)),
            Token::Ident(ident) => self.parse_named(&ident),
            _ => None,
        }
    }

    fn parse_named(&mut self, ident: &str) -> Option<Type> {
        let keyword = ident.to_ascii_lowercase();
        let ty = match keyword.as_str() {
            "mixed" => Type::Mixed,
            "null" => Type::Null,
            "void" => Type::Void,
            "bool" | "boolean" => Type::Boolean,
            "int" | "integer" => Type::Int,
            "float" | "double" => Type::Float,
            "string" => Type::String,
            "true" => Type::bool_literal(true),
            "false" => Type::bool_literal(false),
            "self" => Type::SelfType,
            "static" | "$this" => Type::Static,
            "parent" => Type::Parent,
            "array" | "list" => return self.parse_array_arguments(),
            "callable" => return self.parse_callable_signature(None),
            "closure" | "\\closure" => return self.parse_callable_signature(Some(Name::parse(ident))),
            _ => {
                if ident.starts_with('$') {
                    return None;
                }
                let name = Name::parse(ident);
                if name.is_empty() {
                    return None;
                }
                if self.peek() == Some(&Token::Lt) {
                    let arguments = self.parse_type_arguments()?;
                    return Some(Type::generic(name, arguments));
                }
                Type::Class(name)
            }
        };
        Some(ty)
    }

    fn parse_type_arguments(&mut self) -> Option<Vec<Type>> {
        self.expect(&Token::Lt)?;
        let mut arguments = vec![self.parse_union()?];
        while self.eat(&Token::Comma) {
            arguments.push(self.parse_union()?);
        }
        self.expect(&Token::Gt)?;
        Some(arguments)
    }

    fn parse_array_arguments(&mut self) -> Option<Type> {
        if self.peek() != Some(&Token::Lt) {
            return Some(Type::array(Type::Mixed));
        }
        let mut arguments = self.parse_type_arguments()?;
        // `array<K, V>`: only the value type is tracked
        Some(Type::array(arguments.pop()?))
    }

    fn parse_callable_signature(&mut self, closure: Option<Name>) -> Option<Type> {
        if !self.eat(&Token::LParen) {
            return Some(match closure {
                Some(name) => Type::Class(name),
                None => Type::callable(Vec::new(), Type::Mixed),
            });
        }

        let mut parameters = Vec::new();
        if !self.eat(&Token::RParen) {
            loop {
                parameters.push(self.parse_parameter()?);
                if self.eat(&Token::Comma) {
                    continue;
                }
                self.expect(&Token::RParen)?;
                break;
            }
        }

        let return_type = if self.eat(&Token::Colon) {
            self.parse_nullable()?
        } else {
            Type::Mixed
        };
        Some(Type::callable(parameters, return_type))
    }

    /// A parameter type, optionally followed by `...` and a variable name.
    fn parse_parameter(&mut self) -> Option<Type> {
        let ty = self.parse_union()?;
        self.eat(&Token::Ellipsis);
        if let Some(Token::Ident(name)) = self.peek()
            && name.starts_with('$')
        {
            self.pos += 1;
        }
        Some(ty)
    }
}

#[cfg(test)]
#[path = "../tests/type_factory_tests.rs"]
mod tests;
