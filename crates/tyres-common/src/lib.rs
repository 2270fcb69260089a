//! Common types and utilities for the tyres type resolver.
//!
//! This crate provides foundational types used across all tyres crates:
//! - Qualified identifiers (`Name`) with head/tail decomposition
//! - The diagnostic model (`Diagnostic`, `DiagnosticCategory`, message table)
//! - Diagnostic sinks (`DiagnosticSink`, `DiagnosticCollector`, `TracingSink`, `NullSink`)

// Qualified names and namespace qualification
pub mod name;
pub use name::{NAMESPACE_SEPARATOR, Name};

// Diagnostic message table and sinks
pub mod diagnostics;
pub use diagnostics::{DiagnosticCollector, DiagnosticSink, NullSink, TracingSink};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub use super::diagnostics::codes::*;
}

/// A single reported problem.
///
/// `node` is the raw index of the syntax node the diagnostic was raised for,
/// when the reporter had one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub message_text: String,
    pub node: Option<u32>,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>, code: u32) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            code,
            message_text: message.into(),
            node: None,
        }
    }

    /// Build a diagnostic from the message table, formatting `{0}`-style
    /// placeholders with `args`.
    ///
    /// Unknown codes produce an empty message rather than failing.
    pub fn from_code(code: u32, args: &[&str]) -> Self {
        let (category, template) = DIAGNOSTIC_MESSAGES
            .iter()
            .find(|m| m.code == code)
            .map_or((DiagnosticCategory::Warning, ""), |m| {
                (m.category, m.message)
            });
        Self {
            category,
            code,
            message_text: format_message(template, args),
            node: None,
        }
    }

    pub fn at_node(mut self, node: u32) -> Self {
        self.node = Some(node);
        self
    }
}

pub use diagnostics::DIAGNOSTIC_MESSAGES;

pub fn get_message_template(code: u32) -> Option<&'static str> {
    DIAGNOSTIC_MESSAGES
        .iter()
        .find(|m| m.code == code)
        .map(|m| m.message)
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}
