//! Diagnostic message table and the sinks diagnostics are reported into.
//!
//! Resolution never fails; problems it notices along the way are reported
//! as warnings through a `DiagnosticSink` handed down by the caller.

use crate::{Diagnostic, DiagnosticCategory, DiagnosticMessage};

pub mod codes {
    /// `self` or `static` used where no enclosing class exists.
    pub const SELF_OUTSIDE_CLASS: u32 = 9001;
    /// `parent` used where no enclosing class exists.
    pub const PARENT_OUTSIDE_CLASS: u32 = 9002;
    /// `parent` used inside a class without a base class.
    pub const PARENT_WITHOUT_BASE_CLASS: u32 = 9003;
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: codes::SELF_OUTSIDE_CLASS,
        category: DiagnosticCategory::Warning,
        message: "\"{0}\" keyword used outside of class scope",
    },
    DiagnosticMessage {
        code: codes::PARENT_OUTSIDE_CLASS,
        category: DiagnosticCategory::Warning,
        message: "\"parent\" keyword used outside of class scope",
    },
    DiagnosticMessage {
        code: codes::PARENT_WITHOUT_BASE_CLASS,
        category: DiagnosticCategory::Warning,
        message: "\"parent\" keyword used but class \"{0}\" does not extend anything",
    },
];

/// Receiver for diagnostics raised while resolving.
///
/// Implementations must not panic; reporting is fire-and-forget.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// A sink that accumulates diagnostics for later inspection.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the collected diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take the collected diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Warning)
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Forwards diagnostics to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.category {
            DiagnosticCategory::Error => tracing::error!(
                code = diagnostic.code,
                node = diagnostic.node,
                "{}",
                diagnostic.message_text
            ),
            DiagnosticCategory::Warning => tracing::warn!(
                code = diagnostic.code,
                node = diagnostic.node,
                "{}",
                diagnostic.message_text
            ),
            DiagnosticCategory::Suggestion | DiagnosticCategory::Message => tracing::info!(
                code = diagnostic.code,
                node = diagnostic.node,
                "{}",
                diagnostic.message_text
            ),
        }
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
