//! Context-aware type resolution for namespaced, class-oriented source code.
//!
//! The workspace is split by concern, and this crate re-exports all of it:
//! - `common` - qualified names and diagnostics
//! - `solver` - the type algebra, annotation parsing and coercions
//! - `syntax` - the syntax tree capability and `NodeArena`
//! - `checker` - `ContextResolver`
//!
//! ```ignore
//! let resolver = ContextResolver::new(&tree, &FactoryReflector);
//! let mut diagnostics = DiagnosticCollector::new();
//! let ty = resolver.resolve(node, Some("Collection<self>".into()), None, &mut diagnostics);
//! ```

pub use tyres_checker as checker;
pub use tyres_common as common;
pub use tyres_solver as solver;
pub use tyres_syntax as syntax;

pub use tyres_checker::{ContextResolver, FactoryReflector, TypeInput, TypeReflector};
pub use tyres_common::{Diagnostic, DiagnosticCollector, DiagnosticSink, Name, NullSink};
pub use tyres_solver::{Type, TypeFactory};
pub use tyres_syntax::{NodeArena, NodeIndex, SyntaxTree};

// Tracing configuration (TYRES_LOG / TYRES_LOG_FORMAT)
pub mod tracing_config;
