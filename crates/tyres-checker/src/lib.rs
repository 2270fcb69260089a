//! Context-aware type resolution.
//!
//! This crate is organized into:
//! - `context_resolver` - `ContextResolver`, the resolution rule chain
//! - `reflector` - `TypeReflector`, the name-to-type capability
//! - `scope_finder` - queries for enclosing classes and node roles
//!
//! The resolver reads a `tyres_syntax::SyntaxTree` and produces
//! `tyres_solver::Type` values; it holds no state between calls, so callers
//! that want caching own it.

pub mod context_resolver;
pub mod reflector;
pub mod scope_finder;

pub use context_resolver::{ContextResolver, TypeInput};
pub use reflector::{FactoryReflector, TypeReflector};
