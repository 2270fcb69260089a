//! Syntax tree capability for context resolution.
//!
//! The resolver does not parse source text. It consumes an already built
//! tree through the `SyntaxTree` trait:
//! - `node` - `NodeIndex` and `SyntaxKind`
//! - `imports` - per-scope `ImportTable` (alias -> fully qualified name)
//! - `tree` - the `SyntaxTree` trait itself
//! - `node_arena` - `NodeArena`, an in-memory tree implementing `SyntaxTree`

pub mod imports;
pub mod node;
pub mod node_arena;
pub mod tree;

pub use imports::{ImportTable, UseKind};
pub use node::{NodeIndex, SyntaxKind};
pub use node_arena::NodeArena;
pub use tree::SyntaxTree;

/// Upper bound on parent-chain walks, guarding against malformed trees.
pub const MAX_TREE_WALK_ITERATIONS: usize = 10_000;
