//! The `SyntaxTree` capability.

use crate::MAX_TREE_WALK_ITERATIONS;
use crate::imports::ImportTable;
use crate::node::{NodeIndex, SyntaxKind};
use tyres_common::Name;

/// Read-only access to a parsed source tree.
///
/// Implementations must be safe to share across threads when resolutions run
/// in parallel; the resolver never mutates the tree.
pub trait SyntaxTree {
    fn kind(&self, node: NodeIndex) -> Option<SyntaxKind>;

    fn parent(&self, node: NodeIndex) -> Option<NodeIndex>;

    /// Raw source text of the node.
    fn text(&self, node: NodeIndex) -> &str;

    /// Name of the namespace declaration enclosing `node`, when that
    /// declaration is named.
    fn namespace_name(&self, node: NodeIndex) -> Option<Name>;

    /// Import table of the lexical scope `node` is in.
    fn import_table(&self, node: NodeIndex) -> Option<&ImportTable>;

    /// Fully namespaced name of a class-like declaration.
    fn class_name(&self, class: NodeIndex) -> Option<Name>;

    /// Resolved, fully qualified name of the base class a class declaration
    /// extends, if it declares one.
    fn base_class_name(&self, class: NodeIndex) -> Option<Name>;

    /// Walk up from the parent of `node` and return the first ancestor whose
    /// kind satisfies `matches`.
    fn first_ancestor(
        &self,
        node: NodeIndex,
        matches: &dyn Fn(SyntaxKind) -> bool,
    ) -> Option<NodeIndex> {
        let mut current = self.parent(node);
        let mut iterations = 0;
        while let Some(idx) = current {
            iterations += 1;
            if iterations > MAX_TREE_WALK_ITERATIONS {
                return None;
            }
            if self.kind(idx).is_some_and(matches) {
                return Some(idx);
            }
            current = self.parent(idx);
        }
        None
    }
}
