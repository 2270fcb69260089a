//! Scope Finding
//!
//! Queries over the syntax tree that decide which resolution rule applies
//! to a node:
//! - Finding the enclosing class-like declaration (for `self`/`static`)
//! - Finding the enclosing class declaration (for `parent`)
//! - Recognising bare call-expression callees and `use` clause names

use tyres_syntax::{NodeIndex, SyntaxKind, SyntaxTree};

/// Nearest enclosing class, interface, trait or enum declaration.
pub fn find_enclosing_class_like<T>(tree: &T, node: NodeIndex) -> Option<NodeIndex>
where
    T: SyntaxTree + ?Sized,
{
    tree.first_ancestor(node, &SyntaxKind::is_class_like)
}

/// Nearest enclosing class declaration. Interfaces, traits and enums are
/// skipped.
pub fn find_enclosing_class<T>(tree: &T, node: NodeIndex) -> Option<NodeIndex>
where
    T: SyntaxTree + ?Sized,
{
    tree.first_ancestor(node, &|kind| kind == SyntaxKind::ClassDeclaration)
}

/// True when `node` is the callee of a call expression and not part of a
/// scoped (`Foo::bar()`) access.
pub fn is_bare_callee<T>(tree: &T, node: NodeIndex) -> bool
where
    T: SyntaxTree + ?Sized,
{
    if tree.kind(node) == Some(SyntaxKind::ScopedPropertyAccessExpression) {
        return false;
    }
    tree.parent(node)
        .and_then(|parent| tree.kind(parent))
        .is_some_and(|kind| kind == SyntaxKind::CallExpression)
}

/// True when `node` is the name inside a `use` clause.
pub fn is_use_clause_name<T>(tree: &T, node: NodeIndex) -> bool
where
    T: SyntaxTree + ?Sized,
{
    tree.parent(node)
        .and_then(|parent| tree.kind(parent))
        .is_some_and(|kind| kind == SyntaxKind::NamespaceUseClause)
}
