//! Node handles and kinds.

use std::fmt;

/// Index of a node within its tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The node kinds context resolution distinguishes. Everything else is
/// `Other`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    SourceFile,
    NamespaceDeclaration,
    NamespaceUseDeclaration,
    NamespaceUseClause,
    ClassDeclaration,
    InterfaceDeclaration,
    TraitDeclaration,
    EnumDeclaration,
    MethodDeclaration,
    FunctionDeclaration,
    PropertyDeclaration,
    Parameter,
    CallExpression,
    ScopedPropertyAccessExpression,
    MemberAccessExpression,
    ObjectCreationExpression,
    QualifiedName,
    DocComment,
    Other,
}

impl SyntaxKind {
    pub fn is_class_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::ClassDeclaration
                | SyntaxKind::InterfaceDeclaration
                | SyntaxKind::TraitDeclaration
                | SyntaxKind::EnumDeclaration
        )
    }

    /// Nodes that own an import table.
    pub fn is_import_scope(self) -> bool {
        matches!(
            self,
            SyntaxKind::SourceFile | SyntaxKind::NamespaceDeclaration
        )
    }
}
