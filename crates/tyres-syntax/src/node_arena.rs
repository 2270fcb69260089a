//! NodeArena: an in-memory syntax tree.
//!
//! Nodes are stored in a flat vector and addressed by `NodeIndex`. Hosts
//! that already own a parsed tree implement `SyntaxTree` directly; the arena
//! serves hosts that build trees programmatically and is what the resolver's
//! own tests run against.
//!
//! Scoping follows the host language: a node belongs to the namespace
//! declaration it is nested under, and `use` clauses register into the
//! import table of the nearest enclosing source file or namespace.

use crate::MAX_TREE_WALK_ITERATIONS;
use crate::imports::{ImportTable, UseKind};
use crate::node::{NodeIndex, SyntaxKind};
use crate::tree::SyntaxTree;
use tyres_common::Name;

#[derive(Debug, Clone)]
enum NodeData {
    Plain,
    Scope {
        namespace: Option<Name>,
        imports: ImportTable,
    },
    ClassLike {
        base: Option<Name>,
    },
}

#[derive(Debug, Clone)]
struct Node {
    kind: SyntaxKind,
    parent: Option<NodeIndex>,
    text: String,
    data: NodeData,
}

#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn get(&self, node: NodeIndex) -> Option<&Node> {
        self.nodes.get(node.index())
    }

    fn push(&mut self, node: Node) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        idx
    }

    /// Add a node with no kind-specific data.
    pub fn add_node(
        &mut self,
        parent: Option<NodeIndex>,
        kind: SyntaxKind,
        text: impl Into<String>,
    ) -> NodeIndex {
        self.push(Node {
            kind,
            parent,
            text: text.into(),
            data: NodeData::Plain,
        })
    }

    pub fn add_source_file(&mut self) -> NodeIndex {
        self.push(Node {
            kind: SyntaxKind::SourceFile,
            parent: None,
            text: String::new(),
            data: NodeData::Scope {
                namespace: None,
                imports: ImportTable::new(),
            },
        })
    }

    /// Add a namespace declaration. `None` declares the global namespace
    /// block (`namespace { ... }`).
    pub fn add_namespace(&mut self, parent: NodeIndex, name: Option<&str>) -> NodeIndex {
        let namespace = name.map(Name::fully_qualified);
        self.push(Node {
            kind: SyntaxKind::NamespaceDeclaration,
            parent: Some(parent),
            text: name.unwrap_or_default().to_string(),
            data: NodeData::Scope {
                namespace,
                imports: ImportTable::new(),
            },
        })
    }

    /// Add a `use` clause importing `name` (as `alias`, or its last segment)
    /// into the enclosing import scope.
    ///
    /// Returns the qualified-name node inside the clause.
    pub fn add_use_clause(
        &mut self,
        parent: NodeIndex,
        kind: UseKind,
        name: &str,
        alias: Option<&str>,
    ) -> NodeIndex {
        let declaration = self.add_node(Some(parent), SyntaxKind::NamespaceUseDeclaration, "");
        let clause = self.add_node(Some(declaration), SyntaxKind::NamespaceUseClause, name);
        let name_node = self.add_node(Some(clause), SyntaxKind::QualifiedName, name);

        match self.scope_of(parent) {
            Some(scope) => {
                if let Some(Node {
                    data: NodeData::Scope { imports, .. },
                    ..
                }) = self.nodes.get_mut(scope.index())
                {
                    imports.add(kind, &Name::parse(name), alias);
                }
            }
            None => tracing::debug!(%parent, name, "use clause outside of any import scope"),
        }

        name_node
    }

    pub fn add_class(&mut self, parent: NodeIndex, name: &str, base: Option<&str>) -> NodeIndex {
        self.add_class_like(parent, SyntaxKind::ClassDeclaration, name, base)
    }

    pub fn add_interface(&mut self, parent: NodeIndex, name: &str) -> NodeIndex {
        self.add_class_like(parent, SyntaxKind::InterfaceDeclaration, name, None)
    }

    pub fn add_trait(&mut self, parent: NodeIndex, name: &str) -> NodeIndex {
        self.add_class_like(parent, SyntaxKind::TraitDeclaration, name, None)
    }

    pub fn add_enum(&mut self, parent: NodeIndex, name: &str) -> NodeIndex {
        self.add_class_like(parent, SyntaxKind::EnumDeclaration, name, None)
    }

    fn add_class_like(
        &mut self,
        parent: NodeIndex,
        kind: SyntaxKind,
        name: &str,
        base: Option<&str>,
    ) -> NodeIndex {
        self.push(Node {
            kind,
            parent: Some(parent),
            text: name.to_string(),
            data: NodeData::ClassLike {
                base: base.map(Name::parse),
            },
        })
    }

    pub fn add_method(&mut self, parent: NodeIndex, name: &str) -> NodeIndex {
        self.add_node(Some(parent), SyntaxKind::MethodDeclaration, name)
    }

    pub fn add_function(&mut self, parent: NodeIndex, name: &str) -> NodeIndex {
        self.add_node(Some(parent), SyntaxKind::FunctionDeclaration, name)
    }

    pub fn add_call(&mut self, parent: NodeIndex) -> NodeIndex {
        self.add_node(Some(parent), SyntaxKind::CallExpression, "")
    }

    pub fn add_scoped_access(&mut self, parent: NodeIndex, text: &str) -> NodeIndex {
        self.add_node(Some(parent), SyntaxKind::ScopedPropertyAccessExpression, text)
    }

    /// Add a name (type hint, annotation or reference) node.
    pub fn add_name(&mut self, parent: NodeIndex, text: &str) -> NodeIndex {
        self.add_node(Some(parent), SyntaxKind::QualifiedName, text)
    }

    /// The nearest import scope at or above `node`.
    fn scope_of(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.ancestors_or_self(node)
            .find(|&idx| self.get(idx).is_some_and(|n| n.kind.is_import_scope()))
    }

    fn ancestors_or_self(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        std::iter::successors(Some(node), |&idx| self.get(idx).and_then(|n| n.parent))
            .take(MAX_TREE_WALK_ITERATIONS)
    }

    /// Resolve a written class reference the way the host parser resolves
    /// heritage clauses: absolute names stand, then class imports, then the
    /// enclosing namespace, else the global namespace.
    fn resolve_written_name(&self, at: NodeIndex, written: &Name) -> Name {
        if written.was_fully_qualified() {
            return written.clone();
        }
        if let Some(imported) = self
            .import_table(at)
            .and_then(|imports| imports.resolve_class(written))
        {
            return imported;
        }
        match self.namespace_name(at) {
            Some(namespace) => written.prepend(&namespace),
            None => written.clone().into_fully_qualified(),
        }
    }
}

impl SyntaxTree for NodeArena {
    fn kind(&self, node: NodeIndex) -> Option<SyntaxKind> {
        self.get(node).map(|n| n.kind)
    }

    fn parent(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.get(node).and_then(|n| n.parent)
    }

    fn text(&self, node: NodeIndex) -> &str {
        self.get(node).map_or("", |n| n.text.as_str())
    }

    fn namespace_name(&self, node: NodeIndex) -> Option<Name> {
        let namespace = self.ancestors_or_self(node).find(|&idx| {
            self.get(idx)
                .is_some_and(|n| n.kind == SyntaxKind::NamespaceDeclaration)
        })?;
        match &self.get(namespace)?.data {
            NodeData::Scope { namespace, .. } => namespace.clone(),
            _ => None,
        }
    }

    fn import_table(&self, node: NodeIndex) -> Option<&ImportTable> {
        let scope = self.scope_of(node)?;
        match &self.get(scope)?.data {
            NodeData::Scope { imports, .. } => Some(imports),
            _ => None,
        }
    }

    fn class_name(&self, class: NodeIndex) -> Option<Name> {
        let node = self.get(class)?;
        if !node.kind.is_class_like() {
            return None;
        }
        let declared = Name::parse(&node.text);
        Some(match self.namespace_name(class) {
            Some(namespace) => declared.prepend(&namespace),
            None => declared.into_fully_qualified(),
        })
    }

    fn base_class_name(&self, class: NodeIndex) -> Option<Name> {
        match &self.get(class)?.data {
            NodeData::ClassLike {
                base: Some(written),
            } => Some(self.resolve_written_name(class, written)),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../tests/node_arena_tests.rs"]
mod tests;
