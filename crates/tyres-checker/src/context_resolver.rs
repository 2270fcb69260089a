//! Context resolution of types.
//!
//! `ContextResolver::resolve` turns a raw or partially resolved type found at
//! a position in the tree into a fully qualified, context-correct one. It
//! recurses into nested type positions and then applies the host language's
//! name-resolution precedence:
//!
//! 1. compound types (generic arguments, array elements, callable
//!    signatures, union members) are resolved member by member
//! 2. bare call-expression callees are `Unknown`
//! 3. names inside `use` clauses are already absolute
//! 4. scalars and fully qualified names stand as written
//! 5. `self`/`static` become the current class, `parent` its base class
//! 6. class imports of the current scope
//! 7. the enclosing namespace
//! 8. otherwise the name is global and stands as written
//!
//! Resolution is total. Where no concrete type can be determined the result
//! is `Type::Unknown`, and misuse of `self`/`static`/`parent` is reported as
//! a warning through the caller's `DiagnosticSink`.
//!
//! Inputs are never mutated: every step rebuilds the type it changes.

use crate::reflector::{FactoryReflector, TypeReflector};
use crate::scope_finder::{
    find_enclosing_class, find_enclosing_class_like, is_bare_callee, is_use_clause_name,
};
use tyres_common::diagnostic_codes;
use tyres_common::{Diagnostic, DiagnosticSink, Name};
use tyres_solver::Type;
use tyres_syntax::{NodeIndex, SyntaxTree};

/// Where the type to resolve comes from when it is not the node's own text.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeInput<'s> {
    /// An already materialized type, used as-is.
    Type(Type),
    /// Annotation text, parsed through the reflector.
    Text(&'s str),
}

impl From<Type> for TypeInput<'_> {
    fn from(ty: Type) -> Self {
        TypeInput::Type(ty)
    }
}

impl<'s> From<&'s str> for TypeInput<'s> {
    fn from(text: &'s str) -> Self {
        TypeInput::Text(text)
    }
}

pub struct ContextResolver<'a, T: ?Sized, R: ?Sized = FactoryReflector> {
    tree: &'a T,
    reflector: &'a R,
}

impl<'a, T, R> ContextResolver<'a, T, R>
where
    T: SyntaxTree + ?Sized,
    R: TypeReflector + ?Sized,
{
    pub fn new(tree: &'a T, reflector: &'a R) -> Self {
        Self { tree, reflector }
    }

    /// Resolve the type written at `node`.
    pub fn resolve_node(&self, node: NodeIndex, sink: &mut dyn DiagnosticSink) -> Type {
        self.resolve(node, None, None, sink)
    }

    /// Resolve a type in the context of `node`.
    ///
    /// `input` defaults to the node's own text. `current_class`, when given,
    /// is what `self` and `static` resolve to instead of the enclosing class
    /// declaration.
    pub fn resolve(
        &self,
        node: NodeIndex,
        input: Option<TypeInput<'_>>,
        current_class: Option<&Name>,
        sink: &mut dyn DiagnosticSink,
    ) -> Type {
        let ty = match input {
            Some(TypeInput::Type(ty)) => ty,
            Some(TypeInput::Text(text)) if !text.is_empty() => self.reflector.type_from_str(text),
            _ => self.reflector.type_from_str(self.tree.text(node)),
        };

        let ty = match ty {
            Type::Generic { class, arguments } => Type::Generic {
                class,
                arguments: arguments
                    .into_iter()
                    .map(|argument| self.resolve_nested(node, argument, current_class, sink))
                    .collect(),
            },
            Type::Array(element) => Type::Array(Box::new(self.resolve_nested(
                node,
                *element,
                current_class,
                sink,
            ))),
            Type::Callable {
                parameters,
                return_type,
            } => {
                let parameters = parameters
                    .into_iter()
                    .map(|parameter| self.resolve_nested(node, parameter, current_class, sink))
                    .collect();
                let return_type = self.resolve_nested(node, *return_type, current_class, sink);
                return Type::Callable {
                    parameters,
                    return_type: Box::new(return_type),
                };
            }
            Type::Union(members) => {
                return Type::Union(
                    members
                        .into_iter()
                        .map(|member| self.resolve_nested(node, member, current_class, sink))
                        .collect(),
                );
            }
            other => other,
        };

        if is_bare_callee(self.tree, node) {
            tracing::trace!(%node, "bare call-expression callee, not typed here");
            return Type::Unknown;
        }

        if is_use_clause_name(self.tree, node) {
            return self
                .reflector
                .type_from_str(&ty.to_string())
                .into_fully_qualified();
        }

        if ty.is_scalar_like() {
            return ty;
        }

        if ty.class_name().is_some_and(Name::was_fully_qualified) {
            return ty;
        }

        match &ty {
            Type::SelfType | Type::Static => {
                return self.current_class(node, current_class, &ty, sink);
            }
            Type::Parent => return self.parent_class(node, sink),
            Type::Class(name) if name.full() == "parent" => return self.parent_class(node, sink),
            _ => {}
        }

        if let Some(imported) = self.from_class_imports(node, &ty) {
            tracing::trace!(%node, %ty, %imported, "resolved through class imports");
            return imported;
        }

        if let Some(name) = ty.class_name()
            && let Some(namespace) = self.tree.namespace_name(node)
        {
            let qualified = name.prepend(&namespace);
            tracing::trace!(%node, %ty, %qualified, "qualified with enclosing namespace");
            return ty.with_class_name(qualified);
        }

        ty
    }

    fn resolve_nested(
        &self,
        node: NodeIndex,
        ty: Type,
        current_class: Option<&Name>,
        sink: &mut dyn DiagnosticSink,
    ) -> Type {
        self.resolve(node, Some(TypeInput::Type(ty)), current_class, sink)
    }

    /// Type for a name already known to be absolute.
    fn absolute_type(&self, name: &Name) -> Type {
        self.reflector
            .type_from_str(&format!("\\{}", name.full()))
            .into_fully_qualified()
    }

    fn current_class(
        &self,
        node: NodeIndex,
        current_class: Option<&Name>,
        keyword: &Type,
        sink: &mut dyn DiagnosticSink,
    ) -> Type {
        if let Some(name) = current_class {
            return self.absolute_type(name);
        }

        let Some(class) = find_enclosing_class_like(self.tree, node) else {
            let keyword = keyword.to_string();
            sink.report(
                Diagnostic::from_code(diagnostic_codes::SELF_OUTSIDE_CLASS, &[&keyword])
                    .at_node(node.0),
            );
            return Type::Unknown;
        };

        match self.tree.class_name(class) {
            Some(name) => self.absolute_type(&name),
            None => {
                tracing::debug!(%node, %class, "enclosing class-like declaration has no name");
                Type::Unknown
            }
        }
    }

    fn parent_class(&self, node: NodeIndex, sink: &mut dyn DiagnosticSink) -> Type {
        let Some(class) = find_enclosing_class(self.tree, node) else {
            sink.report(
                Diagnostic::from_code(diagnostic_codes::PARENT_OUTSIDE_CLASS, &[])
                    .at_node(node.0),
            );
            return Type::Unknown;
        };

        let Some(base) = self.tree.base_class_name(class) else {
            let class_name = self
                .tree
                .class_name(class)
                .map(|name| name.full())
                .unwrap_or_default();
            sink.report(
                Diagnostic::from_code(
                    diagnostic_codes::PARENT_WITHOUT_BASE_CLASS,
                    &[&class_name],
                )
                .at_node(node.0),
            );
            return Type::Unknown;
        };

        self.absolute_type(&base)
    }

    /// Expand a class-shaped type through the current scope's class imports.
    ///
    /// `None` means no import applies, and later rules decide.
    fn from_class_imports(&self, node: NodeIndex, ty: &Type) -> Option<Type> {
        let name = ty.class_name()?;
        let imports = self.tree.import_table(node)?;
        let resolved = imports.resolve_class(name)?;
        Some(ty.clone().with_class_name(resolved))
    }
}

#[cfg(test)]
#[path = "../tests/context_resolver_tests.rs"]
mod tests;
