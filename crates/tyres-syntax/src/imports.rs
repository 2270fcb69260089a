//! Import tables.
//!
//! Each lexical import scope (a source file or a namespace block) maps short
//! aliases introduced by `use` declarations to fully qualified names. Class,
//! function and constant imports live in separate tables, as they do in the
//! host language.
//!
//! Type resolution only consults the class table. The function and constant
//! tables are filled so that hosts holding an `ImportTable` see every `use`
//! declaration of the scope, and so a `use function` never shadows a class
//! alias.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tyres_common::Name;

type AliasMap = IndexMap<String, Name, FxBuildHasher>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UseKind {
    Class,
    Function,
    Constant,
}

#[derive(Debug, Clone, Default)]
pub struct ImportTable {
    classes: AliasMap,
    functions: AliasMap,
    constants: AliasMap,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` under `alias`, defaulting the alias to the last
    /// segment of the name. Imported names are always absolute.
    pub fn add(&mut self, kind: UseKind, name: &Name, alias: Option<&str>) {
        let alias = alias.unwrap_or_else(|| name.short()).to_string();
        let fqn = name.clone().into_fully_qualified();
        match kind {
            UseKind::Class => self.classes.insert(alias, fqn),
            UseKind::Function => self.functions.insert(alias, fqn),
            UseKind::Constant => self.constants.insert(alias, fqn),
        };
    }

    pub fn class(&self, alias: &str) -> Option<&Name> {
        self.classes.get(alias)
    }

    pub fn function(&self, alias: &str) -> Option<&Name> {
        self.functions.get(alias)
    }

    pub fn constant(&self, alias: &str) -> Option<&Name> {
        self.constants.get(alias)
    }

    pub fn classes(&self) -> impl Iterator<Item = (&str, &Name)> {
        self.classes.iter().map(|(alias, name)| (alias.as_str(), name))
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.functions.is_empty() && self.constants.is_empty()
    }

    /// Expand a class name through the class imports.
    ///
    /// An alias equal to the whole name wins; otherwise an alias equal to the
    /// first segment replaces that segment and the rest of the name is
    /// re-attached. `None` means no import applies.
    pub fn resolve_class(&self, name: &Name) -> Option<Name> {
        if let Some(fqn) = self.classes.get(&name.full()) {
            return Some(fqn.clone());
        }

        let head = name.head();
        let fqn = self.classes.get(&head.full())?;
        Some(fqn.join(&name.tail()).into_fully_qualified())
    }
}

#[cfg(test)]
#[path = "../tests/imports_tests.rs"]
mod tests;
