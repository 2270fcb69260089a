//! Qualified names.
//!
//! A `Name` is a sequence of identifier segments separated by `\` in source
//! text. A leading separator marks the name as fully qualified at the point
//! it was written; rendering never includes that leading separator.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

pub const NAMESPACE_SEPARATOR: char = '\\';

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    parts: SmallVec<[String; 4]>,
    fully_qualified: bool,
}

impl Name {
    /// Parse a name as written in source.
    ///
    /// Empty segments (`Foo\\Bar`, trailing separators) are dropped.
    pub fn parse(text: &str) -> Name {
        let trimmed = text.trim();
        let fully_qualified = trimmed.starts_with(NAMESPACE_SEPARATOR);
        let parts = trimmed
            .split(NAMESPACE_SEPARATOR)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();
        Name {
            parts,
            fully_qualified,
        }
    }

    /// Parse a name that is known to be absolute, whether or not it was
    /// written with a leading separator.
    pub fn fully_qualified(text: &str) -> Name {
        Name::parse(text).into_fully_qualified()
    }

    pub fn from_parts<I, S>(parts: I, fully_qualified: bool) -> Name
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Name {
            parts: parts.into_iter().map(Into::into).collect(),
            fully_qualified,
        }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn was_fully_qualified(&self) -> bool {
        self.fully_qualified
    }

    pub fn into_fully_qualified(mut self) -> Name {
        self.fully_qualified = true;
        self
    }

    /// The first segment. Keeps the fully-qualified flag of `self`.
    pub fn head(&self) -> Name {
        Name {
            parts: self.parts.iter().take(1).cloned().collect(),
            fully_qualified: self.fully_qualified,
        }
    }

    /// Every segment after the first, as a relative name.
    pub fn tail(&self) -> Name {
        Name {
            parts: self.parts.iter().skip(1).cloned().collect(),
            fully_qualified: false,
        }
    }

    /// Qualify `self` with `prefix`, e.g. a namespace name.
    ///
    /// The result is absolute.
    pub fn prepend(&self, prefix: &Name) -> Name {
        Name {
            parts: prefix.parts.iter().chain(&self.parts).cloned().collect(),
            fully_qualified: true,
        }
    }

    /// Append `other`'s segments.
    pub fn join(&self, other: &Name) -> Name {
        Name {
            parts: self.parts.iter().chain(&other.parts).cloned().collect(),
            fully_qualified: self.fully_qualified,
        }
    }

    /// Segments joined by the namespace separator, without a leading one.
    pub fn full(&self) -> String {
        let mut out = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push(NAMESPACE_SEPARATOR);
            }
            out.push_str(part);
        }
        out
    }

    /// The last segment, or `""` for an empty name.
    pub fn short(&self) -> &str {
        self.parts.last().map_or("", String::as_str)
    }

    /// The namespace portion: every segment but the last.
    pub fn namespace(&self) -> Name {
        let keep = self.parts.len().saturating_sub(1);
        Name {
            parts: self.parts.iter().take(keep).cloned().collect(),
            fully_qualified: self.fully_qualified,
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full())
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Name::parse(text)
    }
}

#[cfg(test)]
#[path = "../tests/name_tests.rs"]
mod tests;
