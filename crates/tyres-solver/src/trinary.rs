//! Three-valued logic for facts that cannot always be decided statically.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trinary {
    True,
    False,
    Maybe,
}

impl Trinary {
    pub fn from_bool(value: bool) -> Trinary {
        if value { Trinary::True } else { Trinary::False }
    }

    pub fn is_true(self) -> bool {
        self == Trinary::True
    }

    pub fn is_false(self) -> bool {
        self == Trinary::False
    }

    pub fn is_maybe(self) -> bool {
        self == Trinary::Maybe
    }

    /// Kleene conjunction: `False` dominates, then `Maybe`.
    pub fn and(self, other: Trinary) -> Trinary {
        match (self, other) {
            (Trinary::False, _) | (_, Trinary::False) => Trinary::False,
            (Trinary::True, Trinary::True) => Trinary::True,
            _ => Trinary::Maybe,
        }
    }

    /// Kleene disjunction: `True` dominates, then `Maybe`.
    pub fn or(self, other: Trinary) -> Trinary {
        match (self, other) {
            (Trinary::True, _) | (_, Trinary::True) => Trinary::True,
            (Trinary::False, Trinary::False) => Trinary::False,
            _ => Trinary::Maybe,
        }
    }

    pub fn not(self) -> Trinary {
        match self {
            Trinary::True => Trinary::False,
            Trinary::False => Trinary::True,
            Trinary::Maybe => Trinary::Maybe,
        }
    }
}

impl From<bool> for Trinary {
    fn from(value: bool) -> Self {
        Trinary::from_bool(value)
    }
}
