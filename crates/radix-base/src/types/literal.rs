//! Variables and literals.

use super::VarId;
use serde::{Deserialize, Serialize};

/// A single boolean variable of the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Variable {
    /// Unique identifier.
    id: VarId,
}

impl Variable {
    /// Creates a variable with the given 0-based ID.
    #[must_use]
    pub const fn new(id: VarId) -> Self {
        Self { id }
    }

    /// Creates a variable from its 1-based DIMACS number.
    ///
    /// Returns `None` for numbers below 1.
    #[must_use]
    pub fn from_dimacs(number: i64) -> Option<Self> {
        (number >= 1).then(|| Self::new(number as VarId - 1))
    }

    /// Returns the variable ID.
    #[must_use]
    pub const fn id(&self) -> VarId {
        self.id
    }

    /// Returns the 1-based DIMACS number.
    #[must_use]
    pub const fn to_dimacs(&self) -> i64 {
        self.id as i64 + 1
    }

    /// The literal asserting this variable is true.
    #[must_use]
    pub const fn one_literal(&self) -> Literal {
        Literal { var: *self, negated: false }
    }

    /// The literal asserting this variable is false.
    #[must_use]
    pub const fn zero_literal(&self) -> Literal {
        Literal { var: *self, negated: true }
    }
}

/// A literal is a variable with optional negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Literal {
    /// The underlying variable.
    pub var: Variable,
    /// Whether this literal is negated.
    pub negated: bool,
}

impl Literal {
    /// Returns the literal of opposite polarity over the same variable.
    #[must_use]
    pub const fn inverse(&self) -> Self {
        Self {
            var: self.var,
            negated: !self.negated,
        }
    }

    /// Returns the underlying variable.
    #[must_use]
    pub const fn variable(&self) -> Variable {
        self.var
    }

    /// Whether this is the true-sense projection of its variable.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        !self.negated
    }

    /// Converts to DIMACS format (positive = id+1, negative = -(id+1)).
    #[must_use]
    pub const fn to_dimacs(&self) -> i64 {
        let base = self.var.to_dimacs();
        if self.negated { -base } else { base }
    }

    /// Parses a signed DIMACS literal. `0` is the clause terminator, not a
    /// literal, and yields `None`.
    #[must_use]
    pub fn from_dimacs(value: i64) -> Option<Self> {
        let var = Variable::from_dimacs(value.checked_abs()?)?;
        Some(if value < 0 { var.zero_literal() } else { var.one_literal() })
    }
}

impl std::ops::Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        self.inverse()
    }
}

impl From<Variable> for Literal {
    fn from(var: Variable) -> Self {
        var.one_literal()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}
