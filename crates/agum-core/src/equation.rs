//! Equations between terms

use crate::term::Term;
use std::fmt;

/// An ordered pair of terms `lhs = rhs`.
///
/// For matching the left side is the pattern and the right side the target;
/// for unification the orientation is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    /// Left-hand side.
    pub lhs: Term,
    /// Right-hand side.
    pub rhs: Term,
}

impl Equation {
    /// Create an equation.
    #[must_use]
    pub fn new(lhs: Term, rhs: Term) -> Self {
        Equation { lhs, rhs }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}
