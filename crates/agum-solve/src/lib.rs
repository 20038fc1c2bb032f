//! Matching and unification in the free Abelian group.
//!
//! Matching an equation `t0 =? t1` reduces to one linear Diophantine
//! equation over the coefficients of `t0`, with the variables of `t1`
//! treated as formal constants. The solver returns a most general
//! parametric integer solution, which the matcher lifts back into a
//! substitution with fresh parameter names. Unification is matching of
//! `t0 - t1` against `0` and always succeeds.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lin;
pub mod matcher;
pub mod unify;

pub use lin::{solve, LinearBinding, LinearSolution, SolveError};
pub use matcher::{match_terms, MatchError};
pub use unify::unify;
