//! Core term algebra for the free Abelian group over variable names.
//!
//! A term is a finite sum `Σ coeff·variable` with nonzero integer
//! coefficients, represented as a sorted map from name to coefficient. The
//! empty sum is the group identity `0`. Substitutions map variable names to
//! terms and apply homomorphically.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod equation;
pub mod subst;
pub mod term;

pub use equation::Equation;
pub use subst::Substitution;
pub use term::{is_variable_name, Term};
