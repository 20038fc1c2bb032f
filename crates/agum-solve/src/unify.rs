//! Unification via matching against the identity

use agum_core::{Equation, Substitution, Term};

use crate::matcher::match_terms;

/// Compute a most general unifier of the two sides.
///
/// Moving the right side over turns the equation into matching
/// `lhs - rhs =? 0`, which is homogeneous and therefore always solvable: the
/// divisibility test is against an empty right-hand side. The domain of the
/// result is the set of variables with nonzero net coefficient; variables
/// that cancel between the two sides are left fixed.
pub fn unify(eq: &Equation) -> Substitution {
    let homogeneous = Equation::new(eq.lhs.sub(&eq.rhs), Term::zero());
    match match_terms(&homogeneous) {
        Ok(subst) => subst,
        Err(err) => unreachable!("homogeneous equation {homogeneous} rejected: {err}"),
    }
}
