//! One-way matching: a most general substitution sending a pattern onto a
//! target
//!
//! Right-hand variables act as constants. The coefficients of the pattern
//! become the unknowns of one linear Diophantine equation, the target's
//! entries become its formal right-hand symbols, and the solver's parametric
//! solution is lifted back into a substitution with fresh `gN` names.

use agum_core::{Equation, Substitution, Term};
use hashbrown::HashSet;
use num_bigint::BigInt;
use thiserror::Error;

use crate::lin::{self, SolveError};

/// Why no matching substitution exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The pattern is `0`, which only matches `0`.
    #[error("no solution: 0 does not match {0}")]
    EmptyPattern(Term),
    /// The gcd of the pattern coefficients cannot produce the target.
    #[error("no solution: {0}")]
    Indivisible(#[from] SolveError),
}

/// Fresh parameter names `g0, g1, ...`, skipping every name that occurs in
/// the problem. One pool per match call; no global state.
struct FreshPool {
    avoid: HashSet<String>,
    next: usize,
}

impl FreshPool {
    fn new<'a>(avoid: impl IntoIterator<Item = &'a str>) -> Self {
        FreshPool {
            avoid: avoid.into_iter().map(str::to_owned).collect(),
            next: 0,
        }
    }

    fn fresh(&mut self) -> String {
        loop {
            let name = format!("g{}", self.next);
            self.next += 1;
            if !self.avoid.contains(&name) {
                return name;
            }
        }
    }
}

/// Compute a most general substitution `σ` with `σ(lhs) = rhs`, treating
/// right-hand variables as constants.
///
/// Every left-hand variable is bound; bindings to `0` are kept (they assert
/// the variable is eliminated), while bindings of a variable to itself are
/// dropped as carrying no information. Generated parameter names never
/// collide with a variable of the input equation.
///
/// # Errors
///
/// Returns [`MatchError::EmptyPattern`] when the pattern is `0` and the
/// target is not, and [`MatchError::Indivisible`] when the divisibility
/// test fails; in both cases no substitution solves the problem.
pub fn match_terms(eq: &Equation) -> Result<Substitution, MatchError> {
    let unknowns: Vec<(&str, &BigInt)> = eq.lhs.assocs().collect();
    let symbols: Vec<(&str, &BigInt)> = eq.rhs.assocs().collect();

    if unknowns.is_empty() {
        if symbols.is_empty() {
            return Ok(Substitution::new());
        }
        return Err(MatchError::EmptyPattern(eq.rhs.clone()));
    }

    let lhs: Vec<BigInt> = unknowns.iter().map(|(_, coeff)| (*coeff).clone()).collect();
    let rhs: Vec<BigInt> = symbols.iter().map(|(_, coeff)| (*coeff).clone()).collect();
    let solution = lin::solve(&lhs, &rhs)?;

    let mut pool = FreshPool::new(
        unknowns
            .iter()
            .map(|(name, _)| *name)
            .chain(symbols.iter().map(|(name, _)| *name)),
    );
    let param_names: Vec<String> = (0..solution.params).map(|_| pool.fresh()).collect();

    let mut subst = Substitution::new();
    let mut bound = vec![false; unknowns.len()];
    for binding in &solution.bindings {
        bound[binding.index] = true;
        let var = unknowns[binding.index].0;
        let mut value = Term::zero();
        for (factor, name) in binding.factors.iter().zip(&param_names) {
            value = value.add(&Term::monomial(factor.clone(), name.clone()));
        }
        for (coeff, (name, _)) in binding.constants.iter().zip(&symbols) {
            value = value.add(&Term::monomial(coeff.clone(), *name));
        }
        if value != Term::variable(var) {
            subst.insert(var, value);
        }
    }
    for (i, already_bound) in bound.iter().enumerate() {
        if !already_bound {
            subst.insert(unknowns[i].0, Term::variable(pool.fresh()));
        }
    }
    Ok(subst)
}
