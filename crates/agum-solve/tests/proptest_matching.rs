//! Property-based tests for matching and unification.
//!
//! Random equations over a small variable alphabet are generated; results
//! are checked by applying the substitution (soundness), by instantiating
//! the fresh parameters with random terms (every instance of a most general
//! solution is still a solution), and by re-running the engine (determinism).

use agum_core::{Equation, Substitution, Term};
use agum_solve::{match_terms, unify};
use num_bigint::BigInt;
use proptest::prelude::*;

const NAMES: [&str; 5] = ["a", "b", "x", "y", "z"];

fn arb_term() -> impl Strategy<Value = Term> {
    proptest::collection::vec((0usize..NAMES.len(), -6i64..=6), 0..=4).prop_map(|entries| {
        Term::from_assocs(
            entries
                .into_iter()
                .map(|(i, coeff)| (NAMES[i].to_owned(), BigInt::from(coeff))),
        )
    })
}

fn arb_equation() -> impl Strategy<Value = Equation> {
    (arb_term(), arb_term()).prop_map(|(lhs, rhs)| Equation::new(lhs, rhs))
}

/// Names a substitution introduces that were not part of the problem.
fn generated_names(subst: &Substitution, eq: &Equation) -> Vec<String> {
    subst
        .iter()
        .flat_map(|(_, term)| term.variables())
        .filter(|name| {
            !eq.lhs.variables().any(|v| v == *name) && !eq.rhs.variables().any(|v| v == *name)
        })
        .map(str::to_owned)
        .collect()
}

proptest! {
    /// If matching succeeds, applying the result to the pattern gives the
    /// target exactly.
    #[test]
    fn match_is_sound(eq in arb_equation()) {
        if let Ok(subst) = match_terms(&eq) {
            prop_assert_eq!(eq.lhs.apply_substitution(&subst), eq.rhs.clone());
        }
    }

    /// Unification is total and the unifier equates both sides.
    #[test]
    fn unify_is_total_and_sound(eq in arb_equation()) {
        let subst = unify(&eq);
        prop_assert_eq!(
            eq.lhs.apply_substitution(&subst),
            eq.rhs.apply_substitution(&subst)
        );
    }

    /// Every generated name is of the form `g<digits>` and does not occur in
    /// the input equation.
    #[test]
    fn generated_names_are_fresh(eq in arb_equation()) {
        let subst = unify(&eq);
        for name in generated_names(&subst, &eq) {
            let mut chars = name.chars();
            prop_assert_eq!(chars.next(), Some('g'));
            let digits: String = chars.collect();
            prop_assert!(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
                "unexpected generated name {}", name);
        }
    }

    /// A most general unifier stays a unifier under any instantiation of its
    /// fresh parameters.
    #[test]
    fn unifier_instances_still_unify(
        eq in arb_equation(),
        instance in arb_term(),
        scale in -4i64..=4,
    ) {
        let subst = unify(&eq);
        let mut theta = Substitution::new();
        for (i, name) in generated_names(&subst, &eq).into_iter().enumerate() {
            theta.insert(name, instance.scale(&BigInt::from(scale + i as i64)));
        }
        let instantiated = subst.compose(&theta);
        prop_assert_eq!(
            eq.lhs.apply_substitution(&instantiated),
            eq.rhs.apply_substitution(&instantiated)
        );
    }

    /// Matching an instantiated pattern against its own image always
    /// succeeds (completeness on solvable problems).
    #[test]
    fn match_finds_existing_solutions(lhs in arb_term(), witness in arb_term(), scale in -5i64..=5) {
        let mut sigma = Substitution::new();
        for (i, name) in NAMES.iter().enumerate() {
            sigma.insert(*name, witness.scale(&BigInt::from(scale + i as i64)));
        }
        let rhs = lhs.apply_substitution(&sigma);
        let eq = Equation::new(lhs, rhs);
        prop_assert!(match_terms(&eq).is_ok(), "failed on {}", eq);
    }

    /// Identical inputs give identical outputs.
    #[test]
    fn engine_is_deterministic(eq in arb_equation()) {
        prop_assert_eq!(match_terms(&eq), match_terms(&eq));
        prop_assert_eq!(unify(&eq), unify(&eq));
    }
}
