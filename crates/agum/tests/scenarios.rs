//! End-to-end scenarios through the parser, engine, and printer.
//!
//! Expected strings are exact: the engine is deterministic, parameter
//! columns are named `g0, g1, ...` in ascending order, and substitutions
//! print in ascending variable order.

use agum::{match_terms, parse_equation, unify, MatchError, Substitution};

fn unifier(input: &str) -> Substitution {
    let eq = parse_equation(input).unwrap();
    let subst = unify(&eq);
    assert_eq!(
        eq.lhs.apply_substitution(&subst),
        eq.rhs.apply_substitution(&subst),
        "unifier of {eq} does not equate the sides"
    );
    subst
}

fn matcher(input: &str) -> Result<Substitution, MatchError> {
    let eq = parse_equation(input).unwrap();
    let result = match_terms(&eq);
    if let Ok(subst) = &result {
        assert_eq!(
            eq.lhs.apply_substitution(subst),
            eq.rhs,
            "matcher of {eq} does not send the pattern onto the target"
        );
    }
    result
}

#[test]
fn scenario_two_unknowns_one_symbol() {
    assert_eq!(
        unifier("2x + y = 3z").to_string(),
        "[x : g0, y : -2g0 + 3g1, z : g1]"
    );
    assert_eq!(
        matcher("2x + y = 3z").unwrap().to_string(),
        "[x : g0, y : -2g0 + 3z]"
    );
}

#[test]
fn scenario_shared_variable() {
    assert_eq!(unifier("2x = x + y").to_string(), "[x : g0, y : g0]");
    assert!(matcher("2x = x + y").is_err());
}

#[test]
fn scenario_coprime_coefficients() {
    assert_eq!(
        unifier("64x - 41y = a").to_string(),
        "[a : 64g0 - 41g1, x : g0, y : g1]"
    );
    assert_eq!(
        matcher("64x - 41y = a").unwrap().to_string(),
        "[x : -16a + 41g0, y : -25a + 64g0]"
    );
}

#[test]
fn scenario_identity_equation() {
    assert!(unifier("x = x").is_empty());
    assert!(matcher("x = x").unwrap().is_empty());
}

#[test]
fn scenario_zero_pattern() {
    assert_eq!(unifier("0 = x").to_string(), "[x : 0]");
    assert!(matcher("0 = x").is_err());
}

#[test]
fn scenario_common_factor() {
    // gcd(6, 10) = 2 divides 2
    assert_eq!(
        matcher("6x + 10y = 2a").unwrap().to_string(),
        "[x : 2a - 5g0, y : -a + 3g0]"
    );
    assert_eq!(
        unifier("6x + 10y = 2a").to_string(),
        "[a : 3g0 + 5g1, x : g0, y : g1]"
    );
}

#[test]
fn equation_prints_canonically() {
    let eq = parse_equation("2x + 1y - 0z + x = 3z - (-a)").unwrap();
    assert_eq!(eq.to_string(), "3x + y = a + 3z");
}

#[test]
fn print_parse_round_trip_on_engine_output() {
    let subst = unifier("64x - 41y = a");
    for (_, term) in subst.iter() {
        let reparsed = agum::parse_term(&term.to_string()).unwrap();
        assert_eq!(&reparsed, term);
    }
}
