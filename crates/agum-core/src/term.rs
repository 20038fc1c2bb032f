//! Terms of the free Abelian group

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

/// Check whether a string is a well-formed variable name: a non-empty
/// alphabetic first character followed by alphanumerics.
pub fn is_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.is_alphabetic() && chars.all(char::is_alphanumeric),
        None => false,
    }
}

/// An element of the free Abelian group over variable names: a finite sum
/// `Σ coeff·variable` with every stored coefficient nonzero.
///
/// The empty sum is the identity `0`. Equality is structural, which matches
/// equality in the group because the representation is canonical. Entries
/// iterate in ascending name order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Term {
    coeffs: BTreeMap<String, BigInt>,
}

impl Term {
    /// The identity `0`.
    #[must_use]
    pub fn zero() -> Self {
        Term {
            coeffs: BTreeMap::new(),
        }
    }

    /// The term `1·name`.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        let mut coeffs = BTreeMap::new();
        coeffs.insert(name.into(), BigInt::one());
        Term { coeffs }
    }

    /// The term `coeff·name`; the identity when `coeff` is zero.
    #[must_use]
    pub fn monomial(coeff: BigInt, name: impl Into<String>) -> Self {
        if coeff.is_zero() {
            return Term::zero();
        }
        let mut coeffs = BTreeMap::new();
        coeffs.insert(name.into(), coeff);
        Term { coeffs }
    }

    /// Whether this term is the identity.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// The coefficient of `name`, zero when absent.
    #[must_use]
    pub fn coefficient(&self, name: &str) -> BigInt {
        self.coeffs.get(name).cloned().unwrap_or_else(BigInt::zero)
    }

    /// Multiply every coefficient by `n`.
    #[must_use]
    pub fn scale(&self, n: &BigInt) -> Term {
        if n.is_zero() {
            return Term::zero();
        }
        if n.is_one() {
            return self.clone();
        }
        Term {
            coeffs: self
                .coeffs
                .iter()
                .map(|(name, coeff)| (name.clone(), coeff * n))
                .collect(),
        }
    }

    /// The additive inverse.
    #[must_use]
    pub fn negated(&self) -> Term {
        Term {
            coeffs: self
                .coeffs
                .iter()
                .map(|(name, coeff)| (name.clone(), -coeff))
                .collect(),
        }
    }

    /// The sum of two terms. Coefficients that cancel to zero are removed,
    /// never stored.
    #[must_use]
    pub fn add(&self, other: &Term) -> Term {
        let mut coeffs = self.coeffs.clone();
        for (name, coeff) in &other.coeffs {
            match coeffs.entry(name.clone()) {
                Entry::Occupied(mut entry) => {
                    *entry.get_mut() += coeff;
                    if entry.get().is_zero() {
                        entry.remove();
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(coeff.clone());
                }
            }
        }
        Term { coeffs }
    }

    /// The difference `self - other`.
    #[must_use]
    pub fn sub(&self, other: &Term) -> Term {
        self.add(&other.negated())
    }

    /// Entries in ascending variable order.
    pub fn assocs(&self) -> impl Iterator<Item = (&str, &BigInt)> + '_ {
        self.coeffs
            .iter()
            .map(|(name, coeff)| (name.as_str(), coeff))
    }

    /// Variable names in ascending order.
    pub fn variables(&self) -> impl Iterator<Item = &str> + '_ {
        self.coeffs.keys().map(String::as_str)
    }

    /// Build a term from (name, coefficient) pairs, combining duplicates and
    /// dropping entries that sum to zero. Inverse of [`Term::assocs`] up to
    /// reordering and zero filtering.
    #[must_use]
    pub fn from_assocs(pairs: impl IntoIterator<Item = (String, BigInt)>) -> Term {
        let mut coeffs: BTreeMap<String, BigInt> = BTreeMap::new();
        for (name, coeff) in pairs {
            *coeffs.entry(name).or_insert_with(BigInt::zero) += coeff;
        }
        coeffs.retain(|_, coeff| !coeff.is_zero());
        Term { coeffs }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeffs.is_empty() {
            return write!(f, "0");
        }
        for (i, (name, coeff)) in self.coeffs.iter().enumerate() {
            if i == 0 {
                if coeff.is_negative() {
                    write!(f, "-")?;
                }
            } else if coeff.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            let magnitude = coeff.abs();
            if !magnitude.is_one() {
                write!(f, "{magnitude}")?;
            }
            write!(f, "{name}")?;
        }
        Ok(())
    }
}
