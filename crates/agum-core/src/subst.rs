//! Variable substitutions

use crate::term::Term;
use std::collections::BTreeMap;
use std::fmt;

/// A substitution mapping variable names to terms.
///
/// Names absent from the map are left fixed; a binding to `0` eliminates the
/// variable. Entries iterate in ascending name order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution {
    map: BTreeMap<String, Term>,
}

impl Substitution {
    /// Create an empty substitution (the identity).
    #[must_use]
    pub fn new() -> Self {
        Substitution {
            map: BTreeMap::new(),
        }
    }

    /// Add a name -> term binding, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, term: Term) {
        self.map.insert(name.into(), term);
    }

    /// The term bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.map.get(name)
    }

    /// Whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Whether the substitution is the identity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Bindings in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> + '_ {
        self.map.iter().map(|(name, term)| (name.as_str(), term))
    }

    /// Compose two substitutions: applying `self.compose(other)` is the same
    /// as applying `self`, then `other`.
    #[must_use]
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut result = Substitution::new();
        for (name, term) in &self.map {
            result.insert(name.clone(), term.apply_substitution(other));
        }
        for (name, term) in &other.map {
            if !self.map.contains_key(name) {
                result.insert(name.clone(), term.clone());
            }
        }
        result
    }
}

impl Term {
    /// Apply a substitution to this term: each variable is replaced by its
    /// image (itself when unbound) scaled by its coefficient.
    #[must_use]
    pub fn apply_substitution(&self, subst: &Substitution) -> Term {
        let mut result = Term::zero();
        for (name, coeff) in self.assocs() {
            let image = match subst.get(name) {
                Some(term) => term.scale(coeff),
                None => Term::monomial(coeff.clone(), name),
            };
            result = result.add(&image);
        }
        result
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (name, term)) in self.map.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name} : {term}")?;
        }
        write!(f, "]")
    }
}
