use rpds::HashTrieMap;
use std::{collections::BTreeMap, fmt};

use crate::{
    term::{Term, Variable},
    traits::{ClassifyTerm, DirectChildren, TermKind},
};

/// A mapping from variables to terms.
///
/// Backed by a persistent map, so cloning is cheap and every "modifying"
/// operation returns a new `Substitution` while the old one stays usable.
/// Identity bindings (`x -> x`) are never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct Substitution {
    bindings: HashTrieMap<Variable, Term>,
}

impl Default for Substitution {
    fn default() -> Self {
        Self {
            bindings: HashTrieMap::new(),
        }
    }
}

impl fmt::Debug for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.sorted()).finish()
    }
}

impl fmt::Display for Substitution {
    /// Renders as `{x: A, y: G(x, x)}`, ordered by variable name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, term)) in self.sorted().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{var}: {term}")?;
        }
        write!(f, "}}")
    }
}

/// Later pairs replace earlier pairs for the same variable.
impl FromIterator<(Variable, Term)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (Variable, Term)>>(iter: I) -> Self {
        let mut bindings = HashTrieMap::new();
        for (var, term) in iter {
            if is_identity(&var, &term) {
                bindings.remove_mut(&var);
            } else {
                bindings.insert_mut(var, term);
            }
        }
        Self { bindings }
    }
}

fn is_identity(var: &Variable, term: &Term) -> bool {
    term.as_variable() == Some(var)
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(var: Variable, term: Term) -> Self {
        Self::new().with(var, term)
    }

    /// Unchecked insert; callers make sure `var` is unbound.
    fn with(&self, var: Variable, term: Term) -> Self {
        if is_identity(&var, &term) {
            return self.clone();
        }
        Self {
            bindings: self.bindings.insert(var, term),
        }
    }

    /// Adds `var -> term`, refusing to overwrite.
    ///
    /// Returns `None` when `var` is already bound to a different term. Binding a
    /// variable to the term it already has, or to itself while unbound, leaves
    /// the substitution unchanged.
    pub fn bind(&self, var: Variable, term: Term) -> Option<Self> {
        match self.bindings.get(&var) {
            Some(existing) if existing == &term => Some(self.clone()),
            Some(_) => None,
            None => Some(self.with(var, term)),
        }
    }

    pub fn get(&self, var: &Variable) -> Option<&Term> {
        self.bindings.get(var)
    }

    pub fn contains(&self, var: &Variable) -> bool {
        self.bindings.contains_key(var)
    }

    pub fn len(&self) -> usize {
        self.bindings.size()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.bindings.iter()
    }

    pub fn domain(&self) -> impl Iterator<Item = &Variable> {
        self.bindings.keys()
    }

    /// Replaces every bound variable in `term` by its binding, at any depth.
    ///
    /// This is a single pass: variables introduced by a binding's value are not
    /// substituted again.
    pub fn apply(&self, term: &Term) -> Term {
        match term.classify_term() {
            TermKind::Var(var) => self.get(var).cloned().unwrap_or_else(|| term.clone()),
            TermKind::NonVar => term.map_direct_children(|child| self.apply(child)),
        }
    }

    /// Composes `self` after `first`: applying the result is the same as
    /// applying `first` and then `self`.
    ///
    /// Every binding of `first` gets `self` applied to its value; bindings of
    /// `self` for variables outside `first`'s domain are kept as they are.
    pub fn compose(&self, first: &Substitution) -> Substitution {
        let mut bindings = HashTrieMap::new();
        for (var, term) in first.iter() {
            let term = self.apply(term);
            if !is_identity(var, &term) {
                bindings.insert_mut(var.clone(), term);
            }
        }
        for (var, term) in self.iter() {
            if !first.contains(var) {
                bindings.insert_mut(var.clone(), term.clone());
            }
        }
        Self { bindings }
    }

    /// Adds the binding `var -> term` and applies it to the values already
    /// present, i.e. `{var -> term} ∘ self`.
    ///
    /// Returns `None` if `var` is already bound.
    pub(crate) fn extend(&self, var: Variable, term: Term) -> Option<Self> {
        if self.contains(&var) {
            return None;
        }
        let binding = Self::singleton(var.clone(), term.clone());
        let rebased: Self = self
            .iter()
            .map(|(v, t)| (v.clone(), binding.apply(t)))
            .collect();
        rebased.bind(var, term)
    }

    /// An idempotent substitution has no domain variable in any of its values,
    /// so applying it twice is the same as applying it once.
    pub fn is_idempotent(&self) -> bool {
        self.bindings
            .values()
            .all(|term| term.variables().all(|v| !self.contains(v)))
    }

    fn sorted(&self) -> BTreeMap<&Variable, &Term> {
        self.bindings.iter().collect()
    }
}

/// Applies `s` to `term`. See [`Substitution::apply`].
pub fn substitute(s: &Substitution, term: &Term) -> Term {
    s.apply(term)
}

/// Builds the substitution equivalent to applying `s1` then `s2`.
pub fn compose(s2: &Substitution, s1: &Substitution) -> Substitution {
    s2.compose(s1)
}
