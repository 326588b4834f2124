//! Robinson unification over [`Term`]s.
//!
//! The unifier is found by repeatedly asking [`mismatch`] for the first pair of
//! disagreeing sub-terms, binding the variable side of that pair and applying
//! the bindings so far before looking again.

use log::{debug, trace};

use crate::{
    substitution::Substitution,
    term::Term,
    traits::{ClassifyTerm, DirectChildren, TermKind},
};

/// Finds the first place, scanning arguments left to right, where `left` and
/// `right` stop matching. Returns `None` when the terms are equal.
///
/// Terms with different heads (operator, arity, or leaf) mismatch as a whole.
pub fn mismatch<'a>(left: &'a Term, right: &'a Term) -> Option<(&'a Term, &'a Term)> {
    if !left.same_functor(right) {
        return Some((left, right));
    }

    left.direct_children()
        .zip(right.direct_children())
        .find_map(|(l, r)| mismatch(l, r))
}

/// Computes the most general unifier of `left` and `right`, or `None` if they
/// don't unify.
///
/// The returned substitution is idempotent, so a single `apply` makes both
/// terms equal. Unification fails on a symbol clash (different constants,
/// operators or arities, or a constant against a compound term) and when a
/// variable would have to be bound to a term containing it.
pub fn unify(left: &Term, right: &Term) -> Option<Substitution> {
    unify_with(Substitution::new(), left, right)
}

/// Finds one substitution unifying every pair at once.
pub fn unify_many(pairs: &[(Term, Term)]) -> Option<Substitution> {
    pairs
        .iter()
        .try_fold(Substitution::new(), |u, (left, right)| unify_with(u, left, right))
}

/// Extends the idempotent unifier `u` until it also unifies `left` and `right`.
fn unify_with(mut u: Substitution, left: &Term, right: &Term) -> Option<Substitution> {
    loop {
        let applied_left = u.apply(left);
        let applied_right = u.apply(right);

        let Some((l, r)) = mismatch(&applied_left, &applied_right) else {
            trace!("unified {left} and {right} with {u}");
            return Some(u);
        };

        // Prefer binding the left side when both are variables.
        let (var, term) = match (l.classify_term(), r.classify_term()) {
            (TermKind::Var(var), _) => (var, r),
            (TermKind::NonVar, TermKind::Var(var)) => (var, l),
            (TermKind::NonVar, TermKind::NonVar) => {
                debug!("symbol clash between {l} and {r}");
                return None;
            }
        };

        if var.occurs_in(term) {
            debug!("occurs check: {var} occurs in {term}");
            return None;
        }

        trace!("binding {var} to {term}");
        u = u.extend(var.clone(), term.clone())?;
    }
}
