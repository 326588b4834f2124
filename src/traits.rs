pub enum TermKind<Var> {
    Var(Var),
    NonVar,
}

pub trait ClassifyTerm<Var> {
    fn classify_term(&self) -> TermKind<&Var>;

    /// Without looking at any children of `self` or `other`, determine whether
    /// their head nodes are the same: same operator and arity for compound terms,
    /// plain equality for leaves.
    ///
    /// Two terms with the same functor still need their children compared before
    /// they can be called equal.
    fn same_functor(&self, other: &Self) -> bool;

    fn is_var(&self) -> bool {
        matches!(self.classify_term(), TermKind::Var(_))
    }

    fn is_non_var(&self) -> bool {
        matches!(self.classify_term(), TermKind::NonVar)
    }
}

pub trait DirectChildren<Var>: ClassifyTerm<Var> {
    /// All *direct* children (and *only* the *direct* children) of `Self` which are of
    /// type `Self` should be yielded, in argument order.
    fn direct_children<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Self> + 'a>;

    /// Builds a new `Self` with the same head where every *direct* child has been
    /// replaced by the one returned from `f`. Leaves are returned unchanged.
    fn map_direct_children(&self, f: impl FnMut(&Self) -> Self) -> Self;

    /// Returns an iterator of all the variables contained in `self`. If `self` is a
    /// variable, returns itself.
    /// ## Duplicate Variables
    /// This iterator is *not* de-duplicated. Duplicate variables may appear. You may want
    /// to `collect` this iterator into a set to deduplicate elements.
    fn variables<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Var> + 'a> {
        if let TermKind::Var(v) = self.classify_term() {
            return Box::new(std::iter::once(v));
        }

        Box::new(self.direct_children().flat_map(|child| child.variables()))
    }

    /// The occurs-check: does `var` appear anywhere in `self`, at any depth?
    fn contains_var(&self, var: &Var) -> bool
    where
        Var: PartialEq,
    {
        self.variables().any(|v| v == var)
    }
}
