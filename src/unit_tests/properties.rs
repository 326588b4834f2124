use super::*;
use proptest::prelude::*;

// A small vocabulary keeps collisions (and so successful unifications) common.
fn arb_variable() -> impl Strategy<Value = Variable> {
    "[u-z]".prop_map(|s| Variable::new(s).unwrap())
}

fn arb_constant() -> impl Strategy<Value = Term> {
    "[A-C]".prop_map(|s| Term::constant(s).unwrap())
}

fn arb_leaf() -> impl Strategy<Value = Term> {
    prop_oneof![arb_variable().prop_map(Term::Variable), arb_constant()]
}

fn arb_term(depth: u32) -> impl Strategy<Value = Term> {
    arb_leaf().prop_recursive(depth, 24, 3, |inner| {
        ("[F-H]", prop::collection::vec(inner, 0..=3))
            .prop_map(|(operator, arguments)| Term::expression(operator, arguments))
    })
}

fn arb_substitution() -> impl Strategy<Value = Substitution> {
    prop::collection::vec((arb_variable(), arb_term(2)), 0..=4)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn render_then_parse_round_trips(term in arb_term(3)) {
        prop_assert_eq!(parse_expression(&term.to_string()), Ok(term));
    }

    #[test]
    fn equality_agrees_with_rendering(a in arb_term(2), b in arb_term(2)) {
        prop_assert_eq!(a == b, a.to_string() == b.to_string());
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn occurs_in_iff_variable_appears(var in arb_variable(), term in arb_term(3)) {
        let appears = term.variables().any(|v| v == &var);
        prop_assert_eq!(var.occurs_in(&term), appears);
    }

    #[test]
    fn self_unification_is_empty(term in arb_term(3)) {
        prop_assert_eq!(unify(&term, &term), Some(Substitution::new()));
        prop_assert_eq!(mismatch(&term, &term), None);
    }

    #[test]
    fn unifiers_make_terms_equal(a in arb_term(3), b in arb_term(3)) {
        if let Some(u) = unify(&a, &b) {
            prop_assert_eq!(u.apply(&a), u.apply(&b));
            prop_assert!(u.is_idempotent());
        }
    }

    #[test]
    fn unifiability_is_symmetric(a in arb_term(3), b in arb_term(3)) {
        prop_assert_eq!(unify(&a, &b).is_some(), unify(&b, &a).is_some());
    }

    #[test]
    fn mismatch_is_none_iff_equal(a in arb_term(2), b in arb_term(2)) {
        prop_assert_eq!(mismatch(&a, &b).is_none(), a == b);
    }

    #[test]
    fn instance_unifies_with_its_pattern(pattern in arb_term(3), s in arb_substitution()) {
        let instance = s.apply(&pattern);
        if pattern.variables().all(|v| !instance.variables().any(|w| w == v)) {
            prop_assert!(unify(&pattern, &instance).is_some());
        }
    }

    #[test]
    fn compose_with_empty_is_identity(s in arb_substitution()) {
        prop_assert_eq!(compose(&Substitution::new(), &s), s.clone());
        prop_assert_eq!(compose(&s, &Substitution::new()), s);
    }

    #[test]
    fn compose_is_sequential_application(
        s1 in arb_substitution(),
        s2 in arb_substitution(),
        term in arb_term(3),
    ) {
        prop_assert_eq!(compose(&s2, &s1).apply(&term), s2.apply(&s1.apply(&term)));
    }
}
