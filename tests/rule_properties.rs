//! Algebraic laws of the multiplication rules.
//!
//! Operands are integer-valued so ordinary multiplication stays exact.

use proptest::prelude::*;
use terryphy::{Engine, Rule};

fn any_rule() -> impl Strategy<Value = Rule> {
    prop::sample::select(Rule::ALL.to_vec())
}

fn operand() -> impl Strategy<Value = f64> {
    (-1000i32..1000).prop_map(f64::from)
}

proptest! {
    #[test]
    fn combine_is_commutative(rule in any_rule(), a in operand(), b in operand()) {
        let e = Engine::with_rule(rule);
        prop_assert_eq!(e.combine(a, b), e.combine(b, a));
    }

    #[test]
    fn power_zero_is_one(rule in any_rule(), a in operand()) {
        let e = Engine::with_rule(rule);
        prop_assert_eq!(e.power(a, 0), 1.0);
    }

    #[test]
    fn power_one_is_identity(rule in any_rule(), a in operand()) {
        let e = Engine::with_rule(rule);
        prop_assert_eq!(e.power(a, 1), a);
    }

    #[test]
    fn rule_name_roundtrip(rule in any_rule()) {
        prop_assert_eq!(rule.to_string().parse::<Rule>().unwrap(), rule);
        prop_assert_eq!(Engine::new(rule.as_str()).unwrap().rule(), rule);
    }

    #[test]
    fn ordinary_rule_is_associative(a in operand(), b in operand(), c in operand()) {
        let e = Engine::with_rule(Rule::ATimesB);
        prop_assert_eq!(e.combine(e.combine(a, b), c), e.combine(a, e.combine(b, c)));
    }

    #[test]
    fn ordinary_rule_distributes(a in operand(), b in operand(), c in operand()) {
        let e = Engine::with_rule(Rule::ATimesB);
        prop_assert_eq!(
            e.combine(a, e.add(b, c)),
            e.add(e.combine(a, b), e.combine(a, c))
        );
    }

    #[test]
    fn ordinary_rule_identity_and_zero(a in operand()) {
        let e = Engine::with_rule(Rule::ATimesB);
        prop_assert_eq!(e.combine(a, 1.0), a);
        prop_assert_eq!(e.combine(a, 0.0), 0.0);
    }

    #[test]
    fn terry_original_only_differs_at_one_one(a in operand(), b in operand()) {
        prop_assume!(!(a == 1.0 && b == 1.0));
        let terry = Engine::with_rule(Rule::TerryOriginal);
        let ordinary = Engine::with_rule(Rule::ATimesB);
        prop_assert_eq!(terry.combine(a, b), ordinary.combine(a, b));
    }
}

#[test]
fn other_rules_break_classical_laws() {
    let e = Engine::with_rule(Rule::APlusB);
    // zero is not absorbing and one is not neutral
    assert_eq!(e.combine(5.0, 0.0), 5.0);
    assert_eq!(e.combine(5.0, 1.0), 6.0);

    let e = Engine::with_rule(Rule::TerryOriginal);
    // (1 * 1) * 3 = 6 but 1 * (1 * 3) = 3
    assert_eq!(e.combine(e.combine(1.0, 1.0), 3.0), 6.0);
    assert_eq!(e.combine(1.0, e.combine(1.0, 3.0)), 3.0);
}
