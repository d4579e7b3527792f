use refute::resolution::{Cancellation, resolve_pair, resolve_pair_with};
use refute::{Clause, Label, Literal, Position};

fn lit(name: &str, negated: bool) -> Literal {
    Literal::new(Label::from_name(name), Position::default(), negated)
}

fn clause(lits: &[(&str, bool)]) -> Clause {
    lits.iter().map(|&(n, neg)| lit(n, neg)).collect()
}

#[test]
fn one_complementary_pair_gives_union_of_remainders() {
    let first = clause(&[("a", true), ("b", false)]);
    let second = clause(&[("a", false), ("c", false)]);
    assert_eq!(
        resolve_pair(&first, &second),
        clause(&[("b", false), ("c", false)])
    );
}

#[test]
fn complementary_units_give_empty_clause() {
    let first = clause(&[("a", false)]);
    let second = clause(&[("a", true)]);
    let out = resolve_pair(&first, &second);
    assert!(out.is_empty());
    assert_eq!(out, Clause::empty());
}

#[test]
fn shared_remainders_collapse() {
    let first = clause(&[("a", false), ("b", false)]);
    let second = clause(&[("a", true), ("b", false)]);
    assert_eq!(resolve_pair(&first, &second), clause(&[("b", false)]));
}

#[test]
fn no_complement_gives_plain_union() {
    let first = clause(&[("a", true), ("b", false)]);
    let second = clause(&[("c", true)]);
    assert_eq!(
        resolve_pair(&first, &second),
        clause(&[("a", true), ("b", false), ("c", true)])
    );
}

#[test]
fn cancel_all_removes_every_pair() {
    let first = clause(&[("a", false), ("b", true)]);
    let second = clause(&[("a", true), ("b", false)]);
    assert!(resolve_pair_with(&first, &second, Cancellation::All).is_empty());
}

#[test]
fn single_cancellation_keeps_later_pairs() {
    let first = clause(&[("a", false), ("b", true)]);
    let second = clause(&[("a", true), ("b", false)]);
    let out = resolve_pair_with(&first, &second, Cancellation::Single);
    assert_eq!(out, clause(&[("b", true), ("b", false)]));
}

#[test]
fn tautology_against_itself() {
    let taut = clause(&[("a", false), ("a", true)]);
    assert!(resolve_pair_with(&taut, &taut, Cancellation::All).is_empty());
    assert_eq!(resolve_pair_with(&taut, &taut, Cancellation::Single), taut);
}
