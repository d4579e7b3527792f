use indexmap::IndexSet;

use refute::resolution::{Budget, Cancellation, Outcome, ResolutionConfig, prove, resolution};
use refute::{Clause, Label, Literal, Position};

fn lit(name: &str, negated: bool) -> Literal {
    Literal::new(Label::from_name(name), Position::default(), negated)
}

fn clause(lits: &[(&str, bool)]) -> Clause {
    lits.iter().map(|&(n, neg)| lit(n, neg)).collect()
}

fn kb(clauses: Vec<Clause>) -> IndexSet<Clause> {
    clauses.into_iter().collect()
}

fn chain_kb() -> IndexSet<Clause> {
    kb(vec![
        clause(&[("a", true), ("b", false)]),
        clause(&[("b", true), ("c", false)]),
        clause(&[("a", false)]),
    ])
}

#[test]
fn chained_modus_ponens() {
    let kb = chain_kb();
    let goal = clause(&[("c", false)]);
    assert!(resolution(&kb, &goal));

    let report = prove(&kb, &goal, &ResolutionConfig::default());
    assert_eq!(report.outcome, Outcome::Refuted);
    assert_eq!(report.stats.iterations, 9);
    assert_eq!(report.stats.resolvents, 8);
    assert_eq!(report.stats.pruned, 6);
    assert_eq!(report.stats.peak_support, 4);
    assert_eq!(report.stats.cancelled.total(), 3);
    assert_eq!(report.stats.cancelled.get(&Label::atom("a")), 1);
}

#[test]
fn unit_against_disjunctive_goal() {
    let kb = kb(vec![clause(&[("f", false)])]);
    let goal = clause(&[("f", false), ("g", false)]);
    let report = prove(&kb, &goal, &ResolutionConfig::default());
    assert!(report.is_refuted());
    assert_eq!(report.stats.iterations, 1);
}

#[test]
fn disjoint_atoms_terminate_unrefuted() {
    let kb = kb(vec![clause(&[("a", true), ("b", false)])]);
    let goal = clause(&[("c", false)]);
    assert!(!resolution(&kb, &goal));

    let report = prove(&kb, &goal, &ResolutionConfig::unbounded());
    assert_eq!(report.outcome, Outcome::Exhausted);
    assert_eq!(report.stats.iterations, 2);
    assert_eq!(report.stats.tried_pairs, 2);
    assert_eq!(report.stats.final_support, 1);
}

#[test]
fn unit_goal_refuted_on_first_pair() {
    let kb = kb(vec![clause(&[("a", false)])]);
    let goal = clause(&[("a", false)]);
    let report = prove(&kb, &goal, &ResolutionConfig::default().with_trace(true));
    assert!(report.is_refuted());
    assert_eq!(report.stats.iterations, 1);
    assert_eq!(report.trace.len(), 1);
    assert_eq!(report.trace[0].first, clause(&[("a", false)]));
    assert_eq!(report.trace[0].second, clause(&[("a", true)]));
    assert!(report.trace[0].resolvent.is_empty());
}

#[test]
fn three_premise_conflict_is_refuted() {
    let kb = kb(vec![
        clause(&[("t", true), ("u", false)]),
        clause(&[("t", false), ("a", false)]),
        clause(&[("u", true), ("a", true)]),
    ]);
    let goal = clause(&[("t", true), ("a", true)]);
    assert!(resolution(&kb, &goal));
}

#[test]
fn support_inside_knowledge_base_saturates() {
    let kb = kb(vec![clause(&[("c", true)])]);
    let goal = clause(&[("c", false)]);
    let report = prove(&kb, &goal, &ResolutionConfig::default());
    assert_eq!(report.outcome, Outcome::Saturated);
    assert_eq!(report.stats.iterations, 1);
}

#[test]
fn empty_goal_has_nothing_to_support() {
    let kb = chain_kb();
    let report = prove(&kb, &Clause::empty(), &ResolutionConfig::default());
    assert_eq!(report.outcome, Outcome::Exhausted);
    assert_eq!(report.stats.iterations, 0);
}

#[test]
fn iteration_budget_stops_the_loop() {
    let cfg = ResolutionConfig::default().with_max_iterations(1);
    let report = prove(&chain_kb(), &clause(&[("c", false)]), &cfg);
    assert_eq!(report.outcome, Outcome::BudgetExceeded(Budget::Iterations));
    assert_eq!(report.stats.iterations, 1);
    assert!(!report.is_refuted());
}

#[test]
fn support_budget_stops_the_loop() {
    let cfg = ResolutionConfig::default().with_max_support(1);
    let report = prove(&chain_kb(), &clause(&[("c", false)]), &cfg);
    assert_eq!(report.outcome, Outcome::BudgetExceeded(Budget::Support));
    assert_eq!(report.stats.iterations, 2);
}

#[test]
fn runs_are_deterministic() {
    let cfg = ResolutionConfig::default().with_trace(true);
    let goal = clause(&[("c", false)]);
    let first = prove(&chain_kb(), &goal, &cfg);
    let second = prove(&chain_kb(), &goal, &cfg);
    assert_eq!(first, second);
    assert_eq!(first.trace.len(), first.stats.iterations);
}

#[test]
fn cancel_all_overreaches_where_single_does_not() {
    // a=b=true, c=false satisfies the knowledge base, so c is not entailed
    let kb = kb(vec![
        clause(&[("a", false), ("b", true)]),
        clause(&[("b", false), ("a", true), ("c", false)]),
    ]);
    let goal = clause(&[("c", false)]);

    let all = prove(&kb, &goal, &ResolutionConfig::default());
    assert!(all.is_refuted());
    assert_eq!(all.stats.iterations, 3);

    let single = prove(
        &kb,
        &goal,
        &ResolutionConfig::default().with_cancellation(Cancellation::Single),
    );
    assert!(!single.is_refuted());
    assert!(matches!(
        single.outcome,
        Outcome::Exhausted | Outcome::Saturated
    ));
}

#[test]
fn config_rejects_zero_budgets() {
    assert!(ResolutionConfig::default().validate().is_ok());
    assert!(ResolutionConfig::default()
        .with_max_iterations(0)
        .validate()
        .is_err());
    assert!(ResolutionConfig::default()
        .with_max_support(0)
        .validate()
        .is_err());
}
