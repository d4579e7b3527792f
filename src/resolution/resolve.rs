use crate::logic::{Clause, Literal};

/// How many complementary pairs a single resolution step cancels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cancellation {
    /// Cancel every complementary pair found in one pass. Not textbook
    /// resolution: `a | ~b` and `~a | b` resolve to the empty clause.
    #[default]
    All,
    /// Cancel only the first complementary pair in canonical order.
    Single,
}

/// Resolves with [`Cancellation::All`].
pub fn resolve_pair(first: &Clause, second: &Clause) -> Clause {
    resolve_pair_with(first, second, Cancellation::All)
}

/// Resolves two clauses; pairs with nothing to cancel yield their union.
pub fn resolve_pair_with(first: &Clause, second: &Clause, rule: Cancellation) -> Clause {
    let (resolvent, _) = resolve_counting(first, second, rule);
    resolvent
}

/// Same as [`resolve_pair_with`], also returning the cancelled literals of
/// `first`.
pub(crate) fn resolve_counting(
    first: &Clause,
    second: &Clause,
    rule: Cancellation,
) -> (Clause, Vec<Literal>) {
    let mut left = first.clone().into_literals();
    let mut right = second.clone().into_literals();
    let mut cancelled = Vec::new();

    for lit in first.literals() {
        let neg = lit.negate();
        if !second.contains(&neg) {
            continue;
        }
        left.remove(lit);
        right.remove(&neg);
        cancelled.push(lit.clone());
        if rule == Cancellation::Single {
            break;
        }
    }

    if left.is_empty() && right.is_empty() {
        return (Clause::empty(), cancelled);
    }
    left.append(&mut right);
    (Clause::from_set(left), cancelled)
}
