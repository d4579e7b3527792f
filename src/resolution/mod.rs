//! Set-of-support refutation resolution.
//!
//! The goal is negated into unit clauses that seed the set of support. Pairs
//! are drawn knowledge-base-first, then from within the support set, each at
//! most once per run. A run ends on the empty clause, when no untried pair is
//! left, when the support set collapses into the knowledge base, or when a
//! configured budget is hit.

pub mod config;
pub mod resolve;

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::counter::Counter;
use crate::logic::{Clause, Label};

pub use config::{ConfigError, DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_SUPPORT, ResolutionConfig};
pub use resolve::{Cancellation, resolve_pair, resolve_pair_with};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Iterations,
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The empty clause was derived.
    Refuted,
    /// Every reachable pair has been tried.
    Exhausted,
    /// The support set holds nothing beyond the knowledge base.
    Saturated,
    BudgetExceeded(Budget),
}

impl Outcome {
    pub fn is_refuted(self) -> bool {
        matches!(self, Self::Refuted)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Refuted => "refuted",
            Self::Exhausted => "exhausted",
            Self::Saturated => "saturated",
            Self::BudgetExceeded(Budget::Iterations) => "budget_iterations",
            Self::BudgetExceeded(Budget::Support) => "budget_support",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProofStats {
    pub iterations: usize,
    pub resolvents: usize,
    pub pruned: usize,
    pub tried_pairs: usize,
    pub peak_support: usize,
    pub final_support: usize,
    /// Cancelled complementary pairs, keyed by label.
    pub cancelled: Counter<Label>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionStep {
    pub first: Clause,
    pub second: Clause,
    pub resolvent: Clause,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofReport {
    pub outcome: Outcome,
    pub stats: ProofStats,
    pub trace: Vec<ResolutionStep>,
}

impl ProofReport {
    pub fn is_refuted(&self) -> bool {
        self.outcome.is_refuted()
    }
}

/// Returns true when `clauses` together with the negated `goal` refute to
/// the empty clause under the default configuration.
pub fn resolution(clauses: &IndexSet<Clause>, goal: &Clause) -> bool {
    prove(clauses, goal, &ResolutionConfig::default()).is_refuted()
}

pub fn prove(clauses: &IndexSet<Clause>, goal: &Clause, cfg: &ResolutionConfig) -> ProofReport {
    log::debug!(
        "refutation start: kb={} goal={} rule={:?}",
        clauses.len(),
        goal,
        cfg.cancellation
    );
    let mut run = Run::new(clauses, goal, cfg);
    let outcome = run.drive();
    let report = run.finish(outcome);
    log::debug!(
        "refutation end: outcome={} iterations={} support={}",
        report.outcome.name(),
        report.stats.iterations,
        report.stats.final_support
    );
    report
}

struct Run<'a> {
    cfg: &'a ResolutionConfig,
    // every distinct clause seen in this run; ids below kb_len are the knowledge base
    arena: IndexSet<Clause>,
    kb_len: usize,
    support: IndexSet<usize>,
    tried: HashSet<(usize, usize)>,
    stats: ProofStats,
    trace: Vec<ResolutionStep>,
}

impl<'a> Run<'a> {
    fn new(clauses: &IndexSet<Clause>, goal: &Clause, cfg: &'a ResolutionConfig) -> Self {
        let mut arena = clauses.clone();
        let kb_len = arena.len();
        let mut support = IndexSet::new();
        for unit in goal.negate_all() {
            let (id, _) = arena.insert_full(unit);
            support.insert(id);
        }
        let stats = ProofStats {
            peak_support: support.len(),
            ..ProofStats::default()
        };
        Self {
            cfg,
            arena,
            kb_len,
            support,
            tried: HashSet::new(),
            stats,
            trace: Vec::new(),
        }
    }

    fn drive(&mut self) -> Outcome {
        loop {
            if let Some(max) = self.cfg.max_iterations {
                if self.stats.iterations >= max {
                    return Outcome::BudgetExceeded(Budget::Iterations);
                }
            }

            let Some((a, b)) = self.select_clauses() else {
                return Outcome::Exhausted;
            };
            self.stats.iterations += 1;

            let (resolvent, cancelled) =
                resolve::resolve_counting(&self.arena[a], &self.arena[b], self.cfg.cancellation);
            for lit in cancelled {
                self.stats.cancelled.increment(lit.label().clone());
            }
            log::trace!(
                "resolve ({}) with ({}) -> ({})",
                self.arena[a],
                self.arena[b],
                resolvent
            );
            if self.cfg.record_trace {
                self.trace.push(ResolutionStep {
                    first: self.arena[a].clone(),
                    second: self.arena[b].clone(),
                    resolvent: resolvent.clone(),
                });
            }

            if resolvent.is_empty() {
                return Outcome::Refuted;
            }
            self.stats.resolvents += 1;

            let (id, _) = self.arena.insert_full(resolvent);
            self.support.insert(id);
            self.stats.peak_support = self.stats.peak_support.max(self.support.len());

            if self.support.iter().all(|&id| id < self.kb_len) {
                return Outcome::Saturated;
            }

            self.prune();

            if let Some(max) = self.cfg.max_support {
                if self.support.len() > max {
                    return Outcome::BudgetExceeded(Budget::Support);
                }
            }
        }
    }

    /// Knowledge base against support first, then support against itself.
    fn select_clauses(&mut self) -> Option<(usize, usize)> {
        let support = &self.support;
        let tried = &self.tried;
        let kb_pairs = (0..self.kb_len).flat_map(move |c1| support.iter().map(move |&c2| (c1, c2)));
        let sos_pairs = support
            .iter()
            .flat_map(move |&c1| support.iter().map(move |&c2| (c1, c2)));
        let picked = kb_pairs
            .chain(sos_pairs)
            .find(|pair| !tried.contains(pair))?;
        self.tried.insert(picked);
        Some(picked)
    }

    fn prune(&mut self) {
        let snapshot = self.support.iter().copied().collect::<Vec<_>>();
        for id in snapshot {
            let redundant = self.arena[id]
                .is_redundant(self.support.iter().map(|&other| &self.arena[other]));
            if redundant {
                log::trace!("prune subsumed ({})", self.arena[id]);
                self.support.shift_remove(&id);
                self.stats.pruned += 1;
            }
        }
    }

    fn finish(mut self, outcome: Outcome) -> ProofReport {
        self.stats.tried_pairs = self.tried.len();
        self.stats.final_support = self.support.len();
        ProofReport {
            outcome,
            stats: self.stats,
            trace: self.trace,
        }
    }
}
