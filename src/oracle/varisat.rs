use anyhow::{Result, bail};
use indexmap::IndexSet;
use varisat::ExtendFormula;

use super::{AtomTable, EntailmentOracle};
use crate::logic::{Clause, Literal};

/// Entailment through unsatisfiability of `kb ∧ ¬goal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VarisatOracle {
    solve_calls: usize,
}

impl VarisatOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solve_calls(&self) -> usize {
        self.solve_calls
    }
}

impl EntailmentOracle for VarisatOracle {
    fn entails(&mut self, kb: &IndexSet<Clause>, goal: &Clause) -> Result<bool> {
        let table = AtomTable::from_problem(kb, goal);
        let mut solver = varisat::Solver::new();
        let vars = (0..table.len())
            .map(|_| solver.new_var())
            .collect::<Vec<_>>();

        for clause in kb {
            let lits = clause
                .literals()
                .filter_map(|lit| to_lit(lit, &table, &vars))
                .collect::<Vec<_>>();
            solver.add_clause(&lits);
        }
        // the negated goal is a conjunction of units
        for lit in goal.literals() {
            if let Some(l) = to_lit(&lit.negate(), &table, &vars) {
                solver.add_clause(&[l]);
            }
        }

        self.solve_calls += 1;
        match solver.solve() {
            Ok(sat) => Ok(!sat),
            Err(_) => bail!("varisat solve failed"),
        }
    }

    fn backend_name(&self) -> &'static str {
        "varisat"
    }
}

fn to_lit(lit: &Literal, table: &AtomTable, vars: &[varisat::Var]) -> Option<varisat::Lit> {
    let var = *vars.get(table.var(lit)?)?;
    Some(varisat::Lit::from_var(var, !lit.is_negated()))
}
