use anyhow::{Result, bail};
use indexmap::IndexSet;

use super::{AtomTable, EntailmentOracle};
use crate::logic::Clause;

pub const MAX_TABLE_ATOMS: usize = 20;

#[derive(Debug, Clone, Copy, Default)]
pub struct TruthTableOracle {
    rows_checked: u64,
}

impl TruthTableOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows_checked(&self) -> u64 {
        self.rows_checked
    }
}

impl EntailmentOracle for TruthTableOracle {
    fn entails(&mut self, kb: &IndexSet<Clause>, goal: &Clause) -> Result<bool> {
        let table = AtomTable::from_problem(kb, goal);
        if table.len() > MAX_TABLE_ATOMS {
            bail!(
                "truth table over {} atoms exceeds limit {}",
                table.len(),
                MAX_TABLE_ATOMS
            );
        }

        let rows = 1u64 << table.len();
        for row in 0..rows {
            self.rows_checked += 1;
            if kb.iter().all(|c| eval_clause(c, &table, row)) && !eval_clause(goal, &table, row) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn backend_name(&self) -> &'static str {
        "truth-table"
    }
}

fn eval_clause(clause: &Clause, table: &AtomTable, row: u64) -> bool {
    clause.literals().any(|lit| {
        let value = table
            .var(lit)
            .map(|var| (row >> var) & 1 == 1)
            .unwrap_or(false);
        value != lit.is_negated()
    })
}
