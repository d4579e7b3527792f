pub mod truth_table;
pub mod varisat;

use anyhow::{Result, bail};
use indexmap::{IndexMap, IndexSet};

use crate::logic::{Clause, Label, Literal, Position};

pub use self::truth_table::{MAX_TABLE_ATOMS, TruthTableOracle};
pub use self::varisat::VarisatOracle;

/// Decides classical entailment `kb ⊨ goal` independently of the prover.
pub trait EntailmentOracle {
    fn entails(&mut self, kb: &IndexSet<Clause>, goal: &Clause) -> Result<bool>;
    fn backend_name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleBackend {
    TruthTable,
    Varisat,
}

impl OracleBackend {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "truth-table" => Ok(Self::TruthTable),
            "varisat" => Ok(Self::Varisat),
            _ => bail!("unknown backend '{}', expected truth-table|varisat", name),
        }
    }

    pub fn build(self) -> Box<dyn EntailmentOracle> {
        match self {
            Self::TruthTable => Box::new(TruthTableOracle::new()),
            Self::Varisat => Box::new(VarisatOracle::new()),
        }
    }
}

/// Dense variable numbering (from 0) for the atoms of a clause set.
#[derive(Debug, Clone, Default)]
pub struct AtomTable {
    atoms: IndexMap<(Label, Position), usize>,
}

impl AtomTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_problem(kb: &IndexSet<Clause>, goal: &Clause) -> Self {
        let mut table = Self::new();
        for clause in kb.iter().chain(std::iter::once(goal)) {
            for lit in clause.literals() {
                table.intern(lit);
            }
        }
        table
    }

    pub fn intern(&mut self, lit: &Literal) -> usize {
        let next = self.atoms.len();
        *self
            .atoms
            .entry((lit.label().clone(), lit.position()))
            .or_insert(next)
    }

    pub fn var(&self, lit: &Literal) -> Option<usize> {
        self.atoms.get(&(lit.label().clone(), lit.position())).copied()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}
