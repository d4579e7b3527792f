use anyhow::{Result, bail};
use indexmap::IndexSet;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::logic::{Clause, GRID_LIMIT, Label, Literal, Position};

const WORLD_LABELS: [Label; 4] = [Label::Wumpus, Label::Poison, Label::Teleporter, Label::Stench];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceShape {
    pub atoms: usize,
    pub clauses: usize,
    /// Upper bound on literals per knowledge base clause.
    pub width: usize,
}

impl InstanceShape {
    pub fn max_atoms() -> usize {
        WORLD_LABELS.len() * (GRID_LIMIT as usize + 1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.atoms == 0 {
            bail!("atoms must be >= 1");
        }
        if self.atoms > Self::max_atoms() {
            bail!("atoms must be <= {}, got {}", Self::max_atoms(), self.atoms);
        }
        if self.width == 0 {
            bail!("width must be >= 1");
        }
        Ok(())
    }
}

/// Atom `i` is a world label on column `i / 4` of row 0.
pub fn atom(i: usize) -> (Label, Position) {
    let label = WORLD_LABELS[i % WORLD_LABELS.len()].clone();
    let x = (i / WORLD_LABELS.len()).min(GRID_LIMIT as usize) as u8;
    (label, Position::new(x, 0))
}

pub fn random_instance(
    rng: &mut ChaCha8Rng,
    shape: &InstanceShape,
) -> Result<(IndexSet<Clause>, Clause)> {
    shape.validate()?;
    let mut kb = IndexSet::with_capacity(shape.clauses);
    for _ in 0..shape.clauses {
        let width = rng.random_range(1..=shape.width);
        kb.insert(random_clause(rng, shape.atoms, width));
    }
    let goal_width = rng.random_range(1..=shape.width.min(2));
    let goal = random_clause(rng, shape.atoms, goal_width);
    Ok((kb, goal))
}

fn random_clause(rng: &mut ChaCha8Rng, atoms: usize, width: usize) -> Clause {
    (0..width)
        .map(|_| {
            let (label, position) = atom(rng.random_range(0..atoms));
            Literal::new(label, position, rng.random::<bool>())
        })
        .collect()
}
