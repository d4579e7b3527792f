use std::collections::{BTreeSet, HashSet};
use std::fmt;

use indexmap::IndexSet;

use super::literal::Literal;

/// A disjunction of unique literals, kept in canonical literal order.
///
/// Clauses are assumed to be in CNF already; nothing here checks it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    pub fn new<I: IntoIterator<Item = Literal>>(literals: I) -> Self {
        Self {
            literals: literals.into_iter().collect(),
        }
    }

    pub fn unit(literal: Literal) -> Self {
        let mut literals = BTreeSet::new();
        literals.insert(literal);
        Self { literals }
    }

    /// The contradiction sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> + '_ {
        self.literals.iter()
    }

    pub fn is_resolvable_with(&self, other: &Clause) -> bool {
        self.literals.iter().any(|lit| other.contains(&lit.negate()))
    }

    /// True when every literal of `self` also occurs in `other`.
    pub fn subsumes(&self, other: &Clause) -> bool {
        self.literals.is_subset(&other.literals)
    }

    /// True when some other, distinct clause subsumes this one.
    pub fn is_redundant<'a, I>(&self, others: I) -> bool
    where
        I: IntoIterator<Item = &'a Clause>,
    {
        others
            .into_iter()
            .any(|other| other != self && other.subsumes(self))
    }

    /// Negates the disjunction into one unit clause per literal.
    pub fn negate_all(&self) -> IndexSet<Clause> {
        self.literals
            .iter()
            .map(|lit| Clause::unit(lit.negate()))
            .collect()
    }

    pub(crate) fn into_literals(self) -> BTreeSet<Literal> {
        self.literals
    }

    pub(crate) fn from_set(literals: BTreeSet<Literal>) -> Self {
        Self { literals }
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Self::unit(literal)
    }
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Self::new(literals)
    }
}

impl From<HashSet<Literal>> for Clause {
    fn from(literals: HashSet<Literal>) -> Self {
        Self::new(literals)
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<T: IntoIterator<Item = Literal>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return f.write_str("[]");
        }
        for (idx, lit) in self.literals.iter().enumerate() {
            if idx > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{lit}")?;
        }
        Ok(())
    }
}
