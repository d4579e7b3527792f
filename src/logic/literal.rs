use std::cmp::Ordering;
use std::fmt;

/// Largest coordinate accepted by the text format.
pub const GRID_LIMIT: u8 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Wumpus,
    Teleporter,
    Poison,
    Safe,
    Fumes,
    Glow,
    Stench,
    Atom(String),
}

impl Label {
    pub fn atom(name: impl Into<String>) -> Self {
        Self::Atom(name.into())
    }

    /// Maps a textual name onto the world vocabulary, falling back to an atom.
    pub fn from_name(name: &str) -> Self {
        match name {
            "wumpus" => Self::Wumpus,
            "teleporter" => Self::Teleporter,
            "poison" => Self::Poison,
            "okay" => Self::Safe,
            "fumes" => Self::Fumes,
            "glow" => Self::Glow,
            "stench" => Self::Stench,
            other => Self::Atom(other.to_owned()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Wumpus => "wumpus",
            Self::Teleporter => "teleporter",
            Self::Poison => "poison",
            Self::Safe => "okay",
            Self::Fumes => "fumes",
            Self::Glow => "glow",
            Self::Stench => "stench",
            Self::Atom(name) => name,
        }
    }

    pub fn is_deadly(&self) -> bool {
        matches!(self, Self::Wumpus | Self::Poison)
    }

    pub fn is_wtp(&self) -> bool {
        matches!(self, Self::Wumpus | Self::Teleporter | Self::Poison)
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Safe)
    }

    pub fn is_teleporter(&self) -> bool {
        matches!(self, Self::Teleporter)
    }

    pub fn is_indicator(&self) -> bool {
        matches!(self, Self::Fumes | Self::Glow | Self::Stench)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Linear state weight; consistent for maps up to 20x20.
    pub fn weight(self) -> u32 {
        20 * self.x as u32 + self.y as u32
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A labelled proposition about one grid cell, possibly negated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    label: Label,
    position: Position,
    negated: bool,
}

impl Literal {
    pub fn new(label: Label, position: Position, negated: bool) -> Self {
        Self {
            label,
            position,
            negated,
        }
    }

    pub fn positive(label: Label, position: Position) -> Self {
        Self::new(label, position, false)
    }

    pub fn negative(label: Label, position: Position) -> Self {
        Self::new(label, position, true)
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn negate(&self) -> Self {
        Self {
            label: self.label.clone(),
            position: self.position,
            negated: !self.negated,
        }
    }

    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.negated != other.negated && self.label == other.label && self.position == other.position
    }

    pub fn is_deadly(&self) -> bool {
        self.label.is_deadly()
    }

    pub fn is_wtp(&self) -> bool {
        self.label.is_wtp()
    }

    pub fn is_safe(&self) -> bool {
        self.label.is_safe()
    }

    pub fn is_teleporter(&self) -> bool {
        self.label.is_teleporter()
    }

    pub fn is_indicator(&self) -> bool {
        self.label.is_indicator()
    }
}

// Position weight first; the remaining keys only break ties so that the
// order stays total and agrees with Eq.
impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position
            .weight()
            .cmp(&other.position.weight())
            .then(self.position.x.cmp(&other.position.x))
            .then(self.position.y.cmp(&other.position.y))
            .then_with(|| self.label.cmp(&other.label))
            .then(self.negated.cmp(&other.negated))
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("~")?;
        }
        write!(f, "{}@{}", self.label, self.position)
    }
}
