pub mod clause;
pub mod literal;
pub mod text;

pub use clause::Clause;
pub use literal::{GRID_LIMIT, Label, Literal, Position};
