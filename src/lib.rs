pub mod counter;
pub mod gen;
pub mod logic;
pub mod oracle;
pub mod resolution;
pub mod sweep;

pub use logic::{Clause, Label, Literal, Position};
pub use resolution::{Outcome, ProofReport, ResolutionConfig, prove, resolution};
