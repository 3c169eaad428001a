use crate::world::Phase;
use thiserror::Error;

/// Errors surfaced by the simulation engine to its callers.
///
/// Invariant violations inside a running generation (a grid counter
/// underflow, breeding from an empty parent pool) are bugs and panic instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// A lifecycle call was made while the world was in the wrong phase.
    #[error("expected world phase {expected:?}, found {actual:?}")]
    InvalidPhase { expected: Phase, actual: Phase },

    /// A raw chromosome gene lies outside the range of its slot.
    #[error("gene {index} out of range: {value}")]
    InvalidGene { index: usize, value: u8 },

    /// Every cell holds a strawberry, so no mushroom can be placed.
    #[error("no strawberry-free cell left to place a mushroom on")]
    NoFreeCell,
}
