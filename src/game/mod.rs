//! Game Logic Module
//!
//! The rule engine: pure, synchronous, no hidden state.
//!
//! ## Module Structure
//!
//! - `moves`: validated move sets (ordered, unique, odd count)
//! - `rules`: circular-distance win/lose/draw decision
//! - `matrix`: derived N x N outcome table for the help display
//! - `round`: commit-then-reveal round orchestration

pub mod matrix;
pub mod moves;
pub mod round;
pub mod rules;

// Re-export key types
pub use matrix::OutcomeMatrix;
pub use moves::{MoveSet, MoveSetError, UnknownMoveError};
pub use round::{ResultBundle, RoundCoordinator, RoundError};
pub use rules::{Outcome, OutcomeRule};
