//! Core primitives.
//!
//! Randomness sources for move selection. The decision logic itself is
//! deterministic; everything random sits behind the [`rand::MoveSource`]
//! seam so it can be swapped out in tests.

pub mod rand;

// Re-export core types
pub use self::rand::{MoveSource, OsMoveSource, SeededMoveSource};
