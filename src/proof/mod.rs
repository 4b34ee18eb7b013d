//! Fairness Proof
//!
//! The commitment scheme that makes the game provably fair: the computer
//! commits to its move before the player chooses, and the disclosed key
//! lets the player verify the move was never swapped.
//!
//! - `commitment`: HMAC-SHA-256 keyed commitments and secret keys

pub mod commitment;

// Re-export key types
pub use commitment::{Commitment, SecretKey, KEY_LEN};
