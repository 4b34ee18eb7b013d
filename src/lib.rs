//! # Cycle Duel
//!
//! Provably-fair simultaneous-choice game engine: rock-paper-scissors
//! generalized to any odd number (>= 3) of unique moves, with an
//! HMAC-SHA-256 commitment proving the computer picked its move before
//! seeing the player's.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        CYCLE DUEL                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Randomness primitives                    │
//! │  └── rand.rs     - Injectable move source (OS CSPRNG or     │
//! │                    seeded Xorshift128+ for tests)           │
//! │                                                             │
//! │  game/           - Rule engine (pure, deterministic)        │
//! │  ├── moves.rs    - Validated move sets                      │
//! │  ├── rules.rs    - Circular-distance win/lose/draw          │
//! │  ├── matrix.rs   - Derived N x N help table                 │
//! │  └── round.rs    - Commit-then-reveal round lifecycle       │
//! │                                                             │
//! │  proof/          - Fairness protocol                        │
//! │  └── commitment.rs - HMAC-SHA-256 keyed commitments         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! Each round runs commit-then-reveal:
//!
//! 1. The computer picks a move and publishes `HMAC-SHA-256(key, move)`.
//! 2. The player chooses, seeing only the commitment.
//! 3. The outcome, the computer's move, and the key are disclosed.
//!
//! Recomputing the HMAC with the disclosed key must reproduce the
//! published commitment bit-for-bit; a computer that swapped its move
//! after seeing the player's cannot produce a matching key without
//! breaking HMAC.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod proof;

// Re-export commonly used types
pub use crate::core::rand::{MoveSource, OsMoveSource, SeededMoveSource};
pub use crate::game::matrix::OutcomeMatrix;
pub use crate::game::moves::{MoveSet, MoveSetError, UnknownMoveError};
pub use crate::game::round::{ResultBundle, RoundCoordinator, RoundError};
pub use crate::game::rules::{Outcome, OutcomeRule};
pub use crate::proof::commitment::{Commitment, SecretKey, KEY_LEN};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
