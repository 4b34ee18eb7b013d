//! Outcome Rule
//!
//! Generalized rock-paper-scissors decision over an odd number of moves
//! arranged in a cycle. Each move beats the `win_distance = N / 2` moves
//! that follow it in increasing-index direction (wrapping at the end) and
//! loses to the `win_distance` moves behind it. For odd N this splits the
//! other N-1 moves into two equal halves; N = 3 is classic
//! rock-paper-scissors.
//!
//! The "forward" direction (increasing index) is an arbitrary but fixed
//! convention. It is pinned by the tests below; changing it silently
//! inverts every non-draw result.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game::moves::{MoveSet, UnknownMoveError};

/// Result of one round, from the player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Both parties played the same move.
    Draw,
    /// The player's move beats the computer's.
    PlayerWins,
    /// The computer's move beats the player's.
    ComputerWins,
}

impl Outcome {
    /// The outcome of the same pair with the roles swapped.
    pub fn invert(self) -> Self {
        match self {
            Self::Draw => Self::Draw,
            Self::PlayerWins => Self::ComputerWins,
            Self::ComputerWins => Self::PlayerWins,
        }
    }

    /// Help-table cell label, from the row (player) perspective.
    pub fn cell(self) -> &'static str {
        match self {
            Self::Draw => "Draw",
            Self::PlayerWins => "Win",
            Self::ComputerWins => "Lose",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draw => write!(f, "Draw"),
            Self::PlayerWins => write!(f, "Player wins"),
            Self::ComputerWins => write!(f, "Computer wins"),
        }
    }
}

/// Pure win/lose/draw decision over a fixed move set.
///
/// # Example
///
/// ```
/// use cycle_duel::game::moves::MoveSet;
/// use cycle_duel::game::rules::{Outcome, OutcomeRule};
///
/// let set = MoveSet::new(vec!["rock".into(), "paper".into(), "scissors".into()]).unwrap();
/// let rule = OutcomeRule::new(&set);
/// assert_eq!(rule.decide("rock", "scissors").unwrap(), Outcome::PlayerWins);
/// assert_eq!(rule.decide("rock", "paper").unwrap(), Outcome::ComputerWins);
/// assert_eq!(rule.decide("rock", "rock").unwrap(), Outcome::Draw);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct OutcomeRule<'a> {
    moves: &'a MoveSet,
    win_distance: usize,
}

impl<'a> OutcomeRule<'a> {
    /// Build the rule for a move set, precomputing the win distance.
    pub fn new(moves: &'a MoveSet) -> Self {
        Self {
            moves,
            win_distance: moves.win_distance(),
        }
    }

    /// Decide a round by move name.
    pub fn decide(&self, player: &str, computer: &str) -> Result<Outcome, UnknownMoveError> {
        let p = self.moves.index_of(player)?;
        let c = self.moves.index_of(computer)?;
        Ok(self.decide_indices(p, c))
    }

    /// Decide a round by cycle position. Both indices must be in range.
    pub fn decide_indices(&self, player: usize, computer: usize) -> Outcome {
        let n = self.moves.len();
        debug_assert!(player < n && computer < n);

        if player == computer {
            return Outcome::Draw;
        }

        // Cyclic steps from the computer's move to the player's move,
        // walking in increasing-index direction
        let forward = (n + player - computer) % n;

        if (1..=self.win_distance).contains(&forward) {
            Outcome::PlayerWins
        } else {
            Outcome::ComputerWins
        }
    }
}
