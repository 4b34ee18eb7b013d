//! Outcome Matrix
//!
//! The full N x N outcome table derived from [`OutcomeRule`], used for the
//! help display. Every cell delegates to the rule; the matrix carries no
//! decision logic of its own and is never consulted when resolving a live
//! round.

use serde::{Deserialize, Serialize};

use crate::game::moves::{MoveSet, UnknownMoveError};
use crate::game::rules::{Outcome, OutcomeRule};

/// Derived N x N outcome table, row-major in move-set order.
///
/// The row index plays the "player" role and the column index the
/// "computer" role, so `outcome(i, j)` reads as "move `i` against move `j`,
/// from move `i`'s perspective".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeMatrix {
    moves: Vec<String>,
    cells: Vec<Outcome>,
}

impl OutcomeMatrix {
    /// Derive the table for a move set.
    pub fn build(set: &MoveSet) -> Self {
        let rule = OutcomeRule::new(set);
        let n = set.len();

        let mut cells = Vec::with_capacity(n * n);
        for player in 0..n {
            for computer in 0..n {
                cells.push(rule.decide_indices(player, computer));
            }
        }

        Self {
            moves: set.moves().to_vec(),
            cells,
        }
    }

    /// Number of moves (the table is `len x len`).
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// A derived matrix is never empty (move sets have at least 3 moves).
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Move names labelling the rows and columns, in cycle order.
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// Cell at (player row, computer column), if both are in range.
    pub fn outcome(&self, player: usize, computer: usize) -> Option<Outcome> {
        if player < self.len() && computer < self.len() {
            Some(self.cells[player * self.len() + computer])
        } else {
            None
        }
    }

    /// Cell looked up by move name.
    pub fn outcome_for(&self, player: &str, computer: &str) -> Result<Outcome, UnknownMoveError> {
        let p = self.index_of(player)?;
        let c = self.index_of(computer)?;
        Ok(self.cells[p * self.len() + c])
    }

    /// Iterate rows as `(player move, outcomes against each column)`.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Outcome])> {
        let n = self.len();
        self.moves
            .iter()
            .zip(self.cells.chunks(n))
            .map(|(name, row)| (name.as_str(), row))
    }

    fn index_of(&self, name: &str) -> Result<usize, UnknownMoveError> {
        self.moves
            .iter()
            .position(|m| m == name)
            .ok_or_else(|| UnknownMoveError(name.to_owned()))
    }
}
