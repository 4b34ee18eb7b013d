//! Move Set
//!
//! The ordered list of move names for one game. Position in the list
//! defines the cyclic ordering the outcome rule operates on, so the set is
//! immutable once constructed and validated up front: an odd number of
//! moves (at least 3), no duplicates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Rejected move lists, raised at construction before any round exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveSetError {
    /// Fewer than 3 moves were supplied.
    #[error("at least 3 moves are required, got {0}")]
    TooFew(usize),

    /// The number of moves is even, so wins and losses cannot split evenly.
    #[error("an odd number of moves is required, got {0}")]
    EvenCount(usize),

    /// The same move name appears more than once.
    #[error("duplicate move {0:?}")]
    Duplicate(String),
}

/// A move was looked up that is not part of the set.
///
/// Callers validate selections before handing them to the core, so hitting
/// this indicates a caller bug rather than a runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("move {0:?} is not part of the move set")]
pub struct UnknownMoveError(
    /// The offending move name.
    pub String,
);

/// Validated, ordered collection of unique move names.
///
/// # Example
///
/// ```
/// use cycle_duel::game::moves::MoveSet;
///
/// let set = MoveSet::new(vec!["rock".into(), "paper".into(), "scissors".into()]).unwrap();
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.win_distance(), 1);
/// assert_eq!(set.index_of("paper").unwrap(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSet {
    moves: Vec<String>,
}

impl MoveSet {
    /// Validate and construct a move set.
    ///
    /// Input order is preserved; it defines the cycle.
    pub fn new(moves: Vec<String>) -> Result<Self, MoveSetError> {
        if moves.len() < 3 {
            return Err(MoveSetError::TooFew(moves.len()));
        }
        if moves.len() % 2 == 0 {
            return Err(MoveSetError::EvenCount(moves.len()));
        }

        let mut seen = BTreeSet::new();
        for name in &moves {
            if !seen.insert(name.as_str()) {
                return Err(MoveSetError::Duplicate(name.clone()));
            }
        }

        Ok(Self { moves })
    }

    /// Number of moves in the set (always odd, at least 3).
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// A validated move set is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// How many other moves each move beats (and loses to): `len / 2`.
    pub fn win_distance(&self) -> usize {
        self.moves.len() / 2
    }

    /// Position of a move in the cycle.
    pub fn index_of(&self, name: &str) -> Result<usize, UnknownMoveError> {
        self.moves
            .iter()
            .position(|m| m == name)
            .ok_or_else(|| UnknownMoveError(name.to_owned()))
    }

    /// Move name at the given cycle position, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.moves.get(index).map(String::as_str)
    }

    /// All move names, in cycle order.
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// Whether a name belongs to the set.
    pub fn contains(&self, name: &str) -> bool {
        self.moves.iter().any(|m| m == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_sets() {
        for list in [
            vec!["rock", "paper", "scissors"],
            vec!["a", "b", "c", "d", "e"],
            vec!["1", "2", "3", "4", "5", "6", "7"],
        ] {
            let set = MoveSet::new(names(&list)).unwrap();
            assert_eq!(set.len(), list.len());
            assert_eq!(set.win_distance(), list.len() / 2);
        }
    }

    #[test]
    fn test_too_few_rejected() {
        assert_eq!(MoveSet::new(names(&[])), Err(MoveSetError::TooFew(0)));
        assert_eq!(MoveSet::new(names(&["rock"])), Err(MoveSetError::TooFew(1)));
        assert_eq!(
            MoveSet::new(names(&["rock", "paper"])),
            Err(MoveSetError::TooFew(2))
        );
    }

    #[test]
    fn test_even_count_rejected() {
        assert_eq!(
            MoveSet::new(names(&["a", "b", "c", "d"])),
            Err(MoveSetError::EvenCount(4))
        );
        assert_eq!(
            MoveSet::new(names(&["a", "b", "c", "d", "e", "f"])),
            Err(MoveSetError::EvenCount(6))
        );
    }

    #[test]
    fn test_duplicates_rejected() {
        assert_eq!(
            MoveSet::new(names(&["rock", "paper", "rock"])),
            Err(MoveSetError::Duplicate("rock".to_string()))
        );
        // Duplicate check fires even when the count is valid
        assert_eq!(
            MoveSet::new(names(&["a", "b", "c", "b", "e"])),
            Err(MoveSetError::Duplicate("b".to_string()))
        );
    }

    #[test]
    fn test_order_preserved() {
        let set = MoveSet::new(names(&["scissors", "rock", "paper"])).unwrap();
        assert_eq!(set.get(0), Some("scissors"));
        assert_eq!(set.get(1), Some("rock"));
        assert_eq!(set.get(2), Some("paper"));
        assert_eq!(set.get(3), None);
    }

    #[test]
    fn test_index_lookup() {
        let set = MoveSet::new(names(&["rock", "paper", "scissors"])).unwrap();
        assert_eq!(set.index_of("rock").unwrap(), 0);
        assert_eq!(set.index_of("scissors").unwrap(), 2);
        assert!(set.contains("paper"));
        assert!(!set.contains("lizard"));
        assert_eq!(
            set.index_of("lizard"),
            Err(UnknownMoveError("lizard".to_string()))
        );
    }
}
