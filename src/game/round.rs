//! Round Coordination
//!
//! One round of the commit-then-reveal protocol:
//!
//! 1. [`RoundCoordinator::start_round`] picks the computer's move uniformly
//!    at random, generates a fresh secret key, and returns the commitment
//!    for display. Key and move stay hidden.
//! 2. The player's move arrives from the frontend, already validated to be
//!    a menu selection.
//! 3. [`RoundCoordinator::resolve`] decides the outcome and discloses the
//!    key and the computer's move so the player can recompute the
//!    commitment.
//!
//! A round resolves at most once. Rounds carry no cross-round state; an
//! abandoned round is simply discarded, key and all.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::rand::MoveSource;
use crate::game::moves::{MoveSet, UnknownMoveError};
use crate::game::rules::{Outcome, OutcomeRule};
use crate::proof::commitment::{Commitment, SecretKey};

/// Caller-contract violations on the round lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// `resolve` was called before any round was started.
    #[error("no round in progress")]
    NotStarted,

    /// `resolve` was called a second time on an already-resolved round.
    #[error("round already resolved")]
    AlreadyResolved,

    /// The player's move is not part of the move set.
    #[error(transparent)]
    UnknownMove(#[from] UnknownMoveError),
}

/// Everything disclosed when a round resolves.
///
/// The bundle carries the original commitment alongside the key, so
/// verification needs no out-of-band state:
/// `commitment.verify(&secret_key, &computer_move)` must hold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultBundle {
    /// The move the player selected.
    pub player_move: String,
    /// The computer's move, hidden until now.
    pub computer_move: String,
    /// Win/lose/draw, from the player's perspective.
    pub outcome: Outcome,
    /// The HMAC key, hidden until now.
    pub secret_key: SecretKey,
    /// The commitment that was shown before the player moved.
    pub commitment: Commitment,
}

/// Hidden per-round state, held between start and resolve.
struct PendingRound {
    computer_move: String,
    secret_key: SecretKey,
    commitment: Commitment,
}

/// Orchestrates rounds over a validated move set.
///
/// The move set is assumed valid (odd length >= 3, unique entries); the
/// frontend rejects malformed lists before a coordinator exists.
///
/// # Example
///
/// ```
/// use cycle_duel::core::rand::SeededMoveSource;
/// use cycle_duel::game::moves::MoveSet;
/// use cycle_duel::game::round::RoundCoordinator;
///
/// let set = MoveSet::new(vec!["rock".into(), "paper".into(), "scissors".into()]).unwrap();
/// let mut coordinator = RoundCoordinator::new(set);
/// let mut source = SeededMoveSource::new(42);
///
/// let commitment = coordinator.start_round(&mut source);
/// let result = coordinator.resolve("rock").unwrap();
/// assert!(result.commitment.verify(&result.secret_key, &result.computer_move));
/// assert_eq!(result.commitment, commitment);
/// ```
pub struct RoundCoordinator {
    moves: MoveSet,
    pending: Option<PendingRound>,
    resolved: bool,
}

impl RoundCoordinator {
    /// Create a coordinator for a validated move set.
    pub fn new(moves: MoveSet) -> Self {
        Self {
            moves,
            pending: None,
            resolved: false,
        }
    }

    /// The move set rounds are played over.
    pub fn move_set(&self) -> &MoveSet {
        &self.moves
    }

    /// Start a round: pick the computer's move, commit to it, return the
    /// commitment for display.
    ///
    /// The pick is uniform over the move set and independent of any player
    /// input, which does not exist yet. Starting a new round discards any
    /// unresolved previous round.
    pub fn start_round(&mut self, source: &mut dyn MoveSource) -> Commitment {
        let index = source.pick_index(self.moves.len());
        let computer_move = self.moves.moves()[index].clone();

        let secret_key = SecretKey::generate();
        let commitment = Commitment::commit(&secret_key, &computer_move);

        self.pending = Some(PendingRound {
            computer_move,
            secret_key,
            commitment,
        });
        self.resolved = false;

        commitment
    }

    /// Resolve the round against the player's move, disclosing the secret
    /// key and the computer's move.
    ///
    /// At most once per started round. An unknown player move leaves the
    /// round pending so the caller can retry with a valid one.
    pub fn resolve(&mut self, player_move: &str) -> Result<ResultBundle, RoundError> {
        let pending = match self.pending.take() {
            Some(pending) => pending,
            None if self.resolved => return Err(RoundError::AlreadyResolved),
            None => return Err(RoundError::NotStarted),
        };

        let rule = OutcomeRule::new(&self.moves);
        let outcome = match rule.decide(player_move, &pending.computer_move) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.pending = Some(pending);
                return Err(err.into());
            }
        };
        self.resolved = true;

        Ok(ResultBundle {
            player_move: player_move.to_owned(),
            computer_move: pending.computer_move,
            outcome,
            secret_key: pending.secret_key,
            commitment: pending.commitment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rand::SeededMoveSource;

    /// Always picks the same index.
    struct FixedSource(usize);

    impl MoveSource for FixedSource {
        fn pick_index(&mut self, len: usize) -> usize {
            assert!(self.0 < len);
            self.0
        }
    }

    fn rps() -> MoveSet {
        MoveSet::new(vec!["rock".into(), "paper".into(), "scissors".into()]).unwrap()
    }

    #[test]
    fn test_commitment_verifies_after_resolve() {
        let mut coordinator = RoundCoordinator::new(rps());
        let mut source = SeededMoveSource::new(1);

        let shown = coordinator.start_round(&mut source);
        let result = coordinator.resolve("rock").unwrap();

        assert_eq!(result.commitment, shown);
        assert!(result.commitment.verify(&result.secret_key, &result.computer_move));
        // The key does not open a commitment to a different move
        let other = coordinator
            .move_set()
            .moves()
            .iter()
            .find(|m| **m != result.computer_move)
            .unwrap();
        assert!(!result.commitment.verify(&result.secret_key, other));
    }

    #[test]
    fn test_injected_source_pins_computer_move() {
        let mut coordinator = RoundCoordinator::new(rps());

        coordinator.start_round(&mut FixedSource(2));
        let result = coordinator.resolve("rock").unwrap();

        assert_eq!(result.computer_move, "scissors");
        assert_eq!(result.outcome, Outcome::PlayerWins);
    }

    #[test]
    fn test_resolve_before_start_fails() {
        let mut coordinator = RoundCoordinator::new(rps());
        assert_eq!(coordinator.resolve("rock"), Err(RoundError::NotStarted));
    }

    #[test]
    fn test_resolve_twice_fails() {
        let mut coordinator = RoundCoordinator::new(rps());
        coordinator.start_round(&mut FixedSource(0));

        coordinator.resolve("rock").unwrap();
        assert_eq!(
            coordinator.resolve("rock"),
            Err(RoundError::AlreadyResolved)
        );
    }

    #[test]
    fn test_unknown_player_move_keeps_round_pending() {
        let mut coordinator = RoundCoordinator::new(rps());
        coordinator.start_round(&mut FixedSource(1));

        assert!(matches!(
            coordinator.resolve("lizard"),
            Err(RoundError::UnknownMove(_))
        ));

        // The round is still live and resolves normally
        let result = coordinator.resolve("paper").unwrap();
        assert_eq!(result.outcome, Outcome::Draw);
    }

    #[test]
    fn test_restart_discards_unresolved_round() {
        let mut coordinator = RoundCoordinator::new(rps());

        let first = coordinator.start_round(&mut FixedSource(0));
        let second = coordinator.start_round(&mut FixedSource(0));

        // Fresh key per round, so the same move commits differently
        assert_ne!(first, second);

        let result = coordinator.resolve("paper").unwrap();
        assert_eq!(result.commitment, second);
        assert_eq!(result.computer_move, "rock");
        assert_eq!(result.outcome, Outcome::PlayerWins);
    }

    #[test]
    fn test_keys_not_reused_across_rounds() {
        let mut coordinator = RoundCoordinator::new(rps());

        coordinator.start_round(&mut FixedSource(0));
        let first = coordinator.resolve("rock").unwrap();

        coordinator.start_round(&mut FixedSource(0));
        let second = coordinator.resolve("rock").unwrap();

        assert_ne!(first.secret_key, second.secret_key);
        assert_ne!(first.commitment, second.commitment);
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let pick = |seed: u64| {
            let mut coordinator = RoundCoordinator::new(rps());
            coordinator.start_round(&mut SeededMoveSource::new(seed));
            coordinator.resolve("rock").unwrap().computer_move
        };

        assert_eq!(pick(77), pick(77));
    }
}
