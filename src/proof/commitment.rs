//! Move Commitment Protocol
//!
//! The computer publishes a keyed commitment to its move before the player
//! chooses, and discloses the key afterwards. Recomputing the commitment
//! with the disclosed key proves the move was not changed after the
//! player's choice was seen.
//!
//! The commitment is HMAC-SHA-256 over the move's UTF-8 bytes, keyed by a
//! fresh 256-bit secret. Without the key the tag reveals nothing about the
//! move; with it, anyone can verify with a stock HMAC tool. No domain
//! separator is mixed in, precisely so that external verification stays a
//! one-liner.

use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Secret key length in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Per-round secret key for the commitment HMAC.
///
/// Generated fresh from the OS CSPRNG for every round and never reused;
/// kept hidden until the round resolves.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Generate a fresh key from the operating system's CSPRNG.
    ///
    /// Entropy exhaustion is a fatal environment failure; `OsRng` aborts
    /// rather than silently degrading.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Wrap an existing 32-byte key (tests, external verification).
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex rendering, used when the key is disclosed.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

// Keep accidental `{:?}` logging from leaking an undisclosed key.
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(..)")
    }
}

/// Keyed commitment to a move: the HMAC-SHA-256 tag.
///
/// Deterministic function of `(key, move)`; recomputing with the disclosed
/// key and announced move must reproduce it bit-for-bit.
///
/// # Example
///
/// ```
/// use cycle_duel::proof::commitment::{Commitment, SecretKey};
///
/// let key = SecretKey::generate();
/// let commitment = Commitment::commit(&key, "rock");
/// assert!(commitment.verify(&key, "rock"));
/// assert!(!commitment.verify(&key, "paper"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Commit to a move under a secret key.
    pub fn commit(key: &SecretKey, move_name: &str) -> Self {
        Self(hmac_tag(key.as_bytes(), move_name.as_bytes()))
    }

    /// Recompute the tag from a disclosed key and announced move and
    /// compare against this commitment.
    pub fn verify(&self, key: &SecretKey, move_name: &str) -> bool {
        Self::commit(key, move_name) == *self
    }

    /// Raw tag bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering, as shown to the player.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// HMAC-SHA-256 tag over a message.
fn hmac_tag(key: &[u8], message: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(message);
    mac.finalize().into_bytes().into()
}
