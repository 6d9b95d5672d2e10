//! Proof, RevealKey and CommitmentRecord for the commit-reveal scheme.
//!
//! proof = HMAC-SHA256(key, canonical(value))
//!
//! The key enters HMAC as its lowercase hex text, the same string that is
//! shown to the player, so a reveal can be checked with any HMAC tool.

use hmac::{Hmac, Mac};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Values that can be bound by a commitment.
pub trait Committable {
    /// Canonical byte encoding fed into the HMAC
    fn canonical_bytes(&self) -> Vec<u8>;
}

impl Committable for i64 {
    fn canonical_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

/// 256-bit random key disclosed after the proof has been shown
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealKey(#[serde(with = "hex_bytes")] [u8; 32]);

impl RevealKey {
    /// Fill a new key from a secure source, failing if the source does
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, rand::Error> {
        let mut bytes = [0u8; 32];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse the 64-character hex form shown to players
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(hex::encode(self.0).as_bytes())
            .expect("HMAC accepts keys of any length")
    }
}

impl fmt::Debug for RevealKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RevealKey({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for RevealKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// HMAC-SHA256 digest binding a value to a reveal key
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Proof(#[serde(with = "hex_bytes")] [u8; 32]);

impl Proof {
    /// Compute the proof for a value under a key
    pub fn compute<T: Committable + ?Sized>(value: &T, key: &RevealKey) -> Self {
        let mut mac = key.mac();
        mac.update(&value.canonical_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse the 64-character hex form shown to players
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check that `value` under `key` produces this proof, in constant time
    pub fn verify<T: Committable + ?Sized>(&self, value: &T, key: &RevealKey) -> bool {
        let mut mac = key.mac();
        mac.update(&value.canonical_bytes());
        mac.verify_slice(&self.0).is_ok()
    }
}

impl fmt::Debug for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Proof({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// A committed selection together with everything needed to verify it.
///
/// Produced once per fairness event and never mutated. Callers must publish
/// `proof` before `reveal_key`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentRecord<T> {
    pub selected_value: T,
    pub proof: Proof,
    pub reveal_key: RevealKey,
}

impl<T: Committable> CommitmentRecord<T> {
    /// Bind `selected_value` under `reveal_key`
    pub fn seal(selected_value: T, reveal_key: RevealKey) -> Self {
        let proof = Proof::compute(&selected_value, &reveal_key);
        Self {
            selected_value,
            proof,
            reveal_key,
        }
    }

    /// Recompute the proof from the revealed fields
    pub fn verify(&self) -> bool {
        verify(&self.selected_value, &self.proof, &self.reveal_key)
    }
}

/// Verify a revealed `(value, proof, key)` triple
pub fn verify<T: Committable + ?Sized>(value: &T, proof: &Proof, key: &RevealKey) -> bool {
    proof.verify(value, key)
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&hex_str, &mut bytes).map_err(serde::de::Error::custom)?;
        Ok(bytes)
    }
}
