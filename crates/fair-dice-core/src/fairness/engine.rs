//! Committed uniform selection over a finite candidate set.

use crate::crypto::{CommitmentRecord, Committable, RevealKey};
use crate::error::FairnessError;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;

/// Produces committed random selections from an injected secure source.
///
/// Every draw is self-contained: a fresh index and a fresh key, nothing
/// carried over between calls. Source failures surface as
/// [`FairnessError::EntropySource`]; there is no fallback generator.
#[derive(Debug)]
pub struct FairnessEngine<R> {
    rng: R,
}

impl FairnessEngine<OsRng> {
    /// Engine backed by the operating system's secure random source
    pub fn from_os() -> Self {
        Self::with_entropy(OsRng)
    }
}

impl Default for FairnessEngine<OsRng> {
    fn default() -> Self {
        Self::from_os()
    }
}

impl<R: RngCore + CryptoRng> FairnessEngine<R> {
    /// Engine backed by the given source
    pub fn with_entropy(rng: R) -> Self {
        Self { rng }
    }

    /// Select one candidate uniformly at random and commit to it.
    ///
    /// The returned record holds both the proof and the key; the caller
    /// publishes the proof before disclosing the key.
    pub fn commit_and_reveal<T>(
        &mut self,
        candidates: &[T],
    ) -> Result<CommitmentRecord<T>, FairnessError>
    where
        T: Committable + Clone,
    {
        if candidates.is_empty() {
            return Err(FairnessError::InvalidInput);
        }

        let index = self.uniform_index(candidates.len())?;
        let reveal_key = RevealKey::generate(&mut self.rng)?;
        let record = CommitmentRecord::seal(candidates[index].clone(), reveal_key);

        debug!(
            candidates = candidates.len(),
            proof = %record.proof,
            "committed selection"
        );

        Ok(record)
    }

    /// Uniform index in `[0, len)`.
    ///
    /// Words below `2^64 mod len` are rejected so the accepted range is an
    /// exact multiple of `len`.
    fn uniform_index(&mut self, len: usize) -> Result<usize, FairnessError> {
        let bound = len as u64;
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let mut word = [0u8; 8];
            self.rng.try_fill_bytes(&mut word)?;
            let x = u64::from_le_bytes(word);
            if x >= threshold {
                return Ok((x % bound) as usize);
            }
        }
    }
}
