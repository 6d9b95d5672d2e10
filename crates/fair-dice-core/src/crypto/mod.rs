//! Cryptographic primitives for the Fair Dice protocol.
//!
//! This module provides:
//! - RevealKey and Proof for the HMAC commit-reveal scheme
//! - CommitmentRecord, the unit a fairness draw hands back to callers

mod commitment;

pub use commitment::{verify, CommitmentRecord, Committable, Proof, RevealKey};
