//! Fair Dice Core Library
//!
//! This crate provides the commit-reveal fairness engine and the turn and
//! roll resolution logic for a provably fair two-party dice game.

pub mod crypto;
pub mod error;
pub mod fairness;
pub mod games;
pub mod protocol;

pub use crypto::{CommitmentRecord, Committable, Proof, RevealKey};
pub use error::{DiceParseError, FairnessError, GameError};
pub use fairness::FairnessEngine;
pub use games::{parse_dice_sets, DiceSet, GameResolver, DEFAULT_MIN_DICE};
pub use protocol::{
    FirstMover, GameResult, Party, RollOutcome, Session, SessionId, SessionPhase, Verdict,
};
