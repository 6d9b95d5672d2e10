//! Error types for the Fair Dice protocol.

use crate::protocol::SessionPhase;
use thiserror::Error;

/// Errors from a fairness draw
#[derive(Debug, Error)]
pub enum FairnessError {
    #[error("Invalid input: candidate set is empty")]
    InvalidInput,

    #[error("Secure entropy source unavailable: {0}")]
    EntropySource(#[from] rand::Error),
}

/// Errors from game resolution and session flow
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Fairness(#[from] FairnessError),

    #[error("No dice sets to choose from")]
    NoDiceSets,

    #[error("Dice index {index} out of range (0..{len})")]
    DiceIndexOutOfRange { index: usize, len: usize },

    #[error("Cannot {action} while session is {from:?}")]
    InvalidTransition {
        from: SessionPhase,
        action: &'static str,
    },
}

/// Errors from parsing dice definitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    #[error("Please provide at least {min} dice sets (got {got}).\nExample: fair-dice play 2,2,4,4,9,9 6,8,1,1,8,6 7,5,3,7,5,3")]
    TooFewDice { min: usize, got: usize },

    #[error("Dice {dice} includes non-integer value {value:?}.\nUse only numbers like: 1,2,3,4,5,6")]
    NonInteger { dice: usize, value: String },

    #[error("Dice {dice} has no faces.")]
    NoFaces { dice: usize },
}
