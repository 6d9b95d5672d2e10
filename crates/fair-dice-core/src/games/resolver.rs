//! Turn order, roll resolution and winner declaration.

use super::dice::DiceSet;
use crate::error::{FairnessError, GameError};
use crate::fairness::FairnessEngine;
use crate::protocol::{FirstMover, Party, RollOutcome, Verdict};
use rand::rngs::{OsRng, ThreadRng};
use rand::{CryptoRng, Rng, RngCore};
use tracing::debug;

/// Resolves the decisions a game needs on top of a [`FairnessEngine`].
///
/// `O` picks the opponent's dice set. That choice carries no commitment, so
/// it does not draw from the secure engine.
#[derive(Debug)]
pub struct GameResolver<R, O> {
    engine: FairnessEngine<R>,
    chooser: O,
}

impl GameResolver<OsRng, ThreadRng> {
    /// Secure engine for commitments, thread-local generator for dice choice
    pub fn from_os() -> Self {
        Self::new(FairnessEngine::from_os(), rand::thread_rng())
    }
}

impl<R: RngCore + CryptoRng, O: Rng> GameResolver<R, O> {
    pub fn new(engine: FairnessEngine<R>, chooser: O) -> Self {
        Self { engine, chooser }
    }

    /// One committed draw over `[User, Opponent]`; the drawn value moves first
    pub fn decide_first_mover(&mut self) -> Result<FirstMover, FairnessError> {
        let commitment = self.engine.commit_and_reveal(&Party::ALL)?;
        Ok(FirstMover {
            mover: commitment.selected_value,
            commitment,
        })
    }

    /// Committed draw over the faces of `dice`
    pub fn resolve_roll(&mut self, dice: &DiceSet) -> Result<RollOutcome, FairnessError> {
        let commitment = self.engine.commit_and_reveal(dice.faces())?;
        Ok(RollOutcome::from(commitment))
    }

    /// Pick the opponent's dice set.
    ///
    /// A draw that lands on the very set the user holds is redrawn from the
    /// remaining sets. With a single set the user's set is returned.
    pub fn pick_opponent_dice<'a>(
        &mut self,
        dice_sets: &'a [DiceSet],
        user_choice: &DiceSet,
    ) -> Result<&'a DiceSet, GameError> {
        if dice_sets.is_empty() {
            return Err(GameError::NoDiceSets);
        }

        let drawn = &dice_sets[self.chooser.gen_range(0..dice_sets.len())];
        if !std::ptr::eq(drawn, user_choice) {
            return Ok(drawn);
        }

        let remaining: Vec<&'a DiceSet> = dice_sets
            .iter()
            .filter(|d| !std::ptr::eq(*d, user_choice))
            .collect();
        if remaining.is_empty() {
            debug!("only one dice set, opponent shares the user's set");
            return Ok(drawn);
        }

        Ok(remaining[self.chooser.gen_range(0..remaining.len())])
    }

    /// Higher face wins; equal faces tie
    pub fn compare_and_declare(user: &RollOutcome, opponent: &RollOutcome) -> Verdict {
        use std::cmp::Ordering;

        match user.die_face_value.cmp(&opponent.die_face_value) {
            Ordering::Greater => Verdict::UserWins,
            Ordering::Less => Verdict::OpponentWins,
            Ordering::Equal => Verdict::Tie,
        }
    }
}
