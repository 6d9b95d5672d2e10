//! Per-session state machine.
//!
//! Idle -> FirstMoverDecided -> DiceChosen -> RollsResolved -> VerdictDeclared
//!
//! Transitions are linear. `abort` ends a session from any unfinished phase
//! and a failed fairness draw aborts it as well.

use super::types::{FirstMover, GameResult, RollOutcome, SessionId};
use crate::error::GameError;
use crate::games::{DiceSet, GameResolver};
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Session phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Idle,
    FirstMoverDecided,
    DiceChosen,
    RollsResolved,
    VerdictDeclared,
    Aborted,
}

impl SessionPhase {
    /// No further transitions are possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionPhase::VerdictDeclared | SessionPhase::Aborted)
    }
}

/// One game from starter draw to verdict
#[derive(Debug)]
pub struct Session<R, O> {
    id: SessionId,
    resolver: GameResolver<R, O>,
    dice_sets: Vec<DiceSet>,
    phase: SessionPhase,
    first_mover: Option<FirstMover>,
    chosen: Option<(usize, usize)>,
    rolls: Option<(RollOutcome, RollOutcome)>,
}

impl<R: RngCore + CryptoRng, O: Rng> Session<R, O> {
    pub fn new(resolver: GameResolver<R, O>, dice_sets: Vec<DiceSet>) -> Self {
        Self {
            id: SessionId::new(),
            resolver,
            dice_sets,
            phase: SessionPhase::Idle,
            first_mover: None,
            chosen: None,
            rolls: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn dice_sets(&self) -> &[DiceSet] {
        &self.dice_sets
    }

    /// Dice sets held by the user and the opponent, once chosen
    pub fn chosen_dice(&self) -> Option<(&DiceSet, &DiceSet)> {
        self.chosen
            .map(|(user, opponent)| (&self.dice_sets[user], &self.dice_sets[opponent]))
    }

    /// Decide who moves first
    pub fn start(&mut self) -> Result<&FirstMover, GameError> {
        self.expect_phase(SessionPhase::Idle, "decide the first mover")?;

        let first = match self.resolver.decide_first_mover() {
            Ok(first) => first,
            Err(e) => return Err(self.fail(e.into())),
        };
        info!(session = %self.id, mover = ?first.mover, "first mover decided");

        self.phase = SessionPhase::FirstMoverDecided;
        Ok(&*self.first_mover.insert(first))
    }

    /// Take the user's dice set by index and pick the opponent's
    pub fn choose_dice(&mut self, index: usize) -> Result<(&DiceSet, &DiceSet), GameError> {
        self.expect_phase(SessionPhase::FirstMoverDecided, "choose dice")?;

        let len = self.dice_sets.len();
        if index >= len {
            return Err(GameError::DiceIndexOutOfRange { index, len });
        }

        let user = &self.dice_sets[index];
        let opponent = self.resolver.pick_opponent_dice(&self.dice_sets, user)?;
        let opponent_index = self
            .dice_sets
            .iter()
            .position(|d| std::ptr::eq(d, opponent))
            .unwrap_or(index);
        info!(session = %self.id, user = index, opponent = opponent_index, "dice chosen");

        self.chosen = Some((index, opponent_index));
        self.phase = SessionPhase::DiceChosen;
        Ok((&self.dice_sets[index], &self.dice_sets[opponent_index]))
    }

    /// Roll the user's die, then the opponent's
    pub fn resolve_rolls(&mut self) -> Result<(&RollOutcome, &RollOutcome), GameError> {
        self.expect_phase(SessionPhase::DiceChosen, "resolve rolls")?;
        let Some((user, opponent)) = self.chosen else {
            return Err(self.invalid("resolve rolls"));
        };

        let rolled = self
            .resolver
            .resolve_roll(&self.dice_sets[user])
            .and_then(|u| Ok((u, self.resolver.resolve_roll(&self.dice_sets[opponent])?)));
        let (user_roll, opponent_roll) = match rolled {
            Ok(rolls) => rolls,
            Err(e) => return Err(self.fail(e.into())),
        };
        info!(
            session = %self.id,
            user = user_roll.die_face_value,
            opponent = opponent_roll.die_face_value,
            "rolls resolved"
        );

        self.phase = SessionPhase::RollsResolved;
        let (u, o) = self.rolls.insert((user_roll, opponent_roll));
        Ok((&*u, &*o))
    }

    /// Compare the rolls and finish the session
    pub fn declare(&mut self) -> Result<GameResult, GameError> {
        self.expect_phase(SessionPhase::RollsResolved, "declare a verdict")?;
        let (Some(first_mover), Some((user_outcome, opponent_outcome))) =
            (self.first_mover.clone(), self.rolls.clone())
        else {
            return Err(self.invalid("declare a verdict"));
        };

        let verdict = GameResolver::<R, O>::compare_and_declare(&user_outcome, &opponent_outcome);
        info!(session = %self.id, ?verdict, "verdict declared");

        self.phase = SessionPhase::VerdictDeclared;
        Ok(GameResult {
            first_mover,
            user_outcome,
            opponent_outcome,
            verdict,
        })
    }

    /// End the session without a verdict
    pub fn abort(&mut self) -> Result<(), GameError> {
        if self.phase.is_terminal() {
            return Err(self.invalid("abort"));
        }
        info!(session = %self.id, from = ?self.phase, "session aborted");
        self.phase = SessionPhase::Aborted;
        Ok(())
    }

    fn expect_phase(&self, phase: SessionPhase, action: &'static str) -> Result<(), GameError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: &'static str) -> GameError {
        GameError::InvalidTransition {
            from: self.phase,
            action,
        }
    }

    fn fail(&mut self, err: GameError) -> GameError {
        warn!(session = %self.id, from = ?self.phase, error = %err, "session aborted");
        self.phase = SessionPhase::Aborted;
        err
    }
}
