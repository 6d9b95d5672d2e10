//! Protocol types.

use crate::crypto::{CommitmentRecord, Committable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique session identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Party in a game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    User,
    Opponent,
}

impl Party {
    /// Candidate order for the starter draw
    pub const ALL: [Party; 2] = [Party::User, Party::Opponent];

    /// Numeric code committed for this party
    pub fn code(&self) -> u8 {
        match self {
            Party::User => 0,
            Party::Opponent => 1,
        }
    }
}

impl Committable for Party {
    fn canonical_bytes(&self) -> Vec<u8> {
        self.code().to_string().into_bytes()
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::User => write!(f, "You"),
            Party::Opponent => write!(f, "Computer"),
        }
    }
}

/// Outcome of comparing two rolls
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    UserWins,
    OpponentWins,
    Tie,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::UserWins => "You win!",
            Verdict::OpponentWins => "Computer wins!",
            Verdict::Tie => "It's a tie!",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of the starter draw
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstMover {
    pub mover: Party,
    pub commitment: CommitmentRecord<Party>,
}

/// One party's resolved roll
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    pub die_face_value: i64,
    pub commitment: CommitmentRecord<i64>,
}

impl From<CommitmentRecord<i64>> for RollOutcome {
    fn from(commitment: CommitmentRecord<i64>) -> Self {
        Self {
            die_face_value: commitment.selected_value,
            commitment,
        }
    }
}

/// Everything a finished session produced
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub first_mover: FirstMover,
    pub user_outcome: RollOutcome,
    pub opponent_outcome: RollOutcome,
    pub verdict: Verdict,
}

impl GameResult {
    /// Check every commitment in the result against its reveal
    pub fn verify(&self) -> bool {
        self.first_mover.commitment.verify()
            && self.first_mover.commitment.selected_value == self.first_mover.mover
            && self.user_outcome.commitment.verify()
            && self.user_outcome.commitment.selected_value == self.user_outcome.die_face_value
            && self.opponent_outcome.commitment.verify()
            && self.opponent_outcome.commitment.selected_value
                == self.opponent_outcome.die_face_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_generation() {
        let id1 = SessionId::new();
        let id2 = SessionId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_session_id_parse() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_party_encodes_as_starter_code() {
        assert_eq!(Party::User.canonical_bytes(), b"0".to_vec());
        assert_eq!(Party::Opponent.canonical_bytes(), b"1".to_vec());
    }
}
