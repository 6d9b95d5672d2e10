//! Dice definitions.

use crate::error::DiceParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default minimum number of dice sets for a game
pub const DEFAULT_MIN_DICE: usize = 3;

/// A die: its ordered, non-empty list of faces
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct DiceSet(Vec<i64>);

impl DiceSet {
    /// Create from faces, rejecting an empty list
    pub fn new(faces: Vec<i64>) -> Option<Self> {
        if faces.is_empty() {
            None
        } else {
            Some(Self(faces))
        }
    }

    /// Parse a comma-separated face list such as `2,2,4,4,9,9`.
    ///
    /// `position` is the 1-based number used in error messages.
    pub fn parse(s: &str, position: usize) -> Result<Self, DiceParseError> {
        if s.trim().is_empty() {
            return Err(DiceParseError::NoFaces { dice: position });
        }

        let faces = s
            .split(',')
            .map(|f| {
                let f = f.trim();
                parse_face(f).ok_or_else(|| DiceParseError::NonInteger {
                    dice: position,
                    value: f.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(faces).ok_or(DiceParseError::NoFaces { dice: position })
    }

    /// Get the faces
    pub fn faces(&self) -> &[i64] {
        &self.0
    }
}

impl TryFrom<Vec<i64>> for DiceSet {
    type Error = &'static str;

    fn try_from(faces: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(faces).ok_or("dice set has no faces")
    }
}

impl From<DiceSet> for Vec<i64> {
    fn from(dice: DiceSet) -> Self {
        dice.0
    }
}

impl fmt::Display for DiceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.0.iter().map(|face| face.to_string()).collect();
        write!(f, "{}", faces.join(", "))
    }
}

/// Largest magnitude at which every f64 is still an exact integer
const MAX_EXACT_FACE: f64 = (1u64 << 53) as f64;

/// A face is an integer, or a decimal with no fractional part such as `4.0`
fn parse_face(f: &str) -> Option<i64> {
    if let Ok(face) = f.parse::<i64>() {
        return Some(face);
    }
    let value = f.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_FACE {
        Some(value as i64)
    } else {
        None
    }
}

/// Parse every argument into a dice set, requiring at least `min` of them
pub fn parse_dice_sets<S: AsRef<str>>(
    args: &[S],
    min: usize,
) -> Result<Vec<DiceSet>, DiceParseError> {
    if args.len() < min {
        return Err(DiceParseError::TooFewDice {
            min,
            got: args.len(),
        });
    }

    args.iter()
        .enumerate()
        .map(|(i, arg)| DiceSet::parse(arg.as_ref(), i + 1))
        .collect()
}
