//! Dice definitions and game resolution.

mod dice;
mod resolver;

pub use dice::{parse_dice_sets, DiceSet, DEFAULT_MIN_DICE};
pub use resolver::GameResolver;
