//! Protocol types and the session state machine.

mod session;
mod types;

pub use session::{Session, SessionPhase};
pub use types::{FirstMover, GameResult, Party, RollOutcome, SessionId, Verdict};
