//! Fairness engine: committed random selection with verifiable reveal.

mod engine;

pub use engine::FairnessEngine;

#[cfg(test)]
pub(crate) use engine::tests::FailingEntropy;
