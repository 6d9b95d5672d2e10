//! Property tests for the fairness engine.

use fair_dice_core::crypto::{self, CommitmentRecord, Proof, RevealKey};
use fair_dice_core::FairnessEngine;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn draw(seed: u64, candidates: &[i64]) -> CommitmentRecord<i64> {
    FairnessEngine::with_entropy(StdRng::seed_from_u64(seed))
        .commit_and_reveal(candidates)
        .unwrap()
}

proptest! {
    #[test]
    fn selected_value_is_a_candidate(
        seed in any::<u64>(),
        candidates in prop::collection::vec(any::<i64>(), 1..32),
    ) {
        let record = draw(seed, &candidates);
        prop_assert!(candidates.contains(&record.selected_value));
    }

    #[test]
    fn revealed_record_verifies(
        seed in any::<u64>(),
        candidates in prop::collection::vec(-1000i64..1000, 1..16),
    ) {
        let record = draw(seed, &candidates);
        prop_assert!(record.verify());
    }

    #[test]
    fn flipping_a_key_bit_breaks_verification(
        seed in any::<u64>(),
        byte in 0usize..32,
        bit in 0u8..8,
    ) {
        let record = draw(seed, &[1, 2, 3, 4, 5, 6]);
        let mut bytes = *record.reveal_key.as_bytes();
        bytes[byte] ^= 1 << bit;
        let tampered = RevealKey::from_bytes(bytes);

        prop_assert!(!crypto::verify(&record.selected_value, &record.proof, &tampered));
    }

    #[test]
    fn flipping_a_value_bit_breaks_verification(
        seed in any::<u64>(),
        bit in 0u32..64,
    ) {
        let record = draw(seed, &[-7, 0, 3, 12, 99]);
        let tampered = record.selected_value ^ (1i64 << bit);

        prop_assert!(!crypto::verify(&tampered, &record.proof, &record.reveal_key));
    }

    #[test]
    fn flipping_a_proof_bit_breaks_verification(
        seed in any::<u64>(),
        byte in 0usize..32,
        bit in 0u8..8,
    ) {
        let record = draw(seed, &[2, 2, 4, 4, 9, 9]);
        let mut bytes = *record.proof.as_bytes();
        bytes[byte] ^= 1 << bit;
        let tampered = Proof::from_bytes(bytes);

        prop_assert!(!crypto::verify(&record.selected_value, &tampered, &record.reveal_key));
    }
}
