// ============================================================================
// INVARIANTS MODULE
// ============================================================================
//
// Predicates over swap state and swap results. Used by the unit tests and by
// the Certora rules in certora_specs/.
//
// INVARIANT CATEGORIES:
//
// 1. EPOCH INVARIANTS
//    - Issued Aalto never exceeds the per-epoch cap
//    - Epoch start time never moves backwards
//
// 2. SPLIT INVARIANTS
//    - Burn and treasury legs never exceed the input
//    - Both legs are equal
//
// 3. RATE INVARIANTS
//    - Output equals input times the fixed rate
//
// ============================================================================

use swap_math::split_remainder;
use swap_types::{SwapComputation, SwapConfig, SwapState};

// ============================================================================
// EPOCH INVARIANTS
// ============================================================================

/// Invariant: issued Aalto stays within [0, max_aalto_per_epoch]
pub fn epoch_within_cap(state: &SwapState, config: &SwapConfig) -> bool {
    state.current_aalto_for_epoch >= 0
        && state.current_aalto_for_epoch <= config.max_aalto_per_epoch
}

/// Invariant: a swap never moves the epoch start backwards
pub fn epoch_start_monotonic(before: &SwapState, after: &SwapState) -> bool {
    after.epoch_start_time >= before.epoch_start_time
}

/// Invariant: counter only grows inside an epoch, restarting only with a new start
///
/// Property:
///   same start  => after.current >= before.current
///   new start   => after.current == swap output
pub fn epoch_counter_consistent(
    before: &SwapState,
    after: &SwapState,
    aalto_amount: i128,
) -> bool {
    if after.epoch_start_time == before.epoch_start_time {
        after.current_aalto_for_epoch == before.current_aalto_for_epoch + aalto_amount
    } else {
        after.current_aalto_for_epoch == aalto_amount
    }
}

// ============================================================================
// SPLIT INVARIANTS
// ============================================================================

/// Invariant: burn + treasury + the caller's remainder == input
pub fn split_bounded_by_input(share_amount: i128, computation: &SwapComputation) -> bool {
    let moved = computation.burn_amount + computation.treasury_amount;
    moved <= share_amount && moved + split_remainder(share_amount) == share_amount
}

/// Invariant: the burned half equals the treasury half
pub fn split_symmetric(computation: &SwapComputation) -> bool {
    computation.burn_amount == computation.treasury_amount
}

// ============================================================================
// RATE INVARIANTS
// ============================================================================

/// Invariant: output is exactly input * rate
pub fn output_matches_rate(share_amount: i128, aalto_per_share: i128, aalto_amount: i128) -> bool {
    share_amount.checked_mul(aalto_per_share) == Some(aalto_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swap_math::compute_swap;
    use swap_types::SwapTerms;

    const TERMS: SwapTerms = SwapTerms {
        aalto_per_share: 10,
        max_aalto_per_epoch: 1_000,
        epoch_duration: 3600,
    };

    #[test]
    fn test_swap_results_satisfy_invariants() {
        let mut state = SwapState::new(0);
        let mut now = 0u64;

        for share_amount in [1i128, 7, 20, 33, 40] {
            now += 1000;
            let result = compute_swap(&TERMS, &state, share_amount, now).unwrap();

            assert!(split_bounded_by_input(share_amount, &result));
            assert!(split_symmetric(&result));
            assert!(output_matches_rate(share_amount, TERMS.aalto_per_share, result.aalto_amount));
            assert!(epoch_start_monotonic(&state, &result.next_state));
            assert!(epoch_counter_consistent(&state, &result.next_state, result.aalto_amount));
            assert!(result.next_state.current_aalto_for_epoch <= TERMS.max_aalto_per_epoch);

            state = result.next_state;
        }
    }

    #[test]
    fn test_split_bounded_by_input_odd_and_even() {
        for (share_amount, now) in [(7i128, 10u64), (8, 10), (1, 10)] {
            let result = compute_swap(&TERMS, &SwapState::new(0), share_amount, now).unwrap();
            assert!(split_bounded_by_input(share_amount, &result));
        }

        // A leg that swallows the odd unit breaks the invariant
        let mut result = compute_swap(&TERMS, &SwapState::new(0), 7, 10).unwrap();
        result.burn_amount += 1;
        assert!(!split_bounded_by_input(7, &result));

        // So does a split that leaves more than the remainder behind
        let mut result = compute_swap(&TERMS, &SwapState::new(0), 8, 10).unwrap();
        result.treasury_amount -= 1;
        assert!(!split_bounded_by_input(8, &result));
    }

    #[test]
    fn test_epoch_counter_consistent_detects_drift() {
        let before = SwapState::new(0);
        let mut after = before.clone();
        after.current_aalto_for_epoch = 500;
        assert!(epoch_counter_consistent(&before, &after, 500));
        assert!(!epoch_counter_consistent(&before, &after, 400));
    }

    #[test]
    fn test_epoch_start_monotonic_detects_rewind() {
        let before = SwapState::new(100);
        let after = SwapState::new(50);
        assert!(!epoch_start_monotonic(&before, &after));
    }
}
