// ============================================================================
// EPOCH RATE LIMIT SPECIFICATIONS
// ============================================================================
//
// KEY PROPERTIES:
// 1. Cap - issued Aalto never exceeds max_aalto_per_epoch
// 2. Reset - an expired epoch restarts at the swap time with a zero counter
// 3. Monotonic start - the epoch start never moves backwards
//
// ============================================================================

// ============================================================================
// FORMAL VERIFICATION RULES (Certora Sunbeam)
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: a successful swap leaves the counter within the cap
#[cfg(feature = "certora")]
#[rule]
pub fn epoch_cap_respected(
    aalto_per_share: i128,
    max_aalto_per_epoch: i128,
    epoch_duration: u64,
    current_aalto_for_epoch: i128,
    epoch_start_time: u64,
    now: u64,
    share_amount: i128,
) {
    use swap_types::{SwapState, SwapTerms};

    let terms = SwapTerms {
        aalto_per_share,
        max_aalto_per_epoch,
        epoch_duration,
    };
    cvlr_assume!(terms.is_valid());
    cvlr_assume!(current_aalto_for_epoch >= 0 && current_aalto_for_epoch <= max_aalto_per_epoch);
    cvlr_assume!(now >= epoch_start_time);

    let state = SwapState {
        swap_enabled: true,
        current_aalto_for_epoch,
        epoch_start_time,
    };

    if let Ok(result) = swap_math::compute_swap(&terms, &state, share_amount, now) {
        cvlr_assert!(result.next_state.current_aalto_for_epoch <= max_aalto_per_epoch);
        cvlr_assert!(crate::invariants::epoch_start_monotonic(&state, &result.next_state));
        cvlr_assert!(crate::invariants::epoch_counter_consistent(
            &state,
            &result.next_state,
            result.aalto_amount
        ));
    }
    cvlr_satisfy!(true);
}

/// RULE: once the window has passed, the next swap accounts from zero
#[cfg(feature = "certora")]
#[rule]
pub fn expired_epoch_resets(
    current_aalto_for_epoch: i128,
    epoch_start_time: u64,
    epoch_duration: u64,
    now: u64,
) {
    use swap_types::{SwapState, SwapTerms};

    let terms = SwapTerms {
        aalto_per_share: 1,
        max_aalto_per_epoch: i128::MAX,
        epoch_duration,
    };
    cvlr_assume!(swap_math::epoch_expired(now, epoch_start_time, epoch_duration));

    let state = SwapState {
        swap_enabled: true,
        current_aalto_for_epoch,
        epoch_start_time,
    };
    let (next, rolled) = swap_math::roll_epoch(&state, &terms, now);

    cvlr_assert!(rolled);
    cvlr_assert!(next.current_aalto_for_epoch == 0);
    cvlr_assert!(next.epoch_start_time == now);
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
