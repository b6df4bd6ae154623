// ============================================================================
// SWAP SPECIFICATIONS
// ============================================================================
//
// KEY PROPERTIES:
// 1. Rejections - disabled and non-positive requests never succeed
// 2. Rate - output is exactly input times aalto_per_share
// 3. Split - burn and treasury legs are equal halves of the input
// 4. Balances - a successful swap moves exactly the computed amounts
//
// ============================================================================

// ============================================================================
// FORMAL VERIFICATION RULES (Certora Sunbeam)
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: a disabled swap is rejected whatever the amount
#[cfg(feature = "certora")]
#[rule]
pub fn disabled_swap_rejected(
    current_aalto_for_epoch: i128,
    epoch_start_time: u64,
    share_amount: i128,
) {
    use swap_types::{SwapError, SwapState};

    let state = SwapState {
        swap_enabled: false,
        current_aalto_for_epoch,
        epoch_start_time,
    };

    cvlr_assert!(
        swap_math::check_swap_request(&state, share_amount) == Err(SwapError::SwapDisabled)
    );
}

/// RULE: output matches the fixed rate and the split is two equal floors
#[cfg(feature = "certora")]
#[rule]
pub fn swap_rate_and_split(
    aalto_per_share: i128,
    max_aalto_per_epoch: i128,
    epoch_duration: u64,
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
    cvlr_assume!(now >= epoch_start_time);

    let state = SwapState::new(epoch_start_time);
    if let Ok(result) = swap_math::compute_swap(&terms, &state, share_amount, now) {
        cvlr_assert!(share_amount > 0);
        cvlr_assert!(crate::invariants::output_matches_rate(
            share_amount,
            aalto_per_share,
            result.aalto_amount
        ));
        cvlr_assert!(crate::invariants::split_bounded_by_input(share_amount, &result));
        cvlr_assert!(crate::invariants::split_symmetric(&result));
    }
    cvlr_satisfy!(true);
}

/// RULE: a successful swap moves exactly the computed balances
#[cfg(feature = "certora")]
#[rule]
pub fn swap_moves_computed_balances(
    env: soroban_sdk::Env,
    user: soroban_sdk::Address,
    share_amount: i128,
) {
    use crate::certora_specs::model::SwapSnapshot;

    let config = crate::storage::get_config(&env);
    cvlr_assume!(user != config.treasury);
    cvlr_assume!(user != config.burn_sink);
    cvlr_assume!(user != env.current_contract_address());

    let before = SwapSnapshot::capture(&env, &user);
    let result = crate::ShareSwap::swap(env.clone(), user.clone(), share_amount);

    if let Ok(aalto_amount) = result {
        let after = SwapSnapshot::capture(&env, &user);
        let half = share_amount / 2;
        cvlr_assert!(after.user_aalto == before.user_aalto + aalto_amount);
        cvlr_assert!(after.contract_aalto == before.contract_aalto - aalto_amount);
        cvlr_assert!(after.burned_shares == before.burned_shares + half);
        cvlr_assert!(after.treasury_shares == before.treasury_shares + half);
        cvlr_assert!(after.user_shares == before.user_shares - 2 * half);
    }
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================

#[cfg(test)]
mod tests {
    use swap_math::{check_swap_request, compute_swap};
    use swap_types::{SwapError, SwapState, SwapTerms};

    const TERMS: SwapTerms = SwapTerms {
        aalto_per_share: 10,
        max_aalto_per_epoch: 1_000,
        epoch_duration: 3600,
    };

    #[test]
    fn test_disabled_swap_rejected_for_any_amount() {
        let mut state = SwapState::new(0);
        state.swap_enabled = false;

        for share_amount in [i128::MIN, -1, 0, 1, 100, i128::MAX] {
            assert_eq!(
                check_swap_request(&state, share_amount),
                Err(SwapError::SwapDisabled)
            );
        }
    }

    #[test]
    fn test_successful_swaps_only_for_positive_amounts() {
        let state = SwapState::new(0);
        for share_amount in [i128::MIN, -100, -1, 0] {
            assert!(compute_swap(&TERMS, &state, share_amount, 0).is_err());
        }
    }

    #[test]
    fn test_rate_and_split_over_range() {
        let state = SwapState::new(0);
        for share_amount in 1i128..=100 {
            let result = compute_swap(&TERMS, &state, share_amount, 0).unwrap();
            assert_eq!(result.aalto_amount, share_amount * 10);
            assert_eq!(result.burn_amount, share_amount / 2);
            assert_eq!(result.treasury_amount, share_amount / 2);
        }
    }
}
