use crate::epoch_math::roll_epoch;
use crate::rate_math::{aalto_for_shares, split_shares};
use swap_types::{SwapComputation, SwapError, SwapState, SwapTerms};

/// Checks that only need the stored state and the requested amount.
///
/// Runs before the caller's balance is read, so the disabled and amount
/// errors win over a balance error.
pub fn check_swap_request(state: &SwapState, share_amount: i128) -> Result<(), SwapError> {
    if !state.swap_enabled {
        return Err(SwapError::SwapDisabled);
    }
    check_share_amount(share_amount)
}

/// Rejects a zero amount before a negative one
pub fn check_share_amount(share_amount: i128) -> Result<(), SwapError> {
    if share_amount == 0 {
        return Err(SwapError::ZeroAmount);
    }
    if share_amount < 0 {
        return Err(SwapError::NegativeAmount);
    }
    Ok(())
}

/// Compute a swap of `share_amount` at ledger time `now`.
///
/// Pure: reads no storage and moves no tokens. The expired epoch, if any, is
/// rolled before the cap is checked, and the rolled state is only part of the
/// returned `next_state`.
///
/// Re-runs `check_swap_request` so the result is sound on its own. The
/// contract also calls `check_swap_request` earlier, ahead of the balance read.
pub fn compute_swap(
    terms: &SwapTerms,
    state: &SwapState,
    share_amount: i128,
    now: u64,
) -> Result<SwapComputation, SwapError> {
    check_swap_request(state, share_amount)?;

    let aalto_amount = aalto_for_shares(share_amount, terms.aalto_per_share)?;

    let (mut next_state, epoch_rolled) = roll_epoch(state, terms, now);

    let issued = next_state
        .current_aalto_for_epoch
        .checked_add(aalto_amount)
        .ok_or(SwapError::ArithmeticOverflow)?;
    if issued > terms.max_aalto_per_epoch {
        return Err(SwapError::EpochCapExceeded);
    }
    next_state.current_aalto_for_epoch = issued;

    let (burn_amount, treasury_amount) = split_shares(share_amount);

    Ok(SwapComputation {
        aalto_amount,
        burn_amount,
        treasury_amount,
        epoch_rolled,
        next_state,
    })
}

/// Aalto a swap of `share_amount` would pay, ignoring balances and the cap
pub fn quote_swap(terms: &SwapTerms, share_amount: i128) -> Result<i128, SwapError> {
    check_share_amount(share_amount)?;
    aalto_for_shares(share_amount, terms.aalto_per_share)
}
