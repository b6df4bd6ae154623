use swap_types::{SwapState, SwapTerms};

/// True once `now` is strictly past the end of the epoch window
pub fn epoch_expired(now: u64, epoch_start_time: u64, epoch_duration: u64) -> bool {
    now > epoch_start_time.saturating_add(epoch_duration)
}

/// Returns the state as the next swap at `now` would account against it.
///
/// An expired epoch restarts at `now` with a zero counter. The flag reports
/// whether a restart happened.
pub fn roll_epoch(state: &SwapState, terms: &SwapTerms, now: u64) -> (SwapState, bool) {
    if epoch_expired(now, state.epoch_start_time, terms.epoch_duration) {
        let rolled = SwapState {
            swap_enabled: state.swap_enabled,
            current_aalto_for_epoch: 0,
            epoch_start_time: now,
        };
        (rolled, true)
    } else {
        (state.clone(), false)
    }
}

/// Aalto that can still be paid out in the epoch seen at `now`
pub fn epoch_headroom(state: &SwapState, terms: &SwapTerms, now: u64) -> i128 {
    let (effective, _) = roll_epoch(state, terms, now);
    let remaining = terms.max_aalto_per_epoch - effective.current_aalto_for_epoch;
    if remaining > 0 {
        remaining
    } else {
        0
    }
}
