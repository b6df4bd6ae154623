// ============================================================================
// STATE SNAPSHOT HELPERS
// ============================================================================

use soroban_sdk::{token, Address, Env};

/// Captures swap state and the balances a swap touches
#[derive(Clone)]
pub struct SwapSnapshot {
    pub swap_enabled: bool,
    pub current_aalto_for_epoch: i128,
    pub epoch_start_time: u64,
    pub user_shares: i128,
    pub user_aalto: i128,
    pub burned_shares: i128,
    pub treasury_shares: i128,
    pub contract_aalto: i128,
}

impl SwapSnapshot {
    pub fn capture(env: &Env, user: &Address) -> Self {
        let config = crate::storage::get_config(env);
        let state = crate::storage::get_state(env);
        let share = token::Client::new(env, &config.share_token);
        let aalto = token::Client::new(env, &config.aalto_token);
        Self {
            swap_enabled: state.swap_enabled,
            current_aalto_for_epoch: state.current_aalto_for_epoch,
            epoch_start_time: state.epoch_start_time,
            user_shares: share.balance(user),
            user_aalto: aalto.balance(user),
            burned_shares: share.balance(&config.burn_sink),
            treasury_shares: share.balance(&config.treasury),
            contract_aalto: aalto.balance(&env.current_contract_address()),
        }
    }
}
