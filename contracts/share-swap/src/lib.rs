#![no_std]

mod certora_specs;
mod events;
mod invariants;
mod storage;
mod swap;

use events::SwapEnabledSet;
use soroban_sdk::{contract, contractimpl, log, Address, Env};
use storage::{get_admin, get_config, get_state, is_initialized, set_admin, set_config, set_state};
use swap_types::{SwapConfig, SwapError, SwapState};

#[contract]
pub struct ShareSwap;

#[contractimpl]
impl ShareSwap {
    /// Initialize the swap with its owner and configuration
    ///
    /// Swapping starts enabled and the first epoch starts at the current
    /// ledger timestamp.
    pub fn initialize(env: Env, admin: Address, config: SwapConfig) -> Result<(), SwapError> {
        if is_initialized(&env) {
            return Err(SwapError::AlreadyInitialized);
        }

        admin.require_auth();

        if !config.is_valid() {
            return Err(SwapError::InvalidConfig);
        }

        set_admin(&env, &admin);
        set_config(&env, &config);
        set_state(&env, &SwapState::new(env.ledger().timestamp()));

        Ok(())
    }

    /// Swap `share_amount` Share from `user` for Aalto
    ///
    /// Half of the shares go to the burn sink and half to the treasury, both
    /// pulled with `transfer_from`, so `user` must have approved this contract.
    ///
    /// # Returns
    /// Aalto credited to `user`
    pub fn swap(env: Env, user: Address, share_amount: i128) -> Result<i128, SwapError> {
        swap::execute_swap(&env, user, share_amount)
    }

    /// Enable or disable swapping (owner only)
    pub fn set_swap_enabled(env: Env, enabled: bool) {
        let admin = get_admin(&env);
        admin.require_auth();

        let mut state = get_state(&env);
        state.swap_enabled = enabled;
        set_state(&env, &state);

        log!(&env, "swap enabled set", enabled);
        SwapEnabledSet { enabled }.publish(&env);
    }

    // === View Functions ===

    /// Aalto that a swap of `share_amount` would credit, ignoring balances and the cap
    pub fn quote(env: Env, share_amount: i128) -> Result<i128, SwapError> {
        swap_math::quote_swap(&get_config(&env).terms(), share_amount)
    }

    /// Aalto the next swap could still receive in the epoch seen at the current time
    pub fn remaining_aalto_for_epoch(env: Env) -> i128 {
        let config = get_config(&env);
        let state = get_state(&env);
        swap_math::epoch_headroom(&state, &config.terms(), env.ledger().timestamp())
    }

    pub fn aalto_per_share(env: Env) -> i128 {
        get_config(&env).aalto_per_share
    }

    pub fn max_aalto_per_epoch(env: Env) -> i128 {
        get_config(&env).max_aalto_per_epoch
    }

    /// Stored epoch counter; an expired epoch is only reset by the next swap
    pub fn current_aalto_for_epoch(env: Env) -> i128 {
        get_state(&env).current_aalto_for_epoch
    }

    pub fn epoch_duration(env: Env) -> u64 {
        get_config(&env).epoch_duration
    }

    pub fn epoch_start_time(env: Env) -> u64 {
        get_state(&env).epoch_start_time
    }

    pub fn swap_enabled(env: Env) -> bool {
        get_state(&env).swap_enabled
    }

    pub fn admin(env: Env) -> Address {
        get_admin(&env)
    }

    pub fn get_config(env: Env) -> SwapConfig {
        get_config(&env)
    }

    pub fn get_state(env: Env) -> SwapState {
        get_state(&env)
    }
}
