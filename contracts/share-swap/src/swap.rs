use crate::events::ShareSwapped;
use crate::storage::{get_config, get_state, set_state};
use soroban_sdk::{log, token, Address, Env};
use swap_math::{check_swap_request, compute_swap};
use swap_types::SwapError;

/// Execute a share -> aalto swap for `user`
///
/// Checks run in a fixed order: enabled flag, amount, caller share balance,
/// epoch cap, contract aalto balance. Nothing is written or transferred
/// until every check has passed.
pub fn execute_swap(env: &Env, user: Address, share_amount: i128) -> Result<i128, SwapError> {
    user.require_auth();

    let config = get_config(env);
    let state = get_state(env);

    // compute_swap repeats this, but it has to fail before the balance read
    check_swap_request(&state, share_amount)?;

    let share_client = token::Client::new(env, &config.share_token);
    if share_client.balance(&user) < share_amount {
        return Err(SwapError::InsufficientCallerBalance);
    }

    let now = env.ledger().timestamp();
    let computation = compute_swap(&config.terms(), &state, share_amount, now)?;

    let aalto_client = token::Client::new(env, &config.aalto_token);
    let contract_address = env.current_contract_address();
    if aalto_client.balance(&contract_address) < computation.aalto_amount {
        return Err(SwapError::InsufficientContractOutputBalance);
    }

    if computation.epoch_rolled {
        log!(
            env,
            "epoch rolled",
            state.epoch_start_time,
            computation.next_state.epoch_start_time
        );
    }

    // Shares move under the allowance the user granted this contract
    if computation.burn_amount > 0 {
        share_client.transfer_from(
            &contract_address,
            &user,
            &config.burn_sink,
            &computation.burn_amount,
        );
    }
    if computation.treasury_amount > 0 {
        share_client.transfer_from(
            &contract_address,
            &user,
            &config.treasury,
            &computation.treasury_amount,
        );
    }

    aalto_client.transfer(&contract_address, &user, &computation.aalto_amount);

    set_state(env, &computation.next_state);

    log!(env, "share swap", user, share_amount, computation.aalto_amount);

    ShareSwapped {
        user,
        share_amount,
        aalto_amount: computation.aalto_amount,
    }
    .publish(env);

    Ok(computation.aalto_amount)
}
