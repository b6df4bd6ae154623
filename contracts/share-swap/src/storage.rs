use soroban_sdk::{contracttype, Address, Env};
use swap_types::{SwapConfig, SwapState};

// ============================================================================
// Storage layout
// ============================================================================
// Everything lives in Instance storage: three small entries read by every
// swap, sharing one TTL with the contract instance.
// ============================================================================

/// Storage keys for the swap contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Owner allowed to toggle swapping (Instance storage)
    Admin,
    /// Swap configuration (Instance storage)
    Config,
    /// Epoch accounting and the enabled flag (Instance storage)
    State,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

// === Admin ===

pub fn get_admin(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("Not initialized")
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    extend_instance_ttl(env);
}

// === Config ===

pub fn get_config(env: &Env) -> SwapConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Not initialized")
}

pub fn set_config(env: &Env, config: &SwapConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

pub fn get_state(env: &Env) -> SwapState {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .expect("Not initialized")
}

pub fn set_state(env: &Env, state: &SwapState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}
