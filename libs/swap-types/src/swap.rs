use soroban_sdk::{contracttype, Address};

/// Swap configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapConfig {
    /// Token taken from the caller (Share)
    pub share_token: Address,
    /// Token paid out to the caller (Aalto)
    pub aalto_token: Address,
    /// Receives half of every share input
    pub treasury: Address,
    /// Non-recoverable address receiving the burned half
    pub burn_sink: Address,
    /// Aalto credited per Share
    pub aalto_per_share: i128,
    /// Maximum Aalto paid out within one epoch
    pub max_aalto_per_epoch: i128,
    /// Epoch length in seconds
    pub epoch_duration: u64,
}

impl SwapConfig {
    /// The numeric part of the config used by the pure swap computation
    pub fn terms(&self) -> SwapTerms {
        SwapTerms {
            aalto_per_share: self.aalto_per_share,
            max_aalto_per_epoch: self.max_aalto_per_epoch,
            epoch_duration: self.epoch_duration,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.terms().is_valid() && self.share_token != self.aalto_token
    }
}

/// Current swap state - stored in Instance storage, rewritten by every swap
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapState {
    /// Owner-controlled kill switch
    pub swap_enabled: bool,
    /// Aalto paid out since `epoch_start_time`
    pub current_aalto_for_epoch: i128,
    /// Ledger timestamp at which the current epoch began
    pub epoch_start_time: u64,
}

impl SwapState {
    pub fn new(epoch_start_time: u64) -> Self {
        Self {
            swap_enabled: true,
            current_aalto_for_epoch: 0,
            epoch_start_time,
        }
    }
}

// ============================================================================
// SWAP COMPUTATION TYPES
// These types separate pure computation from side effects
// ============================================================================

/// Rate and rate-limit parameters (input to pure computation)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwapTerms {
    pub aalto_per_share: i128,
    pub max_aalto_per_epoch: i128,
    pub epoch_duration: u64,
}

impl SwapTerms {
    pub fn is_valid(&self) -> bool {
        self.aalto_per_share > 0 && self.max_aalto_per_epoch > 0 && self.epoch_duration > 0
    }
}

/// Complete result of pure swap computation
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapComputation {
    /// Aalto credited to the caller
    pub aalto_amount: i128,
    /// Shares moved from the caller to the burn sink
    pub burn_amount: i128,
    /// Shares moved from the caller to the treasury
    pub treasury_amount: i128,
    /// Whether the epoch window expired and was restarted by this swap
    pub epoch_rolled: bool,
    /// State to persist once the transfers succeed
    pub next_state: SwapState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::Env;

    fn config(env: &Env) -> SwapConfig {
        SwapConfig {
            share_token: Address::generate(env),
            aalto_token: Address::generate(env),
            treasury: Address::generate(env),
            burn_sink: Address::generate(env),
            aalto_per_share: 10,
            max_aalto_per_epoch: 1_000,
            epoch_duration: 3600,
        }
    }

    #[test]
    fn test_new_state_is_enabled_and_empty() {
        let state = SwapState::new(42);
        assert!(state.swap_enabled);
        assert_eq!(state.current_aalto_for_epoch, 0);
        assert_eq!(state.epoch_start_time, 42);
    }

    #[test]
    fn test_config_terms() {
        let env = Env::default();
        let config = config(&env);
        let terms = config.terms();
        assert_eq!(terms.aalto_per_share, 10);
        assert_eq!(terms.max_aalto_per_epoch, 1_000);
        assert_eq!(terms.epoch_duration, 3600);
        assert!(config.is_valid());
    }

    #[test]
    fn test_config_rejects_non_positive_terms() {
        let env = Env::default();

        let mut zero_rate = config(&env);
        zero_rate.aalto_per_share = 0;
        assert!(!zero_rate.is_valid());

        let mut negative_cap = config(&env);
        negative_cap.max_aalto_per_epoch = -1;
        assert!(!negative_cap.is_valid());

        let mut zero_epoch = config(&env);
        zero_epoch.epoch_duration = 0;
        assert!(!zero_epoch.is_valid());
    }

    #[test]
    fn test_config_rejects_identical_tokens() {
        let env = Env::default();
        let mut config = config(&env);
        config.aalto_token = config.share_token.clone();
        assert!(!config.is_valid());
    }
}
