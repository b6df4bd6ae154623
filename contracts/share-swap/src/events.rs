use soroban_sdk::{contractevent, Address};

/// Published once per successful swap
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShareSwapped {
    #[topic]
    pub user: Address,
    pub share_amount: i128,
    pub aalto_amount: i128,
}

/// Published when the owner toggles swapping
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapEnabledSet {
    pub enabled: bool,
}
