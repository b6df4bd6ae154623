use soroban_sdk::contracterror;

/// Errors returned by the share swap contract.
///
/// Codes are part of the contract interface and must stay stable.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SwapError {
    /// `initialize` was called on a configured contract
    AlreadyInitialized = 1,
    /// Rate, cap or epoch duration is not positive, or both tokens are the same
    InvalidConfig = 2,
    /// The owner has disabled swapping
    SwapDisabled = 3,
    /// Zero share amount
    ZeroAmount = 4,
    /// Negative share amount
    NegativeAmount = 5,
    /// Caller holds fewer shares than requested
    InsufficientCallerBalance = 6,
    /// Swap would push the epoch's issued Aalto above the cap
    EpochCapExceeded = 7,
    /// Contract holds less Aalto than the swap would pay out
    InsufficientContractOutputBalance = 8,
    /// Output or epoch accounting does not fit in i128
    ArithmeticOverflow = 9,
}
