#![no_std]

mod error;
mod swap;

pub use error::*;
pub use swap::*;

/// Divisor applied to the share input to get each of the burn and treasury legs
pub const SHARE_SPLIT_DIVISOR: i128 = 2;

/// Default Aalto credited per Share
pub const DEFAULT_AALTO_PER_SHARE: i128 = 10;

/// Default epoch length: one day of ledger time, in seconds
pub const DEFAULT_EPOCH_DURATION: u64 = 86_400;
