#![no_std]

pub mod epoch_math;
pub mod rate_math;
pub mod swap_math;

pub use epoch_math::*;
pub use rate_math::*;
pub use swap_math::*;
