use swap_types::{SwapError, SHARE_SPLIT_DIVISOR};

/// Aalto owed for `share_amount` at the fixed rate
pub fn aalto_for_shares(share_amount: i128, aalto_per_share: i128) -> Result<i128, SwapError> {
    share_amount
        .checked_mul(aalto_per_share)
        .ok_or(SwapError::ArithmeticOverflow)
}

/// Split a share input into (burn, treasury) legs.
///
/// Both legs are `floor(share_amount / 2)`. For an odd input the last unit
/// belongs to neither leg and stays with the caller.
pub fn split_shares(share_amount: i128) -> (i128, i128) {
    let half = share_amount / SHARE_SPLIT_DIVISOR;
    (half, half)
}

/// Shares left with the caller after the split
pub fn split_remainder(share_amount: i128) -> i128 {
    share_amount % SHARE_SPLIT_DIVISOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aalto_for_shares_basic() {
        assert_eq!(aalto_for_shares(100, 10), Ok(1_000));
        assert_eq!(aalto_for_shares(1, 1), Ok(1));
    }

    #[test]
    fn test_aalto_for_shares_token_decimals() {
        // 100 shares with 7 decimals
        let shares = 100 * 10_000_000i128;
        assert_eq!(aalto_for_shares(shares, 10), Ok(10_000_000_000));
    }

    #[test]
    fn test_aalto_for_shares_overflow() {
        assert_eq!(
            aalto_for_shares(i128::MAX / 2 + 1, 2),
            Err(SwapError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_split_even() {
        assert_eq!(split_shares(100), (50, 50));
        assert_eq!(split_remainder(100), 0);
    }

    #[test]
    fn test_split_odd_leaves_one_unit() {
        let (burn, treasury) = split_shares(101);
        assert_eq!(burn, 50);
        assert_eq!(treasury, 50);
        assert_eq!(burn + treasury + split_remainder(101), 101);
    }

    #[test]
    fn test_split_single_unit() {
        assert_eq!(split_shares(1), (0, 0));
        assert_eq!(split_remainder(1), 1);
    }
}
