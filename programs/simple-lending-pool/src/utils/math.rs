use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::state::scaler::PERCENT_SCALER;

/// Whether `borrowed` stays within `collateral * factor_percent / 100`.
/// Compared as `borrowed * 100 <= collateral * factor_percent` so no rounding is involved.
pub fn within_collateral_limit(collateral: u64, borrowed: u64, factor_percent: u8) -> Result<bool> {
    let scaled_debt = (borrowed as u128)
        .checked_mul(PERCENT_SCALER as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    let scaled_limit = (collateral as u128)
        .checked_mul(factor_percent as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    Ok(scaled_debt <= scaled_limit)
}

/// Largest debt `collateral` can back, rounded down
pub fn borrow_limit(collateral: u64, factor_percent: u8) -> Result<u64> {
    let limit = (collateral as u128)
        .checked_mul(factor_percent as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(PERCENT_SCALER as u128)
        .ok_or(ErrorCode::DivisionByZero)?;
    u64::try_from(limit).map_err(|_| ErrorCode::MathOverflow.into())
}

/// Smallest collateral that keeps `borrowed` within the limit, rounded up
pub fn required_collateral(borrowed: u64, factor_percent: u8) -> Result<u64> {
    if factor_percent == 0 {
        msg!("Collateral factor cannot be 0");
        return Err(ErrorCode::DivisionByZero.into());
    }
    let factor = factor_percent as u128;
    let required = (borrowed as u128)
        .checked_mul(PERCENT_SCALER as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_add(factor - 1)
        .ok_or(ErrorCode::MathOverflow)?
        / factor;
    u64::try_from(required).map_err(|_| ErrorCode::MathOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::scaler::COLLATERAL_FACTOR_PERCENT;

    #[test]
    fn test_limit_is_inclusive() {
        assert!(within_collateral_limit(100, 75, COLLATERAL_FACTOR_PERCENT).unwrap());
        assert!(!within_collateral_limit(100, 76, COLLATERAL_FACTOR_PERCENT).unwrap());
        assert!(within_collateral_limit(0, 0, COLLATERAL_FACTOR_PERCENT).unwrap());
        assert!(!within_collateral_limit(0, 1, COLLATERAL_FACTOR_PERCENT).unwrap());
    }

    #[test]
    fn test_limit_does_not_round_in_favour_of_borrower() {
        // 3 * 0.75 = 2.25, so 2 is fine and 3 is not
        assert!(within_collateral_limit(3, 2, COLLATERAL_FACTOR_PERCENT).unwrap());
        assert!(!within_collateral_limit(3, 3, COLLATERAL_FACTOR_PERCENT).unwrap());
        assert_eq!(borrow_limit(3, COLLATERAL_FACTOR_PERCENT).unwrap(), 2);
    }

    #[test]
    fn test_borrow_limit() {
        assert_eq!(borrow_limit(100, COLLATERAL_FACTOR_PERCENT).unwrap(), 75);
        assert_eq!(borrow_limit(80, COLLATERAL_FACTOR_PERCENT).unwrap(), 60);
        assert_eq!(borrow_limit(0, COLLATERAL_FACTOR_PERCENT).unwrap(), 0);
        assert_eq!(
            borrow_limit(u64::MAX, COLLATERAL_FACTOR_PERCENT).unwrap(),
            (u64::MAX as u128 * 75 / 100) as u64
        );
    }

    #[test]
    fn test_required_collateral_rounds_up() {
        assert_eq!(required_collateral(75, COLLATERAL_FACTOR_PERCENT).unwrap(), 100);
        assert_eq!(required_collateral(50, COLLATERAL_FACTOR_PERCENT).unwrap(), 67);
        assert_eq!(required_collateral(0, COLLATERAL_FACTOR_PERCENT).unwrap(), 0);
        assert!(within_collateral_limit(67, 50, COLLATERAL_FACTOR_PERCENT).unwrap());
        assert!(!within_collateral_limit(66, 50, COLLATERAL_FACTOR_PERCENT).unwrap());
    }

    #[test]
    fn test_required_collateral_rejects_zero_factor() {
        assert!(required_collateral(10, 0).is_err());
    }

    #[test]
    fn test_full_range_does_not_overflow() {
        assert!(within_collateral_limit(u64::MAX, u64::MAX, 100).unwrap());
        assert!(required_collateral(u64::MAX, 100).is_ok());
        // u64::MAX * 100 / 75 no longer fits in u64
        assert!(required_collateral(u64::MAX, COLLATERAL_FACTOR_PERCENT).is_err());
    }
}
