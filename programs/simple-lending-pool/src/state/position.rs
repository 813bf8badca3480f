use super::*;

use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::utils::math::*;

/// Collateral and debt held by one participant in one lending pool
#[account]
#[derive(Debug, Default, PartialEq, InitSpace)]
pub struct Position {
    pub version: u8,
    /// Bump seed for the position PDA
    pub bump_seed: u8,
    /// Lending pool address
    pub lending_pool: Pubkey,
    /// Participant the position belongs to
    pub owner: Pubkey,
    /// Collateral token base units held by the pool for this participant
    pub collateral_deposited: u64,
    /// Borrow token base units owed by this participant
    pub borrowed: u64,
    /// Slot of the last committed change
    pub last_update_slot: u64,
}

impl Position {
    /// Create a new position
    pub fn new(params: InitPositionParams) -> Self {
        let mut position = Self::default();
        Self::init(&mut position, params);
        position
    }

    /// Initialize a position with zero balances
    pub fn init(&mut self, params: InitPositionParams) {
        self.version = PROGRAM_VERSION;
        self.bump_seed = params.bump_seed;
        self.lending_pool = params.lending_pool;
        self.owner = params.owner;
        self.collateral_deposited = 0;
        self.borrowed = 0;
        self.last_update_slot = params.current_slot;
    }

    /// Initialize a freshly created account, or check that an existing one matches
    pub fn init_or_validate(&mut self, params: InitPositionParams) -> Result<()> {
        if self.version == 0 {
            self.init(params);
            return Ok(());
        }

        require_keys_eq!(
            self.lending_pool,
            params.lending_pool,
            ErrorCode::InvalidLendingPoolAccount
        );
        require_keys_eq!(self.owner, params.owner, ErrorCode::PositionNotOwnedBySigner);
        Ok(())
    }

    /// Increase deposited collateral
    pub fn deposit(&mut self, collateral_amount: u64) -> Result<()> {
        self.collateral_deposited = self
            .collateral_deposited
            .checked_add(collateral_amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Debt after borrowing `borrow_amount`, if it stays within the collateral limit
    pub fn check_borrow(&self, borrow_amount: u64, collateral_factor_percent: u8) -> Result<u64> {
        let borrowed = self
            .borrowed
            .checked_add(borrow_amount)
            .ok_or(ErrorCode::MathOverflow)?;

        if !within_collateral_limit(self.collateral_deposited, borrowed, collateral_factor_percent)? {
            msg!(
                "Borrow of {} exceeds limit of {} for collateral {}",
                borrow_amount,
                self.max_borrow_amount(collateral_factor_percent)?,
                self.collateral_deposited
            );
            return Err(ErrorCode::CollateralLimitExceeded.into());
        }

        Ok(borrowed)
    }

    /// Increase debt, refusing to go past the collateral limit
    pub fn borrow(&mut self, borrow_amount: u64, collateral_factor_percent: u8) -> Result<()> {
        self.borrowed = self.check_borrow(borrow_amount, collateral_factor_percent)?;
        Ok(())
    }

    /// Decrease debt. Overpayment is rejected rather than clamped.
    pub fn repay(&mut self, repay_amount: u64) -> Result<()> {
        if self.borrowed == 0 {
            return Err(ErrorCode::NoOutstandingDebt.into());
        }
        if repay_amount > self.borrowed {
            msg!("Repay of {} exceeds debt of {}", repay_amount, self.borrowed);
            return Err(ErrorCode::RepayExceedsDebt.into());
        }

        self.borrowed -= repay_amount;
        Ok(())
    }

    /// Decrease deposited collateral, refusing to leave the debt under-collateralized
    pub fn withdraw(&mut self, withdraw_amount: u64, collateral_factor_percent: u8) -> Result<()> {
        let collateral_deposited = self
            .collateral_deposited
            .checked_sub(withdraw_amount)
            .ok_or(ErrorCode::InsufficientCollateral)?;

        if !within_collateral_limit(collateral_deposited, self.borrowed, collateral_factor_percent)? {
            msg!(
                "Withdrawal of {} would leave {} backing debt of {}",
                withdraw_amount,
                collateral_deposited,
                self.borrowed
            );
            return Err(ErrorCode::UnderCollateralized.into());
        }

        self.collateral_deposited = collateral_deposited;
        Ok(())
    }

    /// Whether the position satisfies the collateral limit
    pub fn is_healthy(&self, collateral_factor_percent: u8) -> Result<bool> {
        within_collateral_limit(self.collateral_deposited, self.borrowed, collateral_factor_percent)
    }

    /// Calculate how much more can be borrowed against the current collateral
    pub fn max_borrow_amount(&self, collateral_factor_percent: u8) -> Result<u64> {
        Ok(borrow_limit(self.collateral_deposited, collateral_factor_percent)?
            .saturating_sub(self.borrowed))
    }

    /// Calculate how much collateral can leave without breaching the limit
    pub fn max_withdraw_amount(&self, collateral_factor_percent: u8) -> Result<u64> {
        if self.borrowed == 0 {
            return Ok(self.collateral_deposited);
        }
        Ok(self
            .collateral_deposited
            .saturating_sub(required_collateral(self.borrowed, collateral_factor_percent)?))
    }

    pub fn limits(&self, collateral_factor_percent: u8) -> Result<PositionLimits> {
        Ok(PositionLimits {
            collateral_deposited: self.collateral_deposited,
            borrowed: self.borrowed,
            max_borrow: self.max_borrow_amount(collateral_factor_percent)?,
            max_withdraw: self.max_withdraw_amount(collateral_factor_percent)?,
        })
    }
}

/// Initialize a position
pub struct InitPositionParams {
    /// Bump seed for the position PDA
    pub bump_seed: u8,
    /// Lending pool address
    pub lending_pool: Pubkey,
    /// Participant the position belongs to
    pub owner: Pubkey,
    /// Slot the position is created in
    pub current_slot: u64,
}

/// Snapshot of a position and what it can still do, returned by `get_position_limits`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionLimits {
    pub collateral_deposited: u64,
    pub borrowed: u64,
    pub max_borrow: u64,
    pub max_withdraw: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::scaler::COLLATERAL_FACTOR_PERCENT;
    use anchor_lang::error::Error;

    fn position_with(collateral_deposited: u64, borrowed: u64) -> Position {
        let mut position = Position::new(InitPositionParams {
            bump_seed: 255,
            lending_pool: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            current_slot: 1,
        });
        position.collateral_deposited = collateral_deposited;
        position.borrowed = borrowed;
        position
    }

    #[test]
    fn test_new_position_is_empty() {
        let position = position_with(0, 0);
        assert_eq!(position.version, PROGRAM_VERSION);
        assert_eq!(position.collateral_deposited, 0);
        assert_eq!(position.borrowed, 0);
        assert_eq!(position.last_update_slot, 1);
    }

    #[test]
    fn test_init_or_validate() {
        let lending_pool = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let params = || InitPositionParams {
            bump_seed: 7,
            lending_pool,
            owner,
            current_slot: 3,
        };

        let mut position = Position::default();
        position.init_or_validate(params()).unwrap();
        assert_eq!(position.owner, owner);
        assert_eq!(position.bump_seed, 7);

        position.deposit(10).unwrap();
        position.init_or_validate(params()).unwrap();
        assert_eq!(position.collateral_deposited, 10);

        let err = position
            .init_or_validate(InitPositionParams {
                owner: Pubkey::new_unique(),
                ..params()
            })
            .unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::PositionNotOwnedBySigner));

        let err = position
            .init_or_validate(InitPositionParams {
                lending_pool: Pubkey::new_unique(),
                ..params()
            })
            .unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::InvalidLendingPoolAccount));
    }

    #[test]
    fn test_borrow_up_to_limit() {
        let mut position = position_with(100, 0);
        position.borrow(75, COLLATERAL_FACTOR_PERCENT).unwrap();
        assert_eq!(position.borrowed, 75);

        let err = position.borrow(1, COLLATERAL_FACTOR_PERCENT).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::CollateralLimitExceeded));
        assert_eq!(position.borrowed, 75);
    }

    #[test]
    fn test_check_borrow_leaves_position_alone() {
        let position = position_with(100, 50);
        assert_eq!(position.check_borrow(25, COLLATERAL_FACTOR_PERCENT).unwrap(), 75);
        assert_eq!(position.borrowed, 50);

        let err = position.check_borrow(26, COLLATERAL_FACTOR_PERCENT).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::CollateralLimitExceeded));

        let err = position.check_borrow(u64::MAX, COLLATERAL_FACTOR_PERCENT).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::MathOverflow));
    }

    #[test]
    fn test_borrow_without_collateral() {
        let mut position = position_with(0, 0);
        let err = position.borrow(1, COLLATERAL_FACTOR_PERCENT).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::CollateralLimitExceeded));
    }

    #[test]
    fn test_repay() {
        let mut position = position_with(100, 75);
        position.repay(50).unwrap();
        assert_eq!(position.borrowed, 25);

        let err = position.repay(26).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::RepayExceedsDebt));
        assert_eq!(position.borrowed, 25);

        position.repay(25).unwrap();
        let err = position.repay(1).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::NoOutstandingDebt));
    }

    #[test]
    fn test_withdraw_keeps_position_collateralized() {
        let mut position = position_with(100, 50);

        let err = position.withdraw(60, COLLATERAL_FACTOR_PERCENT).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::UnderCollateralized));
        assert_eq!(position.collateral_deposited, 100);

        position.withdraw(20, COLLATERAL_FACTOR_PERCENT).unwrap();
        assert_eq!(position.collateral_deposited, 80);
        assert!(position.is_healthy(COLLATERAL_FACTOR_PERCENT).unwrap());
    }

    #[test]
    fn test_withdraw_more_than_deposited() {
        let mut position = position_with(10, 0);
        let err = position.withdraw(11, COLLATERAL_FACTOR_PERCENT).unwrap_err();
        assert_eq!(err, Error::from(ErrorCode::InsufficientCollateral));
        position.withdraw(10, COLLATERAL_FACTOR_PERCENT).unwrap();
        assert_eq!(position.collateral_deposited, 0);
    }

    #[test]
    fn test_limits() {
        let position = position_with(100, 50);
        assert_eq!(
            position.limits(COLLATERAL_FACTOR_PERCENT).unwrap(),
            PositionLimits {
                collateral_deposited: 100,
                borrowed: 50,
                max_borrow: 25,
                max_withdraw: 33,
            }
        );

        // the reported maximum is exactly what a withdrawal accepts
        let mut position = position_with(100, 50);
        position.withdraw(33, COLLATERAL_FACTOR_PERCENT).unwrap();
        let mut position = position_with(100, 50);
        assert!(position.withdraw(34, COLLATERAL_FACTOR_PERCENT).is_err());

        let empty = position_with(0, 0);
        assert_eq!(empty.limits(COLLATERAL_FACTOR_PERCENT).unwrap(), PositionLimits::default());
    }
}
