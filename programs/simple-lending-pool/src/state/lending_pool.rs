use super::*;

use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::utils::token::TokenVault;

/// Lending pool state
#[account]
#[derive(Debug, Default, PartialEq, InitSpace)]
pub struct LendingPool {
    /// Version of lending pool
    pub version: u8,
    /// Bump seed for derived authority address
    pub bump_seed: u8,
    /// Account that created the pool
    pub authority: Pubkey,
    /// Mint participants deposit as collateral
    pub collateral_mint: Pubkey,
    /// Mint participants borrow
    pub borrow_mint: Pubkey,
    /// Pool-owned token account holding deposited collateral
    pub collateral_vault: Pubkey,
    /// Pool-owned token account holding lendable reserves
    pub borrow_vault: Pubkey,
    /// Share of collateral that may be borrowed against, in percent. Fixed at init.
    pub collateral_factor_percent: u8,
    /// Sum of collateral deposited across positions
    pub total_collateral: u64,
    /// Sum of debt across positions
    pub total_borrowed: u64,
    /// Sum of reserves added across lenders
    pub total_funded: u64,
}

impl LendingPool {
    /// Create a new lending pool
    pub fn new(params: InitLendingPoolParams) -> Result<Self> {
        let mut lending_pool = Self::default();
        Self::init(&mut lending_pool, params)?;
        Ok(lending_pool)
    }

    /// Initialize a lending pool
    pub fn init(&mut self, params: InitLendingPoolParams) -> Result<()> {
        require_keys_neq!(params.collateral_mint, params.borrow_mint, ErrorCode::SameTokenMints);
        require!(
            params.collateral_factor_percent > 0
                && params.collateral_factor_percent as u64 <= PERCENT_SCALER,
            ErrorCode::InvalidConfig
        );

        self.version = PROGRAM_VERSION;
        self.bump_seed = params.bump_seed;
        self.authority = params.authority;
        self.collateral_mint = params.collateral_mint;
        self.borrow_mint = params.borrow_mint;
        self.collateral_vault = params.collateral_vault;
        self.borrow_vault = params.borrow_vault;
        self.collateral_factor_percent = params.collateral_factor_percent;
        self.total_collateral = 0;
        self.total_borrowed = 0;
        self.total_funded = 0;
        Ok(())
    }

    /// Seeds the pool PDA signs with, detached from the account borrow
    pub fn signer(&self) -> LendingPoolSigner {
        LendingPoolSigner {
            collateral_mint: self.collateral_mint,
            borrow_mint: self.borrow_mint,
            bump: [self.bump_seed],
        }
    }

    /// Pull collateral from the participant and credit it to their position
    pub fn deposit_collateral<V: TokenVault>(
        &mut self,
        position: &mut Position,
        collateral_vault: &mut V,
        amount: u64,
    ) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);

        self.atomically(position, |pool, position| {
            position.deposit(amount)?;
            pool.total_collateral = pool
                .total_collateral
                .checked_add(amount)
                .ok_or(ErrorCode::MathOverflow)?;

            collateral_vault.pull_from_user(amount)
        })
    }

    /// Lend reserves to the participant against their collateral
    pub fn borrow_funds<V: TokenVault>(
        &mut self,
        position: &mut Position,
        borrow_vault: &mut V,
        amount: u64,
    ) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);

        let collateral_factor_percent = self.collateral_factor_percent;
        position.check_borrow(amount, collateral_factor_percent)?;
        if borrow_vault.reserve_balance() < amount {
            msg!(
                "Reserves of {} cannot cover borrow of {}",
                borrow_vault.reserve_balance(),
                amount
            );
            return Err(ErrorCode::InsufficientReserves.into());
        }

        self.atomically(position, |pool, position| {
            position.borrow(amount, collateral_factor_percent)?;
            pool.total_borrowed = pool
                .total_borrowed
                .checked_add(amount)
                .ok_or(ErrorCode::MathOverflow)?;

            borrow_vault.pay_to_user(amount)
        })
    }

    /// Take borrow tokens back from the participant and reduce their debt
    pub fn repay_funds<V: TokenVault>(
        &mut self,
        position: &mut Position,
        borrow_vault: &mut V,
        amount: u64,
    ) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);

        self.atomically(position, |pool, position| {
            position.repay(amount)?;
            pool.total_borrowed = pool
                .total_borrowed
                .checked_sub(amount)
                .ok_or(ErrorCode::MathOverflow)?;

            borrow_vault.pull_from_user(amount)
        })
    }

    /// Return collateral to the participant as long as their debt stays covered
    pub fn withdraw_collateral<V: TokenVault>(
        &mut self,
        position: &mut Position,
        collateral_vault: &mut V,
        amount: u64,
    ) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);

        let collateral_factor_percent = self.collateral_factor_percent;
        self.atomically(position, |pool, position| {
            position.withdraw(amount, collateral_factor_percent)?;
            pool.total_collateral = pool
                .total_collateral
                .checked_sub(amount)
                .ok_or(ErrorCode::MathOverflow)?;

            collateral_vault.pay_to_user(amount)
        })
    }

    /// Add lendable reserves and credit them to the funder's lender record
    pub fn fund_reserves<V: TokenVault>(
        &mut self,
        lender: &mut Lender,
        borrow_vault: &mut V,
        amount: u64,
    ) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);

        self.atomically(lender, |pool, lender| {
            lender.fund(amount)?;
            pool.total_funded = pool
                .total_funded
                .checked_add(amount)
                .ok_or(ErrorCode::MathOverflow)?;

            borrow_vault.pull_from_user(amount)
        })
    }

    /// Run `op` against the pool and one participant record, restoring both if it fails.
    /// Token transfers must be the last fallible step of `op`.
    fn atomically<T, F>(&mut self, record: &mut T, op: F) -> Result<()>
    where
        T: Clone,
        F: FnOnce(&mut Self, &mut T) -> Result<()>,
    {
        let pool_before = self.clone();
        let record_before = record.clone();

        match op(self, record) {
            Ok(()) => Ok(()),
            Err(err) => {
                *self = pool_before;
                *record = record_before;
                Err(err)
            }
        }
    }
}

/// Initialize a lending pool
pub struct InitLendingPoolParams {
    /// Bump seed for derived authority address
    pub bump_seed: u8,
    /// Account that created the pool
    pub authority: Pubkey,
    pub collateral_mint: Pubkey,
    pub borrow_mint: Pubkey,
    pub collateral_vault: Pubkey,
    pub borrow_vault: Pubkey,
    pub collateral_factor_percent: u8,
}

/// Owned copy of the pool PDA seeds
pub struct LendingPoolSigner {
    collateral_mint: Pubkey,
    borrow_mint: Pubkey,
    bump: [u8; 1],
}

impl LendingPoolSigner {
    pub fn seeds(&self) -> [&[u8]; 4] {
        [
            LENDING_POOL_SEED,
            self.collateral_mint.as_ref(),
            self.borrow_mint.as_ref(),
            &self.bump,
        ]
    }
}
