use super::*;

use anchor_lang::prelude::*;
use crate::error::ErrorCode;

/// Borrow tokens one funder has added to a pool's reserves
#[account]
#[derive(Debug, Default, PartialEq, InitSpace)]
pub struct Lender {
    pub version: u8,
    /// Bump seed for the lender PDA
    pub bump_seed: u8,
    /// Lending pool address
    pub lending_pool: Pubkey,
    /// Funder the record belongs to
    pub owner: Pubkey,
    /// Running total of borrow token base units funded
    pub amount_funded: u64,
    /// Slot of the last committed change
    pub last_update_slot: u64,
}

impl Lender {
    /// Create a new lender record
    pub fn new(params: InitLenderParams) -> Self {
        let mut lender = Self::default();
        Self::init(&mut lender, params);
        lender
    }

    /// Initialize a lender record with nothing funded
    pub fn init(&mut self, params: InitLenderParams) {
        self.version = PROGRAM_VERSION;
        self.bump_seed = params.bump_seed;
        self.lending_pool = params.lending_pool;
        self.owner = params.owner;
        self.amount_funded = 0;
        self.last_update_slot = params.current_slot;
    }

    /// Initialize a freshly created account, or check that an existing one matches
    pub fn init_or_validate(&mut self, params: InitLenderParams) -> Result<()> {
        if self.version == 0 {
            self.init(params);
            return Ok(());
        }

        require_keys_eq!(
            self.lending_pool,
            params.lending_pool,
            ErrorCode::InvalidLendingPoolAccount
        );
        require_keys_eq!(self.owner, params.owner, ErrorCode::LenderNotOwnedBySigner);
        Ok(())
    }

    /// Record funded reserves
    pub fn fund(&mut self, amount: u64) -> Result<()> {
        self.amount_funded = self
            .amount_funded
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }
}

/// Initialize a lender record
pub struct InitLenderParams {
    /// Bump seed for the lender PDA
    pub bump_seed: u8,
    /// Lending pool address
    pub lending_pool: Pubkey,
    /// Funder the record belongs to
    pub owner: Pubkey,
    /// Slot the record is created in
    pub current_slot: u64,
}
