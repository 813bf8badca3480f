use super::*;

use anchor_lang::prelude::*;
use crate::error::ErrorCode;

/// A single stored integer
#[account]
#[derive(Debug, Default, PartialEq, InitSpace)]
pub struct ValueStore {
    pub version: u8,
    pub bump_seed: u8,
    /// Creator, the only signer allowed through `set_value_owner_only`
    pub owner: Pubkey,
    pub value: u64,
    /// Number of successful writes since creation
    pub update_count: u64,
}

impl ValueStore {
    pub fn init(&mut self, bump_seed: u8, owner: Pubkey, initial_value: u64) {
        self.version = PROGRAM_VERSION;
        self.bump_seed = bump_seed;
        self.owner = owner;
        self.value = initial_value;
        self.update_count = 0;
    }

    /// Replace the value, returning the previous one
    pub fn set(&mut self, new_value: u64) -> Result<u64> {
        let old_value = self.value;
        self.value = new_value;
        self.update_count = self
            .update_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(old_value)
    }

    /// Replace the value if `signer` owns the store
    pub fn set_as_owner(&mut self, signer: Pubkey, new_value: u64) -> Result<u64> {
        require_keys_eq!(signer, self.owner, ErrorCode::Unauthorized);
        self.set(new_value)
    }
}
