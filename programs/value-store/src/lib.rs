use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

pub use instructions::*;
pub use state::*;

declare_id!("Aw7yu86xFtMZmcq1ujU5KA8gwjJ3CbbfFES34eGJowDy");

#[program]
pub mod value_store {
    use super::*;

    pub fn initialize(ctx: Context<ValueStoreInit>, initial_value: u64) -> Result<()> {
        msg!("Instruction: initialize");
        handle_initialize(ctx, initial_value)
    }

    pub fn set_value(ctx: Context<ValueStoreSet>, new_value: u64) -> Result<()> {
        msg!("Instruction: set_value");
        handle_set_value(ctx, new_value)
    }

    pub fn set_value_owner_only(ctx: Context<ValueStoreSet>, new_value: u64) -> Result<()> {
        msg!("Instruction: set_value_owner_only");
        handle_set_value_owner_only(ctx, new_value)
    }

    pub fn get_value(ctx: Context<ValueStoreGet>) -> Result<u64> {
        handle_get_value(ctx)
    }
}
