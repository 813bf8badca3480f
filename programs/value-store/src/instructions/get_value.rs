use anchor_lang::prelude::*;
use crate::state::*;

#[derive(Accounts)]
pub struct ValueStoreGet<'info> {
    pub value_store: Account<'info, ValueStore>,
}

pub fn handle_get_value(ctx: Context<ValueStoreGet>) -> Result<u64> {
    Ok(ctx.accounts.value_store.value)
}
