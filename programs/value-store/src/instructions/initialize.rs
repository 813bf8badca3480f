use anchor_lang::prelude::*;
use crate::state::*;

#[derive(Accounts)]
pub struct ValueStoreInit<'info> {
    #[account(init,
        payer = signer,
        space = 8 + ValueStore::INIT_SPACE,
        seeds = [VALUE_STORE_SEED, signer.key().as_ref()],
        bump)]
    pub value_store: Account<'info, ValueStore>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(ctx: Context<ValueStoreInit>, initial_value: u64) -> Result<()> {
    let value_store = &mut ctx.accounts.value_store;
    value_store.init(ctx.bumps.value_store, ctx.accounts.signer.key(), initial_value);

    msg!("Initial stored value: {}", value_store.value);
    Ok(())
}
