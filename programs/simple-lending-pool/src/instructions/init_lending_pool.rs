use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::state::*;

/// Lending pool context
#[derive(Accounts)]
pub struct LendingPoolInit<'info> {
    #[account(init,
        payer = signer,
        space = 8 + LendingPool::INIT_SPACE,
        seeds = [
            LENDING_POOL_SEED,
            collateral_mint.key().as_ref(),
            borrow_mint.key().as_ref(),
        ],
        bump)]
    pub lending_pool: Account<'info, LendingPool>,

    pub collateral_mint: Account<'info, Mint>,

    pub borrow_mint: Account<'info, Mint>,

    //holds every participant's collateral, owned by the pool PDA
    #[account(init,
        payer = signer,
        seeds = [COLLATERAL_VAULT_SEED, lending_pool.key().as_ref()],
        bump,
        token::mint = collateral_mint,
        token::authority = lending_pool)]
    pub collateral_vault: Account<'info, TokenAccount>,

    //lendable reserves, owned by the pool PDA
    #[account(init,
        payer = signer,
        seeds = [BORROW_VAULT_SEED, lending_pool.key().as_ref()],
        bump,
        token::mint = borrow_mint,
        token::authority = lending_pool)]
    pub borrow_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Program<'info, Token>,

    pub rent: Sysvar<'info, Rent>,
}

pub fn handle_init_lending_pool(ctx: Context<LendingPoolInit>) -> Result<()> {
    let lending_pool = &mut ctx.accounts.lending_pool;

    lending_pool.init(InitLendingPoolParams {
        bump_seed: ctx.bumps.lending_pool,
        authority: ctx.accounts.signer.key(),
        collateral_mint: ctx.accounts.collateral_mint.key(),
        borrow_mint: ctx.accounts.borrow_mint.key(),
        collateral_vault: ctx.accounts.collateral_vault.key(),
        borrow_vault: ctx.accounts.borrow_vault.key(),
        collateral_factor_percent: COLLATERAL_FACTOR_PERCENT,
    })?;

    msg!(
        "Lending pool initialized with collateral factor {}%",
        lending_pool.collateral_factor_percent
    );
    Ok(())
}
