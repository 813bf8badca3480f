use crate::state::*;
use crate::events::ReservesFunded;
use crate::utils::token::SplTokenVault;
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

#[derive(Accounts)]
pub struct FundReserves<'info> {
    #[account(mut,
        seeds = [
            LENDING_POOL_SEED,
            lending_pool.collateral_mint.as_ref(),
            lending_pool.borrow_mint.as_ref(),
        ],
        bump = lending_pool.bump_seed)]
    pub lending_pool: Box<Account<'info, LendingPool>>,

    #[account(init_if_needed,
        payer = signer,
        space = 8 + Lender::INIT_SPACE,
        seeds = [LENDER_SEED, lending_pool.key().as_ref(), signer.key().as_ref()],
        bump)]
    pub lender: Box<Account<'info, Lender>>,

    #[account(mut,
        token::mint = lending_pool.borrow_mint,
        token::authority = signer)]
    pub funder_token_account: Account<'info, TokenAccount>,

    #[account(mut, address = lending_pool.borrow_vault)]
    pub borrow_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_fund_reserves(ctx: Context<FundReserves>, amount: u64) -> Result<()> {
    msg!("Fund reserves");

    let clock = Clock::get()?;
    let lender_bump = ctx.bumps.lender;
    let accounts = &mut *ctx.accounts;
    let lending_pool_key = accounts.lending_pool.key();
    let funder = accounts.signer.key();

    accounts.lender.init_or_validate(InitLenderParams {
        bump_seed: lender_bump,
        lending_pool: lending_pool_key,
        owner: funder,
        current_slot: clock.slot,
    })?;

    let pool_signer = accounts.lending_pool.signer();
    let seeds = pool_signer.seeds();
    let mut borrow_vault = SplTokenVault::new(
        &accounts.token_program,
        &accounts.funder_token_account,
        &accounts.borrow_vault,
        &accounts.signer,
        accounts.lending_pool.to_account_info(),
        &seeds,
    );

    accounts
        .lending_pool
        .fund_reserves(&mut accounts.lender, &mut borrow_vault, amount)?;
    accounts.lender.last_update_slot = clock.slot;

    emit!(ReservesFunded {
        lending_pool: lending_pool_key,
        funder,
        amount,
        amount_funded: accounts.lender.amount_funded,
    });
    msg!("Reserves funded: {}", accounts.lender.amount_funded);

    Ok(())
}
