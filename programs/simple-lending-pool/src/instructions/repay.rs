use crate::state::*;
use crate::events::DebtRepaid;
use crate::utils::token::SplTokenVault;
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

#[derive(Accounts)]
pub struct RepayFunds<'info> {
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
        space = 8 + Position::INIT_SPACE,
        seeds = [POSITION_SEED, lending_pool.key().as_ref(), signer.key().as_ref()],
        bump)]
    pub position: Box<Account<'info, Position>>,

    #[account(mut,
        token::mint = lending_pool.borrow_mint,
        token::authority = signer)]
    pub borrow_user_account: Account<'info, TokenAccount>, //source of the repayment

    #[account(mut, address = lending_pool.borrow_vault)]
    pub borrow_vault: Account<'info, TokenAccount>, //destination of the repayment

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_repay(ctx: Context<RepayFunds>, amount: u64) -> Result<()> {
    msg!("Repay");

    let clock = Clock::get()?;
    let position_bump = ctx.bumps.position;
    let accounts = &mut *ctx.accounts;
    let lending_pool_key = accounts.lending_pool.key();
    let owner = accounts.signer.key();

    accounts.position.init_or_validate(InitPositionParams {
        bump_seed: position_bump,
        lending_pool: lending_pool_key,
        owner,
        current_slot: clock.slot,
    })?;

    let pool_signer = accounts.lending_pool.signer();
    let seeds = pool_signer.seeds();
    let mut borrow_vault = SplTokenVault::new(
        &accounts.token_program,
        &accounts.borrow_user_account,
        &accounts.borrow_vault,
        &accounts.signer,
        accounts.lending_pool.to_account_info(),
        &seeds,
    );

    accounts
        .lending_pool
        .repay_funds(&mut accounts.position, &mut borrow_vault, amount)?;
    accounts.position.last_update_slot = clock.slot;

    emit!(DebtRepaid {
        lending_pool: lending_pool_key,
        owner,
        amount,
        borrowed: accounts.position.borrowed,
    });
    msg!("Remaining debt: {}", accounts.position.borrowed);

    Ok(())
}
