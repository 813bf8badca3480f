use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::*;
pub use utils::*;

declare_id!("6LQmSxSmq8mTSBqTcufK9eJXqTyrcQx8BYy2qM8CMFpr");

#[program]
pub mod simple_lending_pool {
    use super::*;

    pub fn init_lending_pool(ctx: Context<LendingPoolInit>) -> Result<()> {
        msg!("Instruction: init_lending_pool");
        handle_init_lending_pool(ctx)
    }

    pub fn deposit_collateral(ctx: Context<DepositCollateral>, amount: u64) -> Result<()> {
        msg!("Instruction: deposit_collateral");
        handle_deposit_collateral(ctx, amount)
    }

    pub fn borrow(ctx: Context<BorrowFunds>, amount: u64) -> Result<()> {
        msg!("Instruction: borrow");
        handle_borrow(ctx, amount)
    }

    pub fn repay(ctx: Context<RepayFunds>, amount: u64) -> Result<()> {
        msg!("Instruction: repay");
        handle_repay(ctx, amount)
    }

    pub fn withdraw_collateral(ctx: Context<WithdrawCollateral>, amount: u64) -> Result<()> {
        msg!("Instruction: withdraw_collateral");
        handle_withdraw_collateral(ctx, amount)
    }

    pub fn fund_reserves(ctx: Context<FundReserves>, amount: u64) -> Result<()> {
        msg!("Instruction: fund_reserves");
        handle_fund_reserves(ctx, amount)
    }

    pub fn get_position_limits(ctx: Context<PositionView>) -> Result<PositionLimits> {
        handle_get_position_limits(ctx)
    }
}
