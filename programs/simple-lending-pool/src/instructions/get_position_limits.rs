use crate::state::*;
use crate::error::ErrorCode;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct PositionView<'info> {
    pub lending_pool: Box<Account<'info, LendingPool>>,

    #[account(has_one = lending_pool @ ErrorCode::InvalidLendingPoolAccount)]
    pub position: Box<Account<'info, Position>>,
}

pub fn handle_get_position_limits(ctx: Context<PositionView>) -> Result<PositionLimits> {
    let lending_pool = &ctx.accounts.lending_pool;
    let position = &ctx.accounts.position;

    position.limits(lending_pool.collateral_factor_percent)
}
