use anchor_lang::prelude::*;

#[event]
pub struct CollateralDeposited {
    pub lending_pool: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub collateral_deposited: u64,
}

#[event]
pub struct FundsBorrowed {
    pub lending_pool: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub borrowed: u64,
}

#[event]
pub struct DebtRepaid {
    pub lending_pool: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub borrowed: u64,
}

#[event]
pub struct CollateralWithdrawn {
    pub lending_pool: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub collateral_deposited: u64,
}

#[event]
pub struct ReservesFunded {
    pub lending_pool: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub amount_funded: u64,
}
