use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Invalid Amount")]
    InvalidAmount,

    #[msg("Borrow amount exceeds collateral limit")]
    CollateralLimitExceeded,

    #[msg("Withdrawal would cause under-collateralization")]
    UnderCollateralized,

    #[msg("Withdrawal amount exceeds deposited collateral")]
    InsufficientCollateral,

    #[msg("Insufficient Reserves")]
    InsufficientReserves,

    #[msg("No debt to repay")]
    NoOutstandingDebt,

    #[msg("Repay amount exceeds outstanding debt")]
    RepayExceedsDebt,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("MathOverflow")]
    MathOverflow,

    #[msg("Zero division error")]
    DivisionByZero,

    #[msg("Collateral and borrow mints are the same")]
    SameTokenMints,

    #[msg("Invalid Config")]
    InvalidConfig,

    #[msg("Position does not belong to this lending pool")]
    InvalidLendingPoolAccount,

    #[msg("Position not owned by signer")]
    PositionNotOwnedBySigner,

    #[msg("Lender record not owned by signer")]
    LenderNotOwnedBySigner,
}
