use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Only owner")]
    Unauthorized,

    #[msg("MathOverflow")]
    MathOverflow,
}
