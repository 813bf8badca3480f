pub mod lender;
pub mod lending_pool;
pub mod position;
pub mod scaler;

pub use lender::*;
pub use lending_pool::*;
pub use position::*;
pub use scaler::*;

/// Current version of the program and all new accounts created
pub const PROGRAM_VERSION: u8 = 1;

/// PDA seed prefixes
pub const LENDING_POOL_SEED: &[u8] = b"lending_pool";
pub const COLLATERAL_VAULT_SEED: &[u8] = b"collateral_vault";
pub const BORROW_VAULT_SEED: &[u8] = b"borrow_vault";
pub const POSITION_SEED: &[u8] = b"position";
pub const LENDER_SEED: &[u8] = b"lender";
