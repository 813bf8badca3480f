pub mod init_lending_pool;
pub mod deposit_collateral;
pub mod borrow;
pub mod repay;
pub mod withdraw_collateral;
pub mod fund_reserves;
pub mod get_position_limits;

pub use init_lending_pool::*;
pub use deposit_collateral::*;
pub use borrow::*;
pub use repay::*;
pub use withdraw_collateral::*;
pub use fund_reserves::*;
pub use get_position_limits::*;
