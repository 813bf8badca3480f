/// Scale for percentages (e.g., 100% = 100)
pub const PERCENT_SCALER: u64 = 100;

/// Share of deposited collateral that may be borrowed against, in percent
pub const COLLATERAL_FACTOR_PERCENT: u8 = 75;
