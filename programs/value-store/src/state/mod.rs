pub mod store;

pub use store::*;

/// Current version of the program and all new accounts created
pub const PROGRAM_VERSION: u8 = 1;

pub const VALUE_STORE_SEED: &[u8] = b"value_store";
