pub mod token;
pub mod math;

pub use token::*;
pub use math::*;
