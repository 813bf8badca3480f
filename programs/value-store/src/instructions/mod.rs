pub mod initialize;
pub mod set_value;
pub mod get_value;

pub use initialize::*;
pub use set_value::*;
pub use get_value::*;
