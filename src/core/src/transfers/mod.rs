pub mod commission;
pub mod market;

pub use commission::*;
pub use market::*;
