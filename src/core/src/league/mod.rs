pub mod lottery;
pub mod schedule;

pub use lottery::*;
pub use schedule::*;
