pub mod schedule;
pub mod training;

pub use schedule::*;
pub use training::*;
