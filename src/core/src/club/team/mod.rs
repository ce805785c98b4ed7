pub mod team;
pub mod training;

pub use team::*;
pub use training::*;
