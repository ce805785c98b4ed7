pub mod calculators;
pub mod player;
pub mod skills;
pub mod training;

pub use calculators::*;
pub use player::*;
pub use skills::*;
pub use training::*;
