pub mod result;
pub mod training;

pub use result::*;
pub use training::*;
