pub mod wage;

pub use wage::*;
