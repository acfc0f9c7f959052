pub mod cost;
pub use cost::*;

pub mod index;
pub use index::*;
