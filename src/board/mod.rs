pub mod board;
pub use board::*;

pub mod layout;
pub use layout::*;

pub mod vertex;
pub use vertex::*;

#[cfg(test)]
pub mod fixtures;
