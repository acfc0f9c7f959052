pub mod allocation;
pub use allocation::*;

pub mod card;
pub use card::*;

pub mod catalog;
pub use catalog::*;

pub mod deck;

pub mod frontier;
pub use frontier::*;

pub mod packed;
pub use packed::*;

pub mod subsets;
pub use subsets::*;
