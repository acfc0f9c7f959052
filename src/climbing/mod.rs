pub mod climber;
pub use climber::*;

pub mod mover;
pub use mover::*;

pub mod step;
pub use step::*;
