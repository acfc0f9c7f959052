pub mod config;
pub use config::*;

pub mod memo;
pub use memo::*;

pub mod solver;
pub use solver::*;

pub mod state;
pub use state::*;

pub mod step;
pub use step::*;

#[cfg(test)]
mod tests;
