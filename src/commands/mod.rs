//! Command implementations

pub mod replay;
pub mod simple;

pub use replay::{ReplayError, enter_guess, replay};
pub use simple::run_simple;
