//! Command implementations

mod engines;
mod resolve;

pub use engines::run_engines;
pub use resolve::run_resolve;
