//! Schema module - Configuration and seeding types for the automaton.

mod config;
mod seed;

pub use config::*;
pub use seed::*;
