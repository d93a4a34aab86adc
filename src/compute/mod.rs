//! Compute module - Grid state, neighbor selection, predation and the
//! generation driver.

mod automaton;
mod generation;
mod grid;
mod predation;
mod selector;

pub use automaton::*;
pub use generation::*;
pub use grid::*;
pub use predation::*;
pub use selector::*;
