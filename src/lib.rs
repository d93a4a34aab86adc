//! Rock-paper-scissors predation cellular automaton.
//!
//! Every interior cell of a 2D grid picks one neighbor per generation and,
//! depending on the configured rule, is colonized by it, eaten by it, or
//! simply ages. Rock is eaten by Paper, Paper by Scissors and Scissors by
//! Rock.
//!
//! # Architecture
//!
//! - `schema`: Configuration types and seeding patterns
//! - `compute`: Grid, neighbor selectors, predation rules and the
//!   double-buffered generation driver
//! - `render`: Conversion between grids and RGBA pixel buffers
//!
//! # Example
//!
//! ```rust,no_run
//! use rps_automaton::{
//!     compute::{Automaton, GridStats},
//!     schema::{AutomatonConfig, Pattern, Seed},
//! };
//!
//! let config = AutomatonConfig::default();
//! let seed = Seed {
//!     pattern: Pattern::Random {
//!         density: 0.5,
//!         seed: 7,
//!     },
//! };
//!
//! let mut automaton = Automaton::from_seed(config, &seed).expect("valid config");
//! automaton.run(100);
//!
//! let stats = GridStats::from_grid(automaton.grid());
//! println!("rock={} paper={} scissors={}", stats.rock, stats.paper, stats.scissors);
//! ```

pub mod compute;
pub mod render;
pub mod schema;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use compute::{Automaton, Cell, Grid, GridStats, Species};
pub use schema::{AutomatonConfig, NeighborMode, Pattern, RuleConfig, RuleVariant, Seed};
