//! Generation driver - advances the automaton one pass per tick.

use crate::schema::{AutomatonConfig, ConfigError, NeighborMode, RuleConfig, Seed};

use super::{Generation, Grid, PredationRule, SelectorBank, Species};

/// Driver state. A pass is never interrupted, so `Running` is only observable
/// if a pass panicked, after which the automaton must not be ticked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

/// Rock-paper-scissors automaton: grid, selectors and configured rule.
pub struct Automaton {
    config: AutomatonConfig,
    rule: PredationRule,
    selectors: SelectorBank,
    grid: Grid,
    /// Recycled write buffer for the next pass.
    spare: Grid,
    /// Recycled predator-level buffer for the next pass.
    pending: Vec<Option<u32>>,
    phase: Phase,
    generation: u64,
}

impl Automaton {
    /// Create an automaton with an empty grid.
    pub fn new(config: AutomatonConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let selectors =
            SelectorBank::new(config.neighbor_mode, config.cycle_length, config.random_seed);
        let rule = PredationRule::from_config(&config.rule);
        let grid = Grid::new(config.width, config.height);

        log::debug!(
            "created {}x{} automaton: {} rule, {} neighbors",
            config.width,
            config.height,
            config.rule.variant,
            config.neighbor_mode
        );

        Ok(Self {
            config,
            rule,
            selectors,
            spare: Grid::new(grid.width(), grid.height()),
            pending: Vec::with_capacity(grid.cells().len()),
            grid,
            phase: Phase::Idle,
            generation: 0,
        })
    }

    /// Create an automaton and paint `seed` into its grid.
    pub fn from_seed(config: AutomatonConfig, seed: &Seed) -> Result<Self, ConfigError> {
        let mut automaton = Self::new(config)?;
        automaton.reseed(seed);
        Ok(automaton)
    }

    /// Advance one generation.
    ///
    /// # Panics
    /// Panics if a previous pass did not complete.
    pub fn tick(&mut self) {
        assert_eq!(
            self.phase,
            Phase::Idle,
            "generation pass started while another is running"
        );
        self.phase = Phase::Running;

        let write = std::mem::take(&mut self.spare);
        let pending = std::mem::take(&mut self.pending);
        let mut generation = Generation::begin(&self.grid, write, pending);
        let selector = self.selectors.active();

        for (x, y) in self.grid.interior() {
            let offset = selector.next_offset();
            generation.update(x, y, offset, &self.rule);
        }

        let (next, pending) = generation.finish();
        self.spare = std::mem::replace(&mut self.grid, next);
        self.pending = pending;
        self.generation += 1;
        self.phase = Phase::Idle;

        log::trace!("generation {} complete", self.generation);
    }

    /// Run the automaton for the specified number of generations.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.tick();
        }
    }

    /// Replace the grid contents with `seed`.
    pub fn reseed(&mut self, seed: &Seed) {
        let initial_level = self.config.rule.initial_level;
        seed.apply(self.grid_mut(), initial_level);
    }

    /// Replace the rule parameters. Invalid parameters are rejected and the
    /// previous rule stays in effect.
    pub fn configure(&mut self, rule: RuleConfig) -> Result<(), ConfigError> {
        if let Err(e) = rule.validate() {
            log::warn!("rejected rule configuration: {e}");
            return Err(e);
        }
        log::debug!(
            "rule set to {} (initial {}, edible {}, young banquet {})",
            rule.variant,
            rule.initial_level,
            rule.edible_level,
            rule.young_banquet
        );
        self.rule = PredationRule::from_config(&rule);
        self.config.rule = rule;
        Ok(())
    }

    /// Switch neighbor selection. Each mode keeps its own cursor.
    pub fn set_neighbor_mode(&mut self, mode: NeighborMode) {
        log::debug!("neighbor mode set to {mode}");
        self.selectors.set_mode(mode);
        self.config.neighbor_mode = mode;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for seeding and painting.
    ///
    /// # Panics
    /// Panics while a pass is running.
    pub fn grid_mut(&mut self) -> &mut Grid {
        assert_eq!(
            self.phase,
            Phase::Idle,
            "grid modified while a generation pass is running"
        );
        &mut self.grid
    }

    pub fn config(&self) -> &AutomatonConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of completed generations.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Population statistics for monitoring.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridStats {
    pub empty: usize,
    pub rock: usize,
    pub paper: usize,
    pub scissors: usize,
    /// Mean level over occupied cells (0 when there are none).
    pub mean_level: f32,
    pub max_level: u32,
}

impl GridStats {
    /// Compute statistics from a grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut stats = Self {
            empty: 0,
            rock: 0,
            paper: 0,
            scissors: 0,
            mean_level: 0.0,
            max_level: 0,
        };
        let mut level_sum = 0u64;

        for cell in grid.cells() {
            match cell.species {
                Species::Empty => stats.empty += 1,
                Species::Rock => stats.rock += 1,
                Species::Paper => stats.paper += 1,
                Species::Scissors => stats.scissors += 1,
            }
            level_sum += cell.level as u64;
            stats.max_level = stats.max_level.max(cell.level);
        }

        let occupied = stats.occupied();
        if occupied > 0 {
            stats.mean_level = level_sum as f32 / occupied as f32;
        }
        stats
    }

    pub fn occupied(&self) -> usize {
        self.rock + self.paper + self.scissors
    }
}
