//! Predation rules - decide a cell's next state from one selected neighbor.
//!
//! Rules are pure: they see the snapshot values of the cell and its neighbor
//! and return an [`Outcome`]. Writing the outcome into the next generation is
//! the job of [`Generation`](super::Generation).

use crate::schema::{RuleConfig, RuleVariant};

use super::Cell;

/// Result of applying a rule to one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Next state of the updated cell.
    pub cell: Cell,
    /// New level for the neighbor after a successful predation.
    pub predator_level: Option<u32>,
}

impl Outcome {
    #[inline]
    fn keep(cell: Cell) -> Self {
        Self {
            cell,
            predator_level: None,
        }
    }

    #[inline]
    fn age(cell: Cell) -> Self {
        Self::keep(Cell {
            level: cell.level.saturating_sub(1),
            ..cell
        })
    }
}

/// Classic predation: successful predators grow stronger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassicRule {
    pub initial_level: u32,
}

impl ClassicRule {
    pub fn apply(&self, me: Cell, neighbor: Cell) -> Outcome {
        if neighbor.level == 0 {
            return Outcome::keep(me);
        }

        if me.is_empty() {
            return Outcome::keep(neighbor);
        }

        if neighbor.species.beats(me.species) {
            return Outcome {
                cell: Cell::new(neighbor.species, self.initial_level),
                predator_level: Some(neighbor.level.saturating_add(1)),
            };
        }

        Outcome::keep(me)
    }
}

/// Waves predation: level is an age clock and a kill resets both cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavesRule {
    pub initial_level: u32,
    pub edible_level: u32,
    /// Predators must be strictly younger (higher level) than their prey.
    pub young_banquet: bool,
}

impl WavesRule {
    pub fn apply(&self, me: Cell, neighbor: Cell) -> Outcome {
        if neighbor.level == 0 {
            return Outcome::keep(me);
        }

        // Too young to be eaten.
        if me.level > self.edible_level {
            return Outcome::age(me);
        }

        if me.is_empty() {
            return Outcome::keep(neighbor);
        }

        if neighbor.species.beats(me.species) && (!self.young_banquet || neighbor.level > me.level)
        {
            return Outcome {
                cell: Cell::new(neighbor.species, self.initial_level),
                predator_level: Some(self.initial_level),
            };
        }

        Outcome::age(me)
    }
}

/// Configured predation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredationRule {
    Classic(ClassicRule),
    Waves(WavesRule),
}

impl PredationRule {
    pub fn from_config(config: &RuleConfig) -> Self {
        match config.variant {
            RuleVariant::Classic => PredationRule::Classic(ClassicRule {
                initial_level: config.initial_level,
            }),
            RuleVariant::Waves => PredationRule::Waves(WavesRule {
                initial_level: config.initial_level,
                edible_level: config.edible_level,
                young_banquet: config.young_banquet,
            }),
        }
    }

    #[inline]
    pub fn apply(&self, me: Cell, neighbor: Cell) -> Outcome {
        match self {
            PredationRule::Classic(rule) => rule.apply(me, neighbor),
            PredationRule::Waves(rule) => rule.apply(me, neighbor),
        }
    }
}
