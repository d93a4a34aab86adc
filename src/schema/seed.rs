//! Seed types for initializing the automaton grid.
//!
//! Seeding only ever paints interior cells; the border stays empty.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::compute::{Grid, Species};

/// Complete seed specification for grid initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Random {
                density: 0.5,
                seed: 42,
            },
        }
    }
}

/// Predefined patterns for initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Every cell empty.
    Empty,
    /// Each interior cell is occupied with probability `density` by a
    /// uniformly chosen species.
    Random {
        /// Occupied fraction (0.0-1.0).
        density: f32,
        /// Random seed.
        seed: u64,
    },
    /// Three vertical bands, one per species.
    Bands,
    /// Painted rectangles, applied in order.
    Rects {
        /// List of region specifications.
        regions: Vec<RegionSpec>,
    },
    /// Explicit cells (sparse representation). Out-of-interior entries are skipped.
    Custom {
        /// List of (x, y, species) entries.
        cells: Vec<(usize, usize, Species)>,
    },
}

/// Rectangle in a `Rects` pattern, as fractions of grid size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSpec {
    /// Top-left corner (0.0-1.0).
    pub origin: (f32, f32),
    /// Width and height (0.0-1.0).
    pub size: (f32, f32),
    pub species: Species,
}

impl Seed {
    /// Clear `grid` and paint this seed into it. Occupied cells start at
    /// `initial_level`.
    pub fn apply(&self, grid: &mut Grid, initial_level: u32) {
        grid.clear();
        let width = grid.width();
        let height = grid.height();

        match &self.pattern {
            Pattern::Empty => {}
            Pattern::Random { density, seed } => {
                let mut rng = StdRng::seed_from_u64(*seed);
                let density = density.clamp(0.0, 1.0) as f64;
                let cells: Vec<_> = grid.interior().collect();
                for (x, y) in cells {
                    if rng.gen_bool(density) {
                        let species = Species::LIVING[rng.gen_range(0..3)];
                        grid.set(x, y, species, initial_level);
                    }
                }
            }
            Pattern::Bands => {
                let band = width.div_ceil(3);
                for (i, species) in Species::LIVING.into_iter().enumerate() {
                    grid.fill_rect(i * band, 0, band, height, species, initial_level);
                }
            }
            Pattern::Rects { regions } => {
                for region in regions {
                    let x0 = (region.origin.0 * width as f32).max(0.0) as usize;
                    let y0 = (region.origin.1 * height as f32).max(0.0) as usize;
                    let w = (region.size.0 * width as f32).max(0.0).round() as usize;
                    let h = (region.size.1 * height as f32).max(0.0).round() as usize;
                    grid.fill_rect(x0, y0, w, h, region.species, initial_level);
                }
            }
            Pattern::Custom { cells } => {
                for &(x, y, species) in cells {
                    if grid.is_interior(x, y) {
                        grid.set(x, y, species, initial_level);
                    }
                }
            }
        }

        log::debug!(
            "seeded {}x{} grid with {}",
            width,
            height,
            self.pattern.name()
        );
    }
}

impl Pattern {
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Empty => "empty",
            Pattern::Random { .. } => "random",
            Pattern::Bands => "bands",
            Pattern::Rects { .. } => "rects",
            Pattern::Custom { .. } => "custom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::Cell;

    fn border_is_empty(grid: &Grid) -> bool {
        (0..grid.height()).all(|y| {
            (0..grid.width()).all(|x| grid.is_interior(x, y) || grid.get(x, y).is_empty())
        })
    }

    #[test]
    fn test_random_is_deterministic() {
        let seed = Seed::default();
        let mut a = Grid::new(20, 20);
        let mut b = Grid::new(20, 20);
        seed.apply(&mut a, 30);
        seed.apply(&mut b, 30);

        assert_eq!(a, b);
        assert!(border_is_empty(&a));
        let occupied = a.cells().iter().filter(|c| !c.is_empty()).count();
        assert!(occupied > 50 && occupied < 274, "occupied = {occupied}");
    }

    #[test]
    fn test_bands_cover_all_species() {
        let mut grid = Grid::new(12, 6);
        Seed {
            pattern: Pattern::Bands,
        }
        .apply(&mut grid, 7);

        assert_eq!(grid.get(1, 2), Cell::new(Species::Rock, 7));
        assert_eq!(grid.get(5, 2), Cell::new(Species::Paper, 7));
        assert_eq!(grid.get(10, 2), Cell::new(Species::Scissors, 7));
        assert!(border_is_empty(&grid));
    }

    #[test]
    fn test_rects_and_custom_stay_interior() {
        let mut grid = Grid::new(10, 10);
        Seed {
            pattern: Pattern::Rects {
                regions: vec![RegionSpec {
                    origin: (0.0, 0.0),
                    size: (1.0, 0.5),
                    species: Species::Paper,
                }],
            },
        }
        .apply(&mut grid, 5);
        assert_eq!(grid.get(8, 4), Cell::new(Species::Paper, 5));
        assert!(grid.get(8, 5).is_empty());
        assert!(border_is_empty(&grid));

        Seed {
            pattern: Pattern::Custom {
                cells: vec![(0, 0, Species::Rock), (3, 3, Species::Scissors)],
            },
        }
        .apply(&mut grid, 5);
        assert!(grid.get(0, 0).is_empty());
        assert!(grid.get(8, 4).is_empty());
        assert_eq!(grid.get(3, 3), Cell::new(Species::Scissors, 5));
    }

    #[test]
    fn test_rects_outside_grid_are_clipped() {
        let mut grid = Grid::new(8, 8);
        Seed {
            pattern: Pattern::Rects {
                regions: vec![
                    RegionSpec {
                        origin: (1e30, 0.0),
                        size: (1.0, 1.0),
                        species: Species::Rock,
                    },
                    RegionSpec {
                        origin: (0.5, 0.5),
                        size: (1e30, 1e30),
                        species: Species::Paper,
                    },
                ],
            },
        }
        .apply(&mut grid, 5);

        assert!(grid.cells().iter().all(|c| c.species != Species::Rock));
        assert_eq!(grid.get(6, 6), Cell::new(Species::Paper, 5));
        assert!(grid.get(3, 6).is_empty());
        assert!(border_is_empty(&grid));
    }

    #[test]
    fn test_seed_json_is_tagged() {
        let json = r#"{"pattern": {"type": "Custom", "cells": [[2, 3, "paper"]]}}"#;
        let seed: Seed = serde_json::from_str(json).unwrap();
        assert_eq!(
            seed.pattern,
            Pattern::Custom {
                cells: vec![(2, 3, Species::Paper)]
            }
        );
    }
}
