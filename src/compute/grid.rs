//! Grid state container - species and level per cell.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cell occupant. The three living species form a predation cycle:
/// Rock is eaten by Paper, Paper by Scissors, Scissors by Rock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    #[default]
    Empty,
    Rock,
    Paper,
    Scissors,
}

impl Species {
    /// The three living species, in cycle order.
    pub const LIVING: [Species; 3] = [Species::Rock, Species::Paper, Species::Scissors];

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Species::Empty
    }

    /// Species that eats this one, if any.
    #[inline]
    pub fn eaten_by(self) -> Option<Species> {
        match self {
            Species::Empty => None,
            Species::Rock => Some(Species::Paper),
            Species::Paper => Some(Species::Scissors),
            Species::Scissors => Some(Species::Rock),
        }
    }

    /// Whether `self` preys on `prey`.
    #[inline]
    pub fn beats(self, prey: Species) -> bool {
        prey.eaten_by() == Some(self)
    }

    /// Compact index used by the wasm bindings (0 = Empty).
    pub fn index(self) -> u8 {
        match self {
            Species::Empty => 0,
            Species::Rock => 1,
            Species::Paper => 2,
            Species::Scissors => 3,
        }
    }

    /// Inverse of [`Species::index`]. Unknown indices map to `None`.
    pub fn from_index(index: u8) -> Option<Species> {
        match index {
            0 => Some(Species::Empty),
            1 => Some(Species::Rock),
            2 => Some(Species::Paper),
            3 => Some(Species::Scissors),
            _ => None,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Empty => "empty",
            Species::Rock => "rock",
            Species::Paper => "paper",
            Species::Scissors => "scissors",
        };
        f.write_str(name)
    }
}

/// A single grid cell.
///
/// `level` counts down from the configured initial level; higher is younger.
/// An empty cell always has level 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub species: Species,
    pub level: u32,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        species: Species::Empty,
        level: 0,
    };

    /// Create a cell, forcing level 0 for `Species::Empty`.
    #[inline]
    pub fn new(species: Species, level: u32) -> Self {
        let level = if species.is_empty() { 0 } else { level };
        Self { species, level }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

/// Fixed-size 2D grid of cells stored row-major.
///
/// Only interior cells (`1 <= x < width - 1`, `1 <= y < height - 1`) are
/// updated by the automaton; the border is read-only neighbor context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Convert (x, y) coordinates to flat index.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the grid.
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, species: Species, level: u32) {
        let idx = self.idx(x, y);
        self.cells[idx] = Cell::new(species, level);
    }

    #[inline]
    pub(crate) fn cell_at(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    #[inline]
    pub(crate) fn cell_at_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether (x, y) is an updatable interior cell.
    #[inline]
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        x >= 1 && y >= 1 && x + 1 < self.width && y + 1 < self.height
    }

    /// Interior coordinates in row-major order.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let xs = 1..self.width.saturating_sub(1);
        (1..self.height.saturating_sub(1)).flat_map(move |y| xs.clone().map(move |x| (x, y)))
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Paint the interior part of a rectangle with one species.
    ///
    /// The rectangle is clipped so the border stays untouched.
    pub fn fill_rect(
        &mut self,
        x0: usize,
        y0: usize,
        w: usize,
        h: usize,
        species: Species,
        level: u32,
    ) {
        let x_end = x0.saturating_add(w).min(self.width.saturating_sub(1));
        let y_end = y0.saturating_add(h).min(self.height.saturating_sub(1));
        for y in y0.max(1)..y_end {
            for x in x0.max(1)..x_end {
                self.set(x, y, species, level);
            }
        }
    }

    /// Copy another grid's cells into this one, reusing the allocation.
    pub(crate) fn copy_from(&mut self, other: &Grid) {
        self.width = other.width;
        self.height = other.height;
        self.cells.clone_from(&other.cells);
    }

    /// Neighbor coordinates of (x, y) at offset (dx, dy).
    ///
    /// Only valid for interior cells, whose 3x3 neighborhood is in bounds.
    #[inline]
    pub fn neighbor(&self, x: usize, y: usize, dx: i32, dy: i32) -> (usize, usize) {
        debug_assert!(self.is_interior(x, y));
        (
            (x as i64 + dx as i64) as usize,
            (y as i64 + dy as i64) as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predation_cycle() {
        assert!(Species::Paper.beats(Species::Rock));
        assert!(Species::Scissors.beats(Species::Paper));
        assert!(Species::Rock.beats(Species::Scissors));

        assert!(!Species::Rock.beats(Species::Paper));
        assert!(!Species::Rock.beats(Species::Rock));
        assert!(!Species::Rock.beats(Species::Empty));
        assert!(!Species::Empty.beats(Species::Rock));
    }

    #[test]
    fn test_empty_cell_has_zero_level() {
        let mut grid = Grid::new(4, 4);
        grid.set(1, 1, Species::Empty, 17);
        assert_eq!(grid.get(1, 1), Cell::EMPTY);

        grid.set(2, 1, Species::Rock, 17);
        assert_eq!(grid.get(2, 1), Cell::new(Species::Rock, 17));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_bounds_panics() {
        let grid = Grid::new(3, 3);
        grid.get(3, 0);
    }

    #[test]
    fn test_interior_row_major() {
        let grid = Grid::new(4, 4);
        let interior: Vec<_> = grid.interior().collect();
        assert_eq!(interior, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);

        assert_eq!(Grid::new(2, 2).interior().count(), 0);
    }

    #[test]
    fn test_fill_rect_keeps_border_empty() {
        let mut grid = Grid::new(5, 5);
        grid.fill_rect(0, 0, 5, 5, Species::Paper, 9);

        for y in 0..5 {
            for x in 0..5 {
                let cell = grid.get(x, y);
                if grid.is_interior(x, y) {
                    assert_eq!(cell, Cell::new(Species::Paper, 9));
                } else {
                    assert!(cell.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_fill_rect_clips_huge_extents() {
        let mut grid = Grid::new(6, 6);
        grid.fill_rect(2, 2, usize::MAX, 3, Species::Rock, 5);
        assert_eq!(grid.get(4, 4), Cell::new(Species::Rock, 5));
        assert!(grid.get(1, 2).is_empty());
        assert!(grid.get(5, 2).is_empty());

        grid.fill_rect(usize::MAX, usize::MAX, usize::MAX, usize::MAX, Species::Paper, 5);
        assert!(grid.cells().iter().all(|c| c.species != Species::Paper));
    }

    #[test]
    fn test_species_index_roundtrip() {
        for species in [Species::Empty, Species::Rock, Species::Paper, Species::Scissors] {
            assert_eq!(Species::from_index(species.index()), Some(species));
        }
        assert_eq!(Species::from_index(4), None);
    }
}
