//! Double-buffered generation pass.
//!
//! A [`Generation`] pairs a read-only snapshot of the grid with a separate
//! write buffer. Rules only ever read the snapshot, so no update observes
//! another update from the same pass.

use super::{Grid, Offset, PredationRule};

/// One in-flight update pass.
pub struct Generation<'a> {
    read: &'a Grid,
    write: Grid,
    /// Pending predator level per cell, merged into `write` on finish.
    predators: Vec<Option<u32>>,
}

impl<'a> Generation<'a> {
    /// Start a pass over `read`. `write` and `predators` are recycled buffers.
    pub fn begin(read: &'a Grid, mut write: Grid, mut predators: Vec<Option<u32>>) -> Self {
        write.copy_from(read);
        predators.clear();
        predators.resize(read.cells().len(), None);
        Self {
            read,
            write,
            predators,
        }
    }

    /// The grid as it was when the pass began.
    pub fn snapshot(&self) -> &Grid {
        self.read
    }

    /// Update interior cell (x, y) against its neighbor at `offset`.
    pub fn update(&mut self, x: usize, y: usize, offset: Offset, rule: &PredationRule) {
        debug_assert!(self.read.is_interior(x, y));
        let (nx, ny) = self.read.neighbor(x, y, offset.dx, offset.dy);
        let idx = self.read.idx(x, y);
        let n_idx = self.read.idx(nx, ny);

        let outcome = rule.apply(self.read.cell_at(idx), self.read.cell_at(n_idx));
        *self.write.cell_at_mut(idx) = outcome.cell;
        if let Some(level) = outcome.predator_level {
            self.predators[n_idx] = Some(level);
        }
    }

    /// Merge predator levels and hand back the next grid plus the spare buffer.
    ///
    /// A predator's level only sticks if the predator kept its species in
    /// this pass; a predator that was itself eaten takes its new state.
    /// Every pending level for a cell is identical within a pass, so the
    /// result does not depend on the order cells were updated in.
    pub fn finish(mut self) -> (Grid, Vec<Option<u32>>) {
        for (idx, pending) in self.predators.iter().enumerate() {
            let Some(level) = *pending else { continue };
            let before = self.read.cell_at(idx);
            let after = self.write.cell_at_mut(idx);
            if after.species == before.species {
                after.level = level;
            }
        }
        (self.write, self.predators)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{Cell, ClassicRule, Species, WavesRule};
    use proptest::prelude::*;

    fn classic() -> PredationRule {
        PredationRule::Classic(ClassicRule { initial_level: 30 })
    }

    fn run(grid: &Grid, rule: &PredationRule, updates: &[(usize, usize, Offset)]) -> Grid {
        let mut generation = Generation::begin(grid, Grid::default(), Vec::new());
        for &(x, y, offset) in updates {
            generation.update(x, y, offset, rule);
        }
        generation.finish().0
    }

    #[test]
    fn test_untouched_cells_keep_state() {
        let mut grid = Grid::new(4, 4);
        grid.set(0, 0, Species::Rock, 0);
        grid.set(2, 2, Species::Paper, 6);

        let next = run(&grid, &classic(), &[]);
        assert_eq!(next, grid);
    }

    #[test]
    fn test_writes_not_visible_within_pass() {
        // Row of three interior cells: Scissors, Empty, Empty. Each cell looks
        // left. Only the first empty cell can see the Scissors in the snapshot.
        let mut grid = Grid::new(5, 3);
        grid.set(1, 1, Species::Scissors, 10);

        let left = Offset::new(-1, 0);
        let rule = classic();
        let mut generation = Generation::begin(&grid, Grid::default(), Vec::new());
        for x in 1..=3 {
            generation.update(x, 1, left, &rule);
        }
        assert_eq!(generation.snapshot(), &grid);
        let (next, _) = generation.finish();

        assert_eq!(next.get(2, 1), Cell::new(Species::Scissors, 10));
        assert_eq!(next.get(3, 1), Cell::EMPTY);
    }

    #[test]
    fn test_eaten_predator_keeps_new_state() {
        // (1,1) Rock eats (2,1) Scissors, while (1,1) is itself eaten by a Paper.
        let mut grid = Grid::new(5, 4);
        grid.set(1, 1, Species::Rock, 5);
        grid.set(2, 1, Species::Scissors, 5);
        grid.set(1, 2, Species::Paper, 7);

        let next = run(
            &grid,
            &classic(),
            &[(2, 1, Offset::new(-1, 0)), (1, 1, Offset::new(0, 1))],
        );

        assert_eq!(next.get(2, 1), Cell::new(Species::Rock, 30));
        assert_eq!(next.get(1, 1), Cell::new(Species::Paper, 30));
        assert_eq!(next.get(1, 2), Cell::new(Species::Paper, 8));
    }

    fn arbitrary_grid() -> impl Strategy<Value = Grid> {
        (3usize..9, 3usize..9).prop_flat_map(|(w, h)| {
            proptest::collection::vec((0u8..4, 0u32..12), w * h).prop_map(move |cells| {
                let mut grid = Grid::new(w, h);
                for (i, (s, level)) in cells.into_iter().enumerate() {
                    let (x, y) = (i % w, i / w);
                    if grid.is_interior(x, y) {
                        let species = Species::from_index(s).unwrap_or_default();
                        grid.set(x, y, species, level);
                    }
                }
                grid
            })
        })
    }

    fn arbitrary_rule() -> impl Strategy<Value = PredationRule> {
        prop_oneof![
            Just(classic()),
            (0u32..=12, any::<bool>()).prop_map(|(edible_level, young_banquet)| {
                PredationRule::Waves(WavesRule {
                    initial_level: 12,
                    edible_level,
                    young_banquet,
                })
            }),
        ]
    }

    proptest! {
        #[test]
        fn reversed_order_gives_identical_grid(
            grid in arbitrary_grid(),
            rule in arbitrary_rule(),
            offsets in proptest::collection::vec((-1i32..=1, -1i32..=1), 64),
        ) {
            let updates: Vec<_> = grid
                .interior()
                .zip(offsets.iter().cycle())
                .map(|((x, y), &(dx, dy))| (x, y, Offset::new(dx, dy)))
                .collect();
            let mut reversed = updates.clone();
            reversed.reverse();

            prop_assert_eq!(run(&grid, &rule, &updates), run(&grid, &rule, &reversed));
        }

        #[test]
        fn empty_cells_have_zero_level(
            grid in arbitrary_grid(),
            rule in arbitrary_rule(),
            offsets in proptest::collection::vec((-1i32..=1, -1i32..=1), 64),
        ) {
            let updates: Vec<_> = grid
                .interior()
                .zip(offsets.iter().cycle())
                .map(|((x, y), &(dx, dy))| (x, y, Offset::new(dx, dy)))
                .collect();
            let next = run(&grid, &rule, &updates);
            for cell in next.cells() {
                if cell.is_empty() {
                    prop_assert_eq!(cell.level, 0);
                }
            }
        }
    }
}
