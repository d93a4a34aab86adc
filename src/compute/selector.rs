//! Neighbor selection strategies.
//!
//! Each selector is called once per processed cell, in the order the
//! automaton visits cells. Cursors live in the selector instance and keep
//! advancing across generations.

use rand::prelude::*;

use crate::schema::NeighborMode;

/// Offset from a cell to one of its 3x3 neighbors, each component in {-1, 0, 1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const SELF: Offset = Offset { dx: 0, dy: 0 };

    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Clockwise ring of the eight non-zero offsets.
pub const CLOCKWISE_RING: [Offset; 8] = [
    Offset::new(1, 1),
    Offset::new(1, 0),
    Offset::new(1, -1),
    Offset::new(0, -1),
    Offset::new(-1, -1),
    Offset::new(-1, 0),
    Offset::new(-1, 1),
    Offset::new(0, 1),
];

/// Produces the neighbor offset for the next processed cell.
pub trait NeighborSelector {
    fn next_offset(&mut self) -> Offset;
}

fn random_offset(rng: &mut StdRng) -> Offset {
    Offset::new(rng.gen_range(-1..=1), rng.gen_range(-1..=1))
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Fresh uniformly random offset from the full 3x3 neighborhood each call.
pub struct UniformSelector {
    rng: StdRng,
}

impl UniformSelector {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: make_rng(seed),
        }
    }
}

impl NeighborSelector for UniformSelector {
    #[inline]
    fn next_offset(&mut self) -> Offset {
        random_offset(&mut self.rng)
    }
}

/// Walks a fixed power-of-two ring of offsets.
#[derive(Debug, Clone)]
pub struct CycleSelector {
    ring: Vec<Offset>,
    mask: usize,
    cursor: usize,
}

impl CycleSelector {
    /// Build from a ring whose length is a non-zero power of two.
    ///
    /// # Panics
    /// Panics if the ring length is not a power of two.
    pub fn from_ring(ring: Vec<Offset>) -> Self {
        assert!(
            ring.len().is_power_of_two(),
            "selector ring length {} is not a power of two",
            ring.len()
        );
        let mask = ring.len() - 1;
        Self {
            ring,
            mask,
            cursor: 0,
        }
    }

    /// The clockwise ring of the eight non-zero offsets.
    pub fn clockwise() -> Self {
        Self::from_ring(CLOCKWISE_RING.to_vec())
    }

    /// A ring of `length` independently random offsets in {-1, 0, 1}^2.
    pub fn precomputed(length: usize, seed: Option<u64>) -> Self {
        let mut rng = make_rng(seed);
        let ring = (0..length).map(|_| random_offset(&mut rng)).collect();
        Self::from_ring(ring)
    }

    pub fn ring(&self) -> &[Offset] {
        &self.ring
    }

    /// Position of the next entry to be returned.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl NeighborSelector for CycleSelector {
    #[inline]
    fn next_offset(&mut self) -> Offset {
        let offset = self.ring[self.cursor];
        self.cursor = (self.cursor + 1) & self.mask;
        offset
    }
}

/// Keeps the uniform and precomputed streams distinct under one seed.
const PRECOMPUTED_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// One selector per mode, each with its own cursor.
///
/// Switching the active mode leaves the other selectors untouched, so
/// switching back resumes where that selector left off.
pub struct SelectorBank {
    mode: NeighborMode,
    uniform: UniformSelector,
    fixed: CycleSelector,
    precomputed: CycleSelector,
}

impl SelectorBank {
    pub fn new(mode: NeighborMode, cycle_length: usize, seed: Option<u64>) -> Self {
        let precomputed_seed = seed.map(|s| s.wrapping_add(PRECOMPUTED_SEED_SALT));
        Self {
            mode,
            uniform: UniformSelector::new(seed),
            fixed: CycleSelector::clockwise(),
            precomputed: CycleSelector::precomputed(cycle_length, precomputed_seed),
        }
    }

    pub fn mode(&self) -> NeighborMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: NeighborMode) {
        self.mode = mode;
    }

    /// The selector for the active mode.
    pub fn active(&mut self) -> &mut dyn NeighborSelector {
        match self.mode {
            NeighborMode::Uniform => &mut self.uniform,
            NeighborMode::FixedCycle => &mut self.fixed,
            NeighborMode::PrecomputedCycle => &mut self.precomputed,
        }
    }
}
