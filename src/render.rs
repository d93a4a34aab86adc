//! Pixel interface - species colors and classification of RGBA buffers.
//!
//! The automaton only stores discrete species; this module maps them to and
//! from the RGBA surfaces used by front ends.

use crate::compute::{Grid, Species};

/// Channel value below which a pixel counts as background.
pub const DARK_THRESHOLD: u8 = 64;

/// Alpha value below which a pixel counts as background.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Display color of a species as RGBA.
pub fn species_color(species: Species) -> [u8; 4] {
    match species {
        Species::Empty => [0, 0, 0, 255],
        Species::Rock => [255, 0, 0, 255],
        Species::Paper => [0, 255, 0, 255],
        Species::Scissors => [0, 0, 255, 255],
    }
}

/// Classify one RGBA pixel by its dominant color channel.
///
/// Anti-aliased strokes blend toward the background, so a pixel is kept as
/// long as one channel is strictly the largest and bright enough. Ties and
/// dark or transparent pixels are empty.
pub fn classify_pixel([r, g, b, a]: [u8; 4]) -> Species {
    if a < ALPHA_THRESHOLD {
        return Species::Empty;
    }
    let max = r.max(g).max(b);
    if max < DARK_THRESHOLD {
        return Species::Empty;
    }
    match (r == max, g == max, b == max) {
        (true, false, false) => Species::Rock,
        (false, true, false) => Species::Paper,
        (false, false, true) => Species::Scissors,
        _ => Species::Empty,
    }
}

/// Pixel buffer size errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("RGBA buffer holds {actual} bytes, grid needs {expected}")]
    BufferSize { expected: usize, actual: usize },
}

fn check_len(grid: &Grid, len: usize) -> Result<(), RenderError> {
    let expected = grid.width() * grid.height() * 4;
    if len != expected {
        return Err(RenderError::BufferSize {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Render the grid into a row-major RGBA buffer.
pub fn write_rgba(grid: &Grid, buf: &mut [u8]) -> Result<(), RenderError> {
    check_len(grid, buf.len())?;
    for (px, cell) in buf.chunks_exact_mut(4).zip(grid.cells()) {
        px.copy_from_slice(&species_color(cell.species));
    }
    Ok(())
}

/// Allocate and render an RGBA buffer for the grid.
pub fn to_rgba(grid: &Grid) -> Vec<u8> {
    grid.cells()
        .iter()
        .flat_map(|cell| species_color(cell.species))
        .collect()
}

/// Replace the grid interior with species classified from an RGBA buffer.
///
/// Border pixels are ignored so the border stays empty.
pub fn seed_from_rgba(
    grid: &mut Grid,
    pixels: &[u8],
    initial_level: u32,
) -> Result<(), RenderError> {
    check_len(grid, pixels.len())?;
    let width = grid.width();
    let cells: Vec<_> = grid.interior().collect();
    for (x, y) in cells {
        let i = (y * width + x) * 4;
        let species = classify_pixel([pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]);
        grid.set(x, y, species, initial_level);
    }
    Ok(())
}
