//! Sparse extraction: grid cells with non-zero weight.

use crate::grid::PixelGrid;

/// One grid cell carried as a weighted sample candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedPoint {
    pub row: u32,
    pub col: u32,
    pub weight: u8,
}

/// Flattens the grid row-major and keeps only cells with `weight > 0`.
///
/// The enumeration order is row-major so position and value stay paired;
/// downstream sampling does not depend on the order itself.
pub fn extract_nonzero(grid: &PixelGrid) -> Vec<WeightedPoint> {
    let width = grid.width() as usize;
    let mut out = Vec::new();
    for (idx, &weight) in grid.as_slice().iter().enumerate() {
        if weight == 0 {
            continue;
        }
        out.push(WeightedPoint {
            row: (idx / width) as u32,
            col: (idx % width) as u32,
            weight,
        });
    }
    out
}
