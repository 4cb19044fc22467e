//! Hexagonal binning of the plot frame.
//!
//! Lattice construction follows the matplotlib hexbin scheme: `gridsize`
//! cells across the horizontal extent, two rectangular lattices of candidate
//! centers offset by half a cell, and each point assigned to the nearest
//! candidate under the anisotropic distance `(dx/sx)^2 + 3*(dy/sy)^2`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::frame::PlotFrame;

/// One hexagonal bin with its aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct HexBin {
    /// Bin center in data coordinates.
    pub cx: f64,
    pub cy: f64,
    /// Number of sampled points that fell into the bin.
    pub count: u32,
    /// Sum of the `n` weights of those points.
    pub weight: u64,
}

/// Binning result plus the cell extents needed to draw the hexagons.
#[derive(Debug, Clone, Serialize)]
pub struct HexBinning {
    pub bins: Vec<HexBin>,
    /// Horizontal cell extent; hexagons are `sx` wide.
    pub sx: f64,
    /// Vertical lattice spacing; hexagons are `2*sy/3` tall.
    pub sy: f64,
}

/// JSON summary written by the CLI's `--bins` action.
#[derive(Debug, Serialize)]
pub struct BinReport {
    pub points: usize,
    pub gridsize: u32,
    pub sx: f64,
    pub sy: f64,
    pub bins: Vec<HexBin>,
}

impl BinReport {
    pub fn new(frame: &PlotFrame, gridsize: u32, binning: HexBinning) -> Self {
        Self {
            points: frame.len(),
            gridsize,
            sx: binning.sx,
            sy: binning.sy,
            bins: binning.bins,
        }
    }
}

/// Aggregates the frame into hexagonal bins. Only occupied bins are emitted,
/// in deterministic lattice order. An empty frame yields no bins.
pub fn bin_frame(frame: &PlotFrame, gridsize: u32) -> HexBinning {
    if frame.is_empty() {
        return HexBinning {
            bins: Vec::new(),
            sx: 1.0,
            sy: 1.0,
        };
    }

    let (mut x_lo, mut x_hi) = int_bounds(&frame.x);
    let (mut y_lo, mut y_hi) = int_bounds(&frame.y);
    // A degenerate extent (single column or row of points) still needs a
    // non-zero cell size.
    if x_hi <= x_lo {
        x_lo -= 0.5;
        x_hi += 0.5;
    }
    if y_hi <= y_lo {
        y_lo -= 0.5;
        y_hi += 0.5;
    }

    let nx = gridsize.max(1) as f64;
    let ny = ((nx / 3.0_f64.sqrt()).floor()).max(1.0);

    let sx = (x_hi - x_lo) / nx;
    let sy = (y_hi - y_lo) / ny;

    // (lattice, ix, iy) -> (count, weight sum)
    let mut cells: BTreeMap<(u8, i64, i64), (u32, u64)> = BTreeMap::new();
    for i in 0..frame.len() {
        let px = (frame.x[i] as f64 - x_lo) / sx;
        let py = (frame.y[i] as f64 - y_lo) / sy;
        let ix1 = px.round();
        let iy1 = py.round();
        let ix2 = px.floor();
        let iy2 = py.floor();
        let d1 = (px - ix1).powi(2) + 3.0 * (py - iy1).powi(2);
        let d2 = (px - ix2 - 0.5).powi(2) + 3.0 * (py - iy2 - 0.5).powi(2);
        let key = if d1 <= d2 {
            (0u8, ix1 as i64, iy1 as i64)
        } else {
            (1u8, ix2 as i64, iy2 as i64)
        };
        let cell = cells.entry(key).or_insert((0, 0));
        cell.0 += 1;
        cell.1 += frame.n[i] as u64;
    }

    let bins = cells
        .into_iter()
        .map(|((lattice, ix, iy), (count, weight))| {
            let offset = if lattice == 0 { 0.0 } else { 0.5 };
            HexBin {
                cx: x_lo + (ix as f64 + offset) * sx,
                cy: y_lo + (iy as f64 + offset) * sy,
                count,
                weight,
            }
        })
        .collect();

    HexBinning { bins, sx, sy }
}

/// Hexagon outline for a bin center: `sx` wide, `2*sy/3` tall, matching the
/// matplotlib cell proportions.
pub fn hex_corners(cx: f64, cy: f64, sx: f64, sy: f64) -> [(f64, f64); 6] {
    let hw = sx / 2.0;
    [
        (cx, cy - sy / 3.0),
        (cx + hw, cy - sy / 6.0),
        (cx + hw, cy + sy / 6.0),
        (cx, cy + sy / 3.0),
        (cx - hw, cy + sy / 6.0),
        (cx - hw, cy - sy / 6.0),
    ]
}

fn int_bounds(values: &[i64]) -> (f64, f64) {
    let lo = values.iter().copied().min().unwrap_or(0);
    let hi = values.iter().copied().max().unwrap_or(0);
    (lo as f64, hi as f64)
}
