//! Plot frame assembly: the `(x, y, n)` columns handed to the renderer.

use serde::Serialize;

use crate::colormap::Colormap;
use crate::grid::PixelGrid;
use crate::points;
use crate::sample;

const SAMPLE_FRACTION: f64 = 0.10;
const GRIDSIZE: u32 = 24;
const PLOT_WIDTH: u32 = 800;
const PLOT_HEIGHT: u32 = 600;

/// Tunable parameters for the sampling and rendering pipeline.
#[derive(Debug, Clone)]
pub struct HexbinConfig {
    /// Fraction of non-zero pixels retained in the sample.
    pub sample_fraction: f64,
    /// Hexagons across the plot's horizontal extent.
    pub gridsize: u32,
    /// Color scale for bin shading.
    pub colormap: Colormap,
    /// RNG seed; `None` draws a fresh seed from entropy.
    pub seed: Option<u64>,
    pub plot_width: u32,
    pub plot_height: u32,
}

impl Default for HexbinConfig {
    fn default() -> Self {
        Self {
            sample_fraction: SAMPLE_FRACTION,
            gridsize: GRIDSIZE,
            colormap: Colormap::Greys,
            seed: None,
            plot_width: PLOT_WIDTH,
            plot_height: PLOT_HEIGHT,
        }
    }
}

/// Three parallel columns describing the sampled points.
///
/// `x` is the source column, `y` the negated source row (image rows grow
/// downward, plot y grows upward), `n` the darkness weight. The columns stay
/// integral so no precision is lost before binning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlotFrame {
    pub x: Vec<i64>,
    pub y: Vec<i64>,
    pub n: Vec<u8>,
}

impl PlotFrame {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Runs the pure half of the pipeline: invert, extract, sample, remap.
///
/// Rendering is kept separate so this transform stays independently testable.
/// An all-white grid (no dark pixels) produces an empty frame, which the
/// renderer must tolerate.
pub fn build_plot_frame(grid: &PixelGrid, config: &HexbinConfig) -> PlotFrame {
    let darkness = grid.inverted();
    let cloud = points::extract_nonzero(&darkness);

    let mut rng = sample::rng_for_seed(config.seed);
    let picked = sample::sample_points(&cloud, config.sample_fraction, &mut rng);

    let mut frame = PlotFrame::default();
    for point in picked {
        frame.x.push(point.col as i64);
        frame.y.push(-(point.row as i64));
        frame.n.push(point.weight);
    }
    frame
}
