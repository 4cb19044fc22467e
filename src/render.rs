//! In-memory rendering of the hex-bin density plot.

use plotters::prelude::*;

use crate::frame::{HexbinConfig, PlotFrame};
use crate::hexbin::{self, HexBinning};

/// Pixel border kept clear around the data extent.
const MARGIN: u32 = 24;

/// Errors that can occur while rendering the plot.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("plot backend error: {0}")]
    Backend(String),
    #[error("plot size {0}x{1} overflows the pixel buffer")]
    SizeOverflow(u32, u32),
}

fn backend_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

/// Renders the frame as an RGBA pixel buffer of the configured size.
///
/// Bin shading maps the aggregated weights onto the configured colormap.
/// An empty frame yields a blank white canvas rather than an error; a
/// zero-size canvas yields an empty buffer.
pub fn render_hexbin_rgba(frame: &PlotFrame, config: &HexbinConfig) -> Result<Vec<u8>, RenderError> {
    let (width, height) = (config.plot_width, config.plot_height);
    if width == 0 || height == 0 {
        return Ok(Vec::new());
    }

    let pixel_count = (width as usize)
        .checked_mul(height as usize)
        .ok_or(RenderError::SizeOverflow(width, height))?;

    let mut rgb = vec![255u8; pixel_count * 3];

    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(backend_err)?;

        let binning = hexbin::bin_frame(frame, config.gridsize);
        if !binning.bins.is_empty() {
            draw_bins(&root, &binning, config, width, height)?;
        }

        root.present().map_err(backend_err)?;
    }

    let mut rgba = vec![255u8; pixel_count * 4];
    for i in 0..pixel_count {
        rgba[i * 4] = rgb[i * 3];
        rgba[i * 4 + 1] = rgb[i * 3 + 1];
        rgba[i * 4 + 2] = rgb[i * 3 + 2];
        rgba[i * 4 + 3] = 255;
    }

    Ok(rgba)
}

fn draw_bins<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    binning: &HexBinning,
    config: &HexbinConfig,
    width: u32,
    height: u32,
) -> Result<(), RenderError> {
    let bins = &binning.bins;

    let w_lo = bins.iter().map(|b| b.weight).min().unwrap_or(0);
    let w_hi = bins.iter().map(|b| b.weight).max().unwrap_or(0);

    // Data extent with a half-cell apron so edge hexagons stay on canvas.
    let x_lo = fold_min(bins.iter().map(|b| b.cx)) - binning.sx;
    let x_hi = fold_max(bins.iter().map(|b| b.cx)) + binning.sx;
    let y_lo = fold_min(bins.iter().map(|b| b.cy)) - binning.sy;
    let y_hi = fold_max(bins.iter().map(|b| b.cy)) + binning.sy;

    let inner_w = width.saturating_sub(2 * MARGIN).max(1) as f64;
    let inner_h = height.saturating_sub(2 * MARGIN).max(1) as f64;
    let span_x = (x_hi - x_lo).max(f64::EPSILON);
    let span_y = (y_hi - y_lo).max(f64::EPSILON);

    // Data y grows upward, pixel y grows downward.
    let to_px = |x: f64| (MARGIN as f64 + (x - x_lo) / span_x * inner_w).round() as i32;
    let to_py = |y: f64| (MARGIN as f64 + (y_hi - y) / span_y * inner_h).round() as i32;

    for bin in bins {
        let t = if w_hi > w_lo {
            (bin.weight - w_lo) as f64 / (w_hi - w_lo) as f64
        } else {
            // All bins equal: shade at full intensity so they stay visible.
            1.0
        };
        let [r, g, b] = config.colormap.sample(t);
        let color = RGBColor(r, g, b);

        let corners: Vec<(i32, i32)> = hexbin::hex_corners(bin.cx, bin.cy, binning.sx, binning.sy)
            .iter()
            .map(|&(x, y)| (to_px(x), to_py(y)))
            .collect();
        root.draw(&Polygon::new(corners, color.filled()))
            .map_err(backend_err)?;
    }

    Ok(())
}

fn fold_min(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::INFINITY, f64::min)
}

fn fold_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}
