use std::fs;

use image_hexbin::colormap::Colormap;
use image_hexbin::frame::{HexbinConfig, PlotFrame, build_plot_frame};
use image_hexbin::grid::PixelGrid;
use image_hexbin::hexbin::{bin_frame, hex_corners};
use image_hexbin::render::render_hexbin_rgba;

fn small_config() -> HexbinConfig {
    HexbinConfig {
        seed: Some(11),
        plot_width: 200,
        plot_height: 160,
        ..HexbinConfig::default()
    }
}

#[test]
fn empty_frame_renders_blank_canvas() {
    let frame = PlotFrame::default();
    let config = small_config();
    let pixels = render_hexbin_rgba(&frame, &config).expect("render failed");
    assert_eq!(pixels.len(), 200 * 160 * 4);
    assert!(
        pixels.chunks(4).all(|px| px == [255, 255, 255, 255]),
        "empty frame must render a blank white plot"
    );
}

#[test]
fn zero_size_canvas_yields_empty_buffer() {
    let config = HexbinConfig {
        plot_width: 0,
        ..small_config()
    };
    let pixels = render_hexbin_rgba(&PlotFrame::default(), &config).expect("render failed");
    assert!(pixels.is_empty());
}

#[test]
fn bins_conserve_counts_and_weights() {
    let frame = PlotFrame {
        x: vec![0, 1, 2, 10, 11, 30, 30, 31],
        y: vec![0, -1, 0, -10, -11, -29, -30, -30],
        n: vec![255, 200, 100, 50, 50, 9, 9, 9],
    };
    let binning = bin_frame(&frame, 24);

    let count_sum: u32 = binning.bins.iter().map(|b| b.count).sum();
    let weight_sum: u64 = binning.bins.iter().map(|b| b.weight).sum();
    let n_sum: u64 = frame.n.iter().map(|&n| n as u64).sum();

    assert_eq!(count_sum as usize, frame.len(), "every point lands in a bin");
    assert_eq!(weight_sum, n_sum, "bin weights must sum to the frame weight");
    assert!(binning.bins.iter().all(|b| b.count >= 1));
}

#[test]
fn single_point_occupies_a_single_bin() {
    let frame = PlotFrame {
        x: vec![5],
        y: vec![-3],
        n: vec![42],
    };
    let binning = bin_frame(&frame, 24);
    assert_eq!(binning.bins.len(), 1);
    assert_eq!(binning.bins[0].count, 1);
    assert_eq!(binning.bins[0].weight, 42);
}

#[test]
fn hex_corners_span_the_cell() {
    let corners = hex_corners(10.0, -4.0, 2.0, 3.0);
    let xs: Vec<f64> = corners.iter().map(|c| c.0).collect();
    let ys: Vec<f64> = corners.iter().map(|c| c.1).collect();
    let w = xs.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))
        - xs.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let h = ys.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))
        - ys.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    assert!((w - 2.0).abs() < 1e-9, "hexagon width {w} != sx");
    assert!((h - 2.0).abs() < 1e-9, "hexagon height {h} != 2*sy/3");
}

#[test]
fn greys_colormap_runs_light_to_dark() {
    assert_eq!(Colormap::Greys.sample(0.0), [255, 255, 255]);
    assert_eq!(Colormap::Greys.sample(1.0), [0, 0, 0]);
    let mid = Colormap::Greys.sample(0.25);
    let deep = Colormap::Greys.sample(0.75);
    assert!(mid[0] > deep[0], "shading must darken as t grows");
    // Out-of-range inputs clamp.
    assert_eq!(Colormap::Greys.sample(-1.0), [255, 255, 255]);
    assert_eq!(Colormap::Greys.sample(2.0), [0, 0, 0]);
}

#[test]
fn nonempty_frame_leaves_ink_on_the_canvas() {
    let frame = PlotFrame {
        x: vec![0, 0, 1, 1, 20, 20, 21],
        y: vec![0, -1, 0, -1, -20, -21, -20],
        n: vec![255, 255, 255, 255, 30, 30, 30],
    };
    let config = small_config();
    let pixels = render_hexbin_rgba(&frame, &config).expect("render failed");
    let inked = pixels
        .chunks(4)
        .filter(|px| px[0] != 255 || px[1] != 255 || px[2] != 255)
        .count();
    eprintln!("inked pixels: {inked}");
    assert!(inked > 0, "non-empty frame rendered an all-white canvas");
}

#[test]
fn seeded_render_is_reproducible() {
    let grid = PixelGrid::new(16, 16, (0..=255u8).collect());
    let config = small_config();
    let a = render_hexbin_rgba(&build_plot_frame(&grid, &config), &config).expect("render failed");
    let b = render_hexbin_rgba(&build_plot_frame(&grid, &config), &config).expect("render failed");
    assert_eq!(a, b, "same seed must produce byte-identical plots");
}

#[test]
fn gradient_image_end_to_end_writes_png() {
    let image = image::GrayImage::from_fn(64, 48, |x, y| {
        // Diagonal brightness ramp: dark top-left corner, white bottom-right.
        let v = ((x as u32 * 255 / 63) + (y as u32 * 255 / 47)) / 2;
        image::Luma([v.min(255) as u8])
    });
    let grid = PixelGrid::from_luma(&image);

    let config = HexbinConfig {
        seed: Some(2024),
        ..HexbinConfig::default()
    };
    let frame = build_plot_frame(&grid, &config);
    assert!(!frame.is_empty(), "the ramp has plenty of dark pixels");

    let pixels = render_hexbin_rgba(&frame, &config).expect("render failed");
    let rgba = image::RgbaImage::from_raw(config.plot_width, config.plot_height, pixels)
        .expect("buffer size mismatch");

    fs::create_dir_all("output").ok();
    rgba.save("output/hexbin_gradient.png")
        .expect("failed to write rendered plot");
}
