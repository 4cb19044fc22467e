use clap::{ArgGroup, Parser};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use image_hexbin::colormap::Colormap;
use image_hexbin::frame::{HexbinConfig, build_plot_frame};
use image_hexbin::grid::PixelGrid;
use image_hexbin::hexbin::{BinReport, bin_frame};
use image_hexbin::render::render_hexbin_rgba;

#[derive(Parser, Debug)]
#[command(
    name = "hexbin",
    about = "Render a hex-binned darkness density plot from an image",
    version,
    group(
        ArgGroup::new("action")
            .required(true)
            .multiple(true)
            .args(["plot", "bins"])
    )
)]
struct Cli {
    /// Input image file
    image: PathBuf,

    /// Write the rendered hex-bin plot PNG
    #[arg(long = "plot", short = 'p')]
    plot: bool,

    /// Write the per-bin aggregates as JSON
    #[arg(long = "bins", short = 'b')]
    bins: bool,

    /// Fraction of non-zero pixels kept in the sample
    #[arg(long = "sample-fraction", default_value_t = 0.10)]
    sample_fraction: f64,

    /// Hexagons across the plot's horizontal extent
    #[arg(long, default_value_t = 24)]
    gridsize: u32,

    /// Color scale for bin shading
    #[arg(long = "cmap", value_enum, default_value_t = Colormap::Greys)]
    cmap: Colormap,

    /// RNG seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Plot bitmap width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Plot bitmap height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Output path stem (defaults to the input file stem)
    #[arg(short = 'o', long = "out")]
    out: Option<PathBuf>,
}

fn write_text_file(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

fn output_path(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = stem.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let grid = PixelGrid::load(&cli.image)?;

    let config = HexbinConfig {
        sample_fraction: cli.sample_fraction,
        gridsize: cli.gridsize,
        colormap: cli.cmap,
        seed: cli.seed,
        plot_width: cli.width,
        plot_height: cli.height,
    };

    let frame = build_plot_frame(&grid, &config);
    if frame.is_empty() {
        eprintln!(
            "No dark pixels sampled from {}; output will be blank",
            cli.image.display()
        );
    }

    let stem = cli
        .out
        .clone()
        .unwrap_or_else(|| cli.image.with_extension(""));

    if cli.plot {
        let out_plot = output_path(&stem, "_hexbin.png");
        let pixels = render_hexbin_rgba(&frame, &config)?;
        if pixels.is_empty() {
            eprintln!("Plot skipped (zero-size canvas) for {}", cli.image.display());
        } else if let Some(rgba) = image::RgbaImage::from_raw(cli.width, cli.height, pixels) {
            rgba.save(&out_plot)?;
            println!("wrote {}", out_plot.display());
        } else {
            eprintln!(
                "Failed to build RGBA image for plot {} ({}x{})",
                out_plot.display(),
                cli.width,
                cli.height
            );
        }
    }

    if cli.bins {
        let out_bins = output_path(&stem, "_bins.json");
        let binning = bin_frame(&frame, config.gridsize);
        let report = BinReport::new(&frame, config.gridsize, binning);
        let s = serde_json::to_string_pretty(&report)?;
        write_text_file(&out_bins, &s)?;
        println!("wrote {}", out_bins.display());
    }

    Ok(())
}
