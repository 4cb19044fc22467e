pub mod colormap;
pub mod frame;
pub mod grid;
pub mod hexbin;
pub mod points;
pub mod render;
pub mod sample;

pub use colormap::Colormap;
pub use frame::{HexbinConfig, PlotFrame, build_plot_frame};
pub use grid::{LoadError, PixelGrid};
pub use render::{RenderError, render_hexbin_rgba};
