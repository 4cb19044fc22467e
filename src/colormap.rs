//! Sequential colormaps for bin shading.

use std::fmt;

use clap::ValueEnum;
use palette::{LinSrgb, Mix, Srgb};

/// Color scales named after their matplotlib counterparts. All of them run
/// light-to-dark (or dark-to-light for Viridis) so higher aggregates stand
/// out against the white canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Colormap {
    Greys,
    Blues,
    Viridis,
}

impl Colormap {
    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            Colormap::Greys => &[[255, 255, 255], [0, 0, 0]],
            Colormap::Blues => &[[247, 251, 255], [107, 174, 214], [8, 48, 107]],
            Colormap::Viridis => &[
                [68, 1, 84],
                [59, 82, 139],
                [33, 144, 140],
                [93, 201, 99],
                [253, 231, 37],
            ],
        }
    }

    /// Samples the gradient at `t`, clamped to [0, 1].
    ///
    /// Interpolation happens in linear RGB; the stops are sRGB control points.
    pub fn sample(self, t: f64) -> [u8; 3] {
        let stops = self.stops();
        let t = t.clamp(0.0, 1.0) as f32;
        let scaled = t * (stops.len() - 1) as f32;
        let lo = (scaled.floor() as usize).min(stops.len() - 2);
        let frac = scaled - lo as f32;

        let a = to_linear(stops[lo]);
        let b = to_linear(stops[lo + 1]);
        let mixed = a.mix(b, frac);
        let out: Srgb<u8> = Srgb::from_linear(mixed);
        [out.red, out.green, out.blue]
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Colormap::Greys => "greys",
            Colormap::Blues => "blues",
            Colormap::Viridis => "viridis",
        })
    }
}

fn to_linear(rgb: [u8; 3]) -> LinSrgb<f32> {
    Srgb::new(rgb[0], rgb[1], rgb[2])
        .into_format::<f32>()
        .into_linear()
}
