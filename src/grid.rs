//! Grayscale pixel grid: image loading and darkness inversion.

use image::GrayImage;
use std::path::Path;

/// Errors that can occur while loading the input image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("image load error: {0}")]
    Image(#[from] image::ImageError),
}

/// Immutable row-major grayscale grid in [0, 255].
///
/// Color inputs are collapsed to a single luminance channel at load time;
/// every later pipeline stage derives a new grid or point set from this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Wraps a row-major buffer. The buffer length must be `width * height`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize,
            "buffer length does not match {width}x{height}"
        );
        Self {
            width,
            height,
            data,
        }
    }

    pub fn from_luma(image: &GrayImage) -> Self {
        Self::new(image.width(), image.height(), image.as_raw().clone())
    }

    /// Decodes the image at `path` and collapses it to one luminance channel.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let decoded = image::open(path)?;
        Ok(Self::from_luma(&decoded.to_luma8()))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, row: u32, col: u32) -> u8 {
        self.data[row as usize * self.width as usize + col as usize]
    }

    /// Row-major view of the raw values.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Darkness grid: `255 - value` per cell, so dark regions carry high weight.
    pub fn inverted(&self) -> Self {
        let data = self.data.iter().map(|&v| 255 - v).collect();
        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }
}
