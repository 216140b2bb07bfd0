//! Sliding-window traversal shared by local thresholding rules.
//!
//! Windows are square, centred on the visited pixel and shrunk to fit at the
//! image borders, so a [`Region`] handed to a callback is always in bounds.

use crate::image::{GrayImage, GrayImageView, Palette};

/// Pixel coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

/// Inclusive rectangle `upper_left ..= bottom_right`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Region {
    pub upper_left: Point,
    pub bottom_right: Point,
}

impl Region {
    pub fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        Self {
            upper_left: Point { x: x0, y: y0 },
            bottom_right: Point { x: x1, y: y1 },
        }
    }

    /// Region covering a whole `width × height` image.
    pub fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, width.saturating_sub(1), height.saturating_sub(1))
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.bottom_right.x - self.upper_left.x + 1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.bottom_right.y - self.upper_left.y + 1
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }
}

/// Binarize `input` into `output` using a per-pixel threshold.
///
/// For each pixel in raster order the clipped window of side `window_size`
/// is built and `threshold_fn(&window, position)` is called, where `position`
/// is the linear index `y * width + x`. Pixels strictly darker than the
/// returned threshold become [`Palette::BLACK`], all others
/// [`Palette::WHITE`].
///
/// `half = window_size / 2` pixels are taken on each side, so an even
/// `window_size` spans `window_size + 1` pixels away from the borders.
///
/// `output` must have the same dimensions as `input`.
pub fn process<F>(
    output: &mut GrayImage,
    input: &GrayImageView<'_>,
    window_size: usize,
    mut threshold_fn: F,
) where
    F: FnMut(&Region, usize) -> f64,
{
    if input.is_empty() {
        return;
    }
    debug_assert_eq!(output.data.len(), input.len());

    let half = window_size / 2;
    let max_x = input.width - 1;
    let max_y = input.height - 1;
    let mut window = Region::default();

    let mut position = 0;
    for y in 0..input.height {
        window.upper_left.y = y.saturating_sub(half);
        window.bottom_right.y = (y + half).min(max_y);

        for x in 0..input.width {
            window.upper_left.x = x.saturating_sub(half);
            window.bottom_right.x = (x + half).min(max_x);

            let threshold = threshold_fn(&window, position);
            output.data[position] = if (input.data[position] as f64) < threshold {
                Palette::BLACK
            } else {
                Palette::WHITE
            };
            position += 1;
        }
    }
}
