//! Summed-area table over an 8-bit image.

use crate::image::GrayImageView;
use crate::window::Region;

/// Summed-area table padded with a leading zero row and column.
///
/// Entry `(x + 1, y + 1)` holds the sum of all pixels `(i, j)` with
/// `i <= x && j <= y`, which turns every rectangle sum into four lookups.
#[derive(Clone, Debug, Default)]
pub struct IntegralImage {
    width: usize,
    height: usize,
    stride: usize,
    sums: Vec<u64>,
}

impl IntegralImage {
    pub fn new(image: &GrayImageView<'_>) -> Self {
        let stride = image.width + 1;
        let mut sums = vec![0u64; stride * (image.height + 1)];

        for y in 0..image.height {
            let row = &image.data[y * image.width..(y + 1) * image.width];
            let mut row_sum = 0u64;
            for (x, &px) in row.iter().enumerate() {
                row_sum += px as u64;
                sums[(y + 1) * stride + x + 1] = sums[y * stride + x + 1] + row_sum;
            }
        }

        Self {
            width: image.width,
            height: image.height,
            stride,
            sums,
        }
    }

    /// Width of the source image.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the source image.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sum of the intensities inside `region`.
    #[inline]
    pub fn sum(&self, region: &Region) -> u64 {
        let x0 = region.upper_left.x;
        let y0 = region.upper_left.y;
        let x1 = region.bottom_right.x + 1;
        let y1 = region.bottom_right.y + 1;

        let s = self.stride;
        self.sums[y1 * s + x1] + self.sums[y0 * s + x0]
            - self.sums[y0 * s + x1]
            - self.sums[y1 * s + x0]
    }
}
