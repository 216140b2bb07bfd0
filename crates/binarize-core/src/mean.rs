//! Windowed intensity mean.
//!
//! Thresholding rules call [`MeanCalculator::calculate_mean`] once per pixel,
//! so the cost per call must not grow with the window.

use crate::image::GrayImageView;
use crate::integral::IntegralImage;
use crate::window::Region;

/// Windowed mean backed by an [`IntegralImage`].
///
/// `initialize` is O(width × height); every `calculate_mean` afterwards is
/// O(1) regardless of the window size. Queries only borrow `self`, so an
/// initialized calculator can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct MeanCalculator {
    integral: IntegralImage,
}

impl MeanCalculator {
    /// Rebuild the summed-area table for `image`, discarding prior state.
    pub fn initialize(&mut self, image: &GrayImageView<'_>) {
        self.integral = IntegralImage::new(image);
    }

    /// Arithmetic mean of the intensities inside `window`.
    ///
    /// `window` must lie within the image passed to `initialize`.
    #[inline]
    pub fn calculate_mean(&self, window: &Region) -> f64 {
        self.integral.sum(window) as f64 / window.area() as f64
    }
}
