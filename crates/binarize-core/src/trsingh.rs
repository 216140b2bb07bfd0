//! T.R. Singh local adaptive thresholding.
//!
//! T. Romen Singh, Sudipta Roy, O. Imocha Singh, Tejmani Sinam,
//! Kh. Manglem Singh, "A New Local Adaptive Thresholding Technique in
//! Binarization", 2011.

use crate::algorithm::Algorithm;
use crate::image::{GrayImage, GrayImageView};
use crate::mean::MeanCalculator;
use crate::params::Parameters;
use crate::window::{self, Region};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Options read by [`TrSingh`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrSinghParams {
    /// Side length of the square window, in pixels.
    pub window: usize,
    /// Contrast constant. Larger values pull the threshold further below the
    /// local mean.
    pub k: f64,
}

impl Default for TrSinghParams {
    fn default() -> Self {
        Self {
            window: 75,
            k: 0.2,
        }
    }
}

impl TrSinghParams {
    /// Read `window` and `k`, using the defaults for anything missing.
    pub fn from_parameters(parameters: &Parameters) -> Self {
        let defaults = Self::default();
        Self {
            window: parameters.get("window", defaults.window),
            k: parameters.get("k", defaults.k),
        }
    }

    pub fn to_parameters(&self) -> Parameters {
        Parameters::new()
            .with("window", self.window)
            .with("k", self.k)
    }
}

/// Threshold for a pixel of intensity `value` whose window averages `mean`.
///
/// `f64::MIN` is added to the denominator so that `meandev == 1` never
/// divides by exactly zero. Nothing bounds the result otherwise.
#[inline]
pub fn trsingh_threshold(mean: f64, value: f64, k: f64) -> f64 {
    let meandev = value - mean;
    mean * (1.0 + k * ((meandev / (1.0 - meandev + f64::MIN)) - 1.0))
}

/// T.R. Singh binarization over a windowed mean.
#[derive(Clone, Debug, Default)]
pub struct TrSingh<'a> {
    image: GrayImageView<'a>,
    mean: MeanCalculator,
}

impl<'a> TrSingh<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Threshold for the pixel at linear `position` given its `window`.
    #[inline]
    pub fn threshold(&self, window: &Region, position: usize, k: f64) -> f64 {
        let mean = self.mean.calculate_mean(window);
        trsingh_threshold(mean, self.image.data[position] as f64, k)
    }
}

impl<'a> Algorithm<'a> for TrSingh<'a> {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            skip(self, image),
            fields(width = image.width, height = image.height)
        )
    )]
    fn initialize(&mut self, image: GrayImageView<'a>) {
        trace!("tr-singh: priming integral image {}x{}", image.width, image.height);
        self.image = image;
        self.mean.initialize(&image);
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, output, parameters))
    )]
    fn to_binary(&self, output: &mut GrayImage, parameters: &Parameters) {
        let TrSinghParams {
            window: window_size,
            k,
        } = TrSinghParams::from_parameters(parameters);
        debug!(
            "tr-singh: {}x{} window={window_size} k={k}",
            self.image.width, self.image.height
        );

        window::process(output, &self.image, window_size, |region, position| {
            self.threshold(region, position, k)
        });
    }

    fn source(&self) -> GrayImageView<'a> {
        self.image
    }
}
