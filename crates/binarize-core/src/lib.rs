//! Core types and algorithms for local adaptive binarization.
//!
//! This crate does no image I/O. It provides:
//! - [`GrayImage`] / [`GrayImageView`], plain row-major 8-bit buffers,
//! - [`IntegralImage`] and [`MeanCalculator`] for O(1) windowed means,
//! - [`window::process`], the clipped sliding-window traversal,
//! - the [`Algorithm`] lifecycle and the [`TrSingh`] thresholding rule.
//!
//! ```
//! use binarize_core::{binarize, GrayImage, Parameters, TrSingh};
//!
//! let page = GrayImage::filled(64, 48, 220);
//! let params = Parameters::new().with("window", 25).with("k", 0.2);
//! let binary = binarize::<TrSingh>(page.view(), &params);
//! assert_eq!(binary.data.len(), 64 * 48);
//! ```

mod algorithm;
mod image;
mod integral;
mod logger;
mod mean;
mod params;
mod trsingh;
pub mod window;

pub use algorithm::{binarize, Algorithm};
pub use image::{GrayImage, GrayImageView, ImageError, Palette};
pub use integral::IntegralImage;
pub use mean::MeanCalculator;
pub use params::{FromParam, ParamError, ParamValue, Parameters};
pub use trsingh::{trsingh_threshold, TrSingh, TrSinghParams};
pub use window::{Point, Region};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_with_level, level_from_verbosity};
