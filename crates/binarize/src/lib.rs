//! High-level facade over `binarize-core`.
//!
//! This crate provides:
//! - re-exports of the core types and the T.R. Singh rule,
//! - JSON run configs ([`BinarizeConfig`]),
//! - (feature `image`) load/save helpers built on the `image` crate,
//! - (feature `cli`) the `binarize` command-line tool.
//!
//! ## Quickstart
//!
//! ```no_run
//! use binarize::{io, Parameters};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), binarize::BinarizeError> {
//! let params = Parameters::new().with("window", 41).with("k", 0.25);
//! let binary = io::binarize_file(Path::new("page.png"), Path::new("page_bin.png"), &params)?;
//! println!("{}x{}", binary.width, binary.height);
//! # Ok(())
//! # }
//! ```

pub use binarize_core as core;

pub use binarize_core::{
    binarize, trsingh_threshold, Algorithm, GrayImage, GrayImageView, Palette, Parameters,
    TrSingh, TrSinghParams,
};

mod config;
mod error;

pub use config::BinarizeConfig;
pub use error::BinarizeError;

#[cfg(feature = "image")]
pub mod io;
