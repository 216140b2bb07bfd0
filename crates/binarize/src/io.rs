//! Adapters between `image` buffers and the core image types, plus file helpers.

use crate::BinarizeError;
use binarize_core::{binarize, GrayImage, GrayImageView, ImageError, Parameters, TrSingh};
use log::info;
use std::{fs, path::Path};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Borrow an `image::GrayImage` as a core view.
pub fn gray_view(img: &::image::GrayImage) -> GrayImageView<'_> {
    GrayImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Take ownership of an `image::GrayImage` buffer.
pub fn from_luma(img: ::image::GrayImage) -> GrayImage {
    let width = img.width() as usize;
    let height = img.height() as usize;
    GrayImage {
        width,
        height,
        data: img.into_raw(),
    }
}

/// Copy a core image into an `image::GrayImage`.
pub fn to_luma(img: &GrayImage) -> Result<::image::GrayImage, BinarizeError> {
    let invalid = || ImageError::InvalidDimensions {
        width: img.width,
        height: img.height,
    };
    let width = u32::try_from(img.width).map_err(|_| invalid())?;
    let height = u32::try_from(img.height).map_err(|_| invalid())?;
    let expected = img.width * img.height;
    ::image::GrayImage::from_raw(width, height, img.data.clone()).ok_or(
        ImageError::InvalidBufferLength {
            expected,
            got: img.data.len(),
        }
        .into(),
    )
}

/// Decode any format supported by `image` and convert it to 8-bit grayscale.
pub fn load_grayscale(path: impl AsRef<Path>) -> Result<GrayImage, BinarizeError> {
    let path = path.as_ref();
    let img = ::image::open(path).map_err(|source| BinarizeError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(from_luma(img.into_luma8()))
}

/// Save an image, creating parent directories. The format follows the extension.
pub fn save_binary(path: impl AsRef<Path>, img: &GrayImage) -> Result<(), BinarizeError> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    to_luma(img)?
        .save(path)
        .map_err(|source| BinarizeError::Save {
            path: path.to_path_buf(),
            source,
        })
}

/// Load `input`, binarize it with T.R. Singh and write the result to `output`.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip(parameters)))]
pub fn binarize_file(
    input: &Path,
    output: &Path,
    parameters: &Parameters,
) -> Result<GrayImage, BinarizeError> {
    let src = load_grayscale(input)?;
    info!(
        "loaded {} ({}x{})",
        input.display(),
        src.width,
        src.height
    );
    let binary = binarize::<TrSingh>(src.view(), parameters);
    save_binary(output, &binary)?;
    info!("wrote {}", output.display());
    Ok(binary)
}

fn ensure_parent_dir(path: &Path) -> Result<(), BinarizeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_conversion_keeps_pixels() {
        let luma = ::image::GrayImage::from_fn(5, 3, |x, y| ::image::Luma([(x * 10 + y) as u8]));
        let view = gray_view(&luma);
        assert_eq!((view.width, view.height), (5, 3));
        assert_eq!(view.get(4, 2), 42);

        let owned = from_luma(luma.clone());
        assert_eq!(to_luma(&owned).expect("valid"), luma);
    }

    #[test]
    fn to_luma_rejects_inconsistent_buffer() {
        let broken = GrayImage {
            width: 4,
            height: 4,
            data: vec![0; 3],
        };
        assert!(matches!(
            to_luma(&broken),
            Err(BinarizeError::Buffer(ImageError::InvalidBufferLength {
                expected: 16,
                got: 3
            }))
        ));
    }
}
