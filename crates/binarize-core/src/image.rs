/// Pixel values written into binary output images.
pub struct Palette;

impl Palette {
    /// Foreground (ink).
    pub const BLACK: u8 = 0;
    /// Background (paper).
    pub const WHITE: u8 = 255;
}

/// Errors produced when wrapping raw pixel buffers.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("invalid grayscale image buffer length (expected {expected} bytes, got {got})")]
    InvalidBufferLength { expected: usize, got: usize },

    #[error("invalid grayscale image dimensions (width={width}, height={height})")]
    InvalidDimensions { width: usize, height: usize },
}

#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h
}

impl GrayImageView<'_> {
    /// A 0×0 view. Traversals over it visit no pixel.
    pub const fn empty() -> GrayImageView<'static> {
        GrayImageView {
            width: 0,
            height: 0,
            data: &[],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}

impl Default for GrayImageView<'_> {
    fn default() -> Self {
        GrayImageView::empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    /// Zero-filled image of size `width × height`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Image filled with a single intensity.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Wrap a row-major buffer, checking that its length matches the dimensions.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = width
            .checked_mul(height)
            .ok_or(ImageError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(ImageError::InvalidBufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn view(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        let i = y * self.width + x;
        self.data[i] = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_short_buffer() {
        let err = GrayImage::from_raw(4, 3, vec![0; 11]).unwrap_err();
        assert_eq!(
            err,
            ImageError::InvalidBufferLength {
                expected: 12,
                got: 11
            }
        );
    }

    #[test]
    fn from_raw_rejects_overflowing_dimensions() {
        let err = GrayImage::from_raw(usize::MAX, 2, Vec::new()).unwrap_err();
        assert!(matches!(err, ImageError::InvalidDimensions { .. }));
    }

    #[test]
    fn view_addresses_row_major() {
        let img = GrayImage::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]).expect("valid buffer");
        let view = img.view();
        assert_eq!(view.get(0, 0), 1);
        assert_eq!(view.get(2, 0), 3);
        assert_eq!(view.get(1, 1), 5);
        assert_eq!(view.len(), 6);
    }

    #[test]
    fn empty_view_has_no_pixels() {
        let view = GrayImageView::empty();
        assert!(view.is_empty());
        assert_eq!(view.data.len(), 0);
    }
}
