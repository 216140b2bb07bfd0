//! Two-phase lifecycle shared by binarization rules.

use crate::image::{GrayImage, GrayImageView};
use crate::params::Parameters;

/// A binarization rule bound to one grayscale source at a time.
///
/// `initialize` binds the source and primes any precomputed statistics;
/// `to_binary` may then run any number of times with different parameters.
/// The image passed to `initialize` must be the one whose dimensions match
/// the output given to `to_binary`; this is not checked.
pub trait Algorithm<'a> {
    /// Bind `image`, replacing whatever was bound before.
    fn initialize(&mut self, image: GrayImageView<'a>);

    /// Write the binary result for the bound image into `output`.
    fn to_binary(&self, output: &mut GrayImage, parameters: &Parameters);

    /// The currently bound source (empty before `initialize`).
    fn source(&self) -> GrayImageView<'a>;

    /// Allocate an output matching the bound source and binarize into it.
    fn to_binary_image(&self, parameters: &Parameters) -> GrayImage {
        let src = self.source();
        let mut output = GrayImage::new(src.width, src.height);
        self.to_binary(&mut output, parameters);
        output
    }
}

/// Run rule `A` once on `image`.
pub fn binarize<'a, A>(image: GrayImageView<'a>, parameters: &Parameters) -> GrayImage
where
    A: Algorithm<'a> + Default,
{
    let mut algorithm = A::default();
    algorithm.initialize(image);
    algorithm.to_binary_image(parameters)
}
