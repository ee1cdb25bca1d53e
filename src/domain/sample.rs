//! Decoded images handed to the preprocessor.

use crate::core::constants::INPUT_CHANNELS;
use crate::core::errors::ClassifierError;
use image::{DynamicImage, RgbImage};

/// A decoded image with exactly three 8-bit color channels and non-zero size.
///
/// Alpha and grayscale sources are converted to RGB when the sample is built,
/// so every later stage can rely on the channel count.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSample {
    pixels: RgbImage,
}

impl ImageSample {
    /// Wraps an RGB image.
    ///
    /// # Errors
    ///
    /// Returns `ImageDecodeFailure` if either dimension is zero.
    pub fn from_rgb(pixels: RgbImage) -> Result<Self, ClassifierError> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(ClassifierError::image_decode(
                format!("image has no pixels ({}x{})", pixels.width(), pixels.height()),
                None::<std::io::Error>,
            ));
        }
        Ok(Self { pixels })
    }

    /// Converts any decoded image to RGB, dropping alpha and expanding grayscale.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self, ClassifierError> {
        Self::from_rgb(image.to_rgb8())
    }

    /// Builds a sample from interleaved RGB bytes.
    ///
    /// # Errors
    ///
    /// Returns `ImageDecodeFailure` if `data.len() != width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ClassifierError> {
        let expected = width as usize * height as usize * INPUT_CHANNELS;
        if data.len() != expected {
            return Err(ClassifierError::image_decode(
                format!(
                    "raw buffer holds {} bytes, expected {} for {}x{} RGB",
                    data.len(),
                    expected,
                    width,
                    height
                ),
                None::<std::io::Error>,
            ));
        }
        let pixels = RgbImage::from_raw(width, height, data).ok_or_else(|| {
            ClassifierError::image_decode("raw buffer rejected", None::<std::io::Error>)
        })?;
        Self::from_rgb(pixels)
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn into_inner(self) -> RgbImage {
        self.pixels
    }
}
