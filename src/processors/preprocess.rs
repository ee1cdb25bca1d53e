//! Image preprocessing for classification models.
//!
//! Converts an [`ImageSample`] into the `[1, H, W, 3]` tensor the model was
//! trained on: nearest-neighbor resize, 8-bit to `f32` scaled into `[0.0, 1.0]`,
//! and a leading batch dimension.
//!
//! The resize follows the convention of the runtime the models are exported
//! from (no corner alignment, no half-pixel centers): destination index `d`
//! reads source index `min(floor(d * in / out), in - 1)`. Using a different
//! interpolation, or a center-sampled nearest filter, changes the predictions.

use crate::core::constants::{DEFAULT_INPUT_SIZE, INPUT_BATCH, INPUT_CHANNELS, PIXEL_SCALE};
use crate::core::errors::ClassifierError;
use crate::core::tensor::InputTensor;
use crate::domain::ImageSample;
use image::RgbImage;
use ndarray::Array4;

/// Source index read by each destination index of a nearest-neighbor resize.
///
/// # Arguments
///
/// * `in_len` - Source length in pixels (must be > 0)
/// * `out_len` - Destination length in pixels
pub fn nearest_source_indices(in_len: u32, out_len: u32) -> Vec<usize> {
    if in_len == 0 || out_len == 0 {
        return Vec::new();
    }
    let ratio = in_len as f64 / out_len as f64;
    let last = (in_len - 1) as usize;
    (0..out_len)
        .map(|d| ((ratio * d as f64).floor() as usize).min(last))
        .collect()
}

/// Nearest-neighbor resize of an RGB image using [`nearest_source_indices`].
pub fn resize_nearest_neighbor(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    let xs = nearest_source_indices(img.width(), width);
    let ys = nearest_source_indices(img.height(), height);
    RgbImage::from_fn(width, height, |x, y| {
        *img.get_pixel(xs[x as usize] as u32, ys[y as usize] as u32)
    })
}

/// Turns decoded images into model input tensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preprocessor {
    width: u32,
    height: u32,
}

impl Preprocessor {
    /// Creates a preprocessor producing `[1, 224, 224, 3]` tensors.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_INPUT_SIZE,
            height: DEFAULT_INPUT_SIZE,
        }
    }

    /// Creates a preprocessor for a custom (width, height) target.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either dimension is zero.
    pub fn with_input_shape(input_shape: (u32, u32)) -> Result<Self, ClassifierError> {
        let (width, height) = input_shape;
        if width == 0 || height == 0 {
            return Err(crate::core::config::ConfigError::InvalidConfig {
                message: format!("input shape must be positive, got {}x{}", width, height),
            }
            .into());
        }
        Ok(Self { width, height })
    }

    /// Target size as (width, height).
    pub fn input_shape(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Shape of the tensors this preprocessor produces, `[1, H, W, 3]`.
    pub fn output_shape(&self) -> [usize; 4] {
        [
            INPUT_BATCH,
            self.height as usize,
            self.width as usize,
            INPUT_CHANNELS,
        ]
    }

    /// Resizes, scales and batches a single sample.
    ///
    /// Pure with respect to its input; the sample is only read.
    pub fn preprocess(&self, sample: &ImageSample) -> Result<InputTensor, ClassifierError> {
        let pixels = sample.pixels();
        let src_width = pixels.width() as usize;
        let raw = pixels.as_raw();

        let xs = nearest_source_indices(pixels.width(), self.width);
        let ys = nearest_source_indices(pixels.height(), self.height);

        let data = Array4::from_shape_fn(self.output_shape(), |(_, y, x, c)| {
            let src = (ys[y] * src_width + xs[x]) * INPUT_CHANNELS + c;
            f32::from(raw[src]) / PIXEL_SCALE
        });

        InputTensor::new(data)
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient(width: u32, height: u32) -> ImageSample {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        ImageSample::from_rgb(img).unwrap()
    }

    #[test]
    fn test_nearest_indices_follow_floor_convention() {
        assert_eq!(nearest_source_indices(2, 4), vec![0, 0, 1, 1]);
        assert_eq!(nearest_source_indices(4, 2), vec![0, 2]);
        assert_eq!(nearest_source_indices(3, 2), vec![0, 1]);
        assert_eq!(nearest_source_indices(5, 3), vec![0, 1, 3]);
        assert_eq!(nearest_source_indices(1, 3), vec![0, 0, 0]);
        assert!(nearest_source_indices(0, 3).is_empty());
    }

    #[test]
    fn test_output_shape_and_range() {
        let pre = Preprocessor::new();
        for (w, h) in [(640, 480), (1, 1), (224, 224), (37, 500)] {
            let tensor = pre.preprocess(&gradient(w, h)).unwrap();
            assert_eq!(tensor.shape(), [1, 224, 224, 3]);
            assert!(tensor.view().iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }

    #[test]
    fn test_same_size_is_plain_scaling() {
        let sample = gradient(224, 224);
        let tensor = Preprocessor::new().preprocess(&sample).unwrap();
        for (x, y) in [(0, 0), (10, 200), (223, 223)] {
            let px = sample.pixels().get_pixel(x, y);
            for c in 0..3 {
                assert_eq!(
                    tensor.get(y as usize, x as usize, c),
                    Some(f32::from(px[c]) / 255.0)
                );
            }
        }
    }

    #[test]
    fn test_downscale_picks_even_pixels() {
        let sample = gradient(448, 448);
        let tensor = Preprocessor::new().preprocess(&sample).unwrap();
        // destination (y=5, x=7) reads source (y=10, x=14)
        assert_eq!(tensor.get(5, 7, 0), Some(14.0 / 255.0));
        assert_eq!(tensor.get(5, 7, 1), Some(10.0 / 255.0));
        assert_eq!(tensor.get(5, 7, 2), Some(24.0 / 255.0));
    }

    #[test]
    fn test_extreme_values() {
        let img = RgbImage::from_fn(2, 1, |x, _| {
            if x == 0 { Rgb([0, 51, 255]) } else { Rgb([255, 255, 255]) }
        });
        let sample = ImageSample::from_rgb(img).unwrap();
        let tensor = Preprocessor::with_input_shape((2, 1))
            .unwrap()
            .preprocess(&sample)
            .unwrap();
        assert_eq!(tensor.shape(), [1, 1, 2, 3]);
        assert_eq!(tensor.get(0, 0, 0), Some(0.0));
        assert_eq!(tensor.get(0, 0, 1), Some(0.2));
        assert_eq!(tensor.get(0, 0, 2), Some(1.0));
        assert_eq!(tensor.get(0, 1, 0), Some(1.0));
    }

    #[test]
    fn test_resize_nearest_neighbor_matches_tensor_path() {
        let sample = gradient(300, 120);
        let resized = resize_nearest_neighbor(sample.pixels(), 224, 224);
        let tensor = Preprocessor::new().preprocess(&sample).unwrap();
        let px = resized.get_pixel(100, 50);
        assert_eq!(tensor.get(50, 100, 0), Some(f32::from(px[0]) / 255.0));
        assert_eq!(tensor.get(50, 100, 2), Some(f32::from(px[2]) / 255.0));
    }

    #[test]
    fn test_invalid_input_shape() {
        assert!(Preprocessor::with_input_shape((0, 10)).is_err());
        assert_eq!(
            Preprocessor::with_input_shape((160, 120)).unwrap().output_shape(),
            [1, 120, 160, 3]
        );
    }
}
