//! Utility functions for loading images.
//!
//! This module decodes files and in-memory buffers into [`ImageSample`]s and
//! resolves MIME types for files that do not come with one.

use crate::core::constants::IMAGE_MIME_PREFIX;
use crate::core::errors::ClassifierError;
use crate::domain::ImageSample;
use image::ImageFormat;
use std::path::Path;

/// Whether a declared MIME type names an image.
///
/// The check is an exact, case-sensitive `image/` prefix match, the same rule
/// browsers' file pickers and drop targets apply to `File.type`.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with(IMAGE_MIME_PREFIX)
}

/// Guesses the MIME type of a file from its extension.
///
/// # Returns
///
/// * `Some(mime)` - When the extension belongs to a format the image crate knows
/// * `None` - When the extension is missing or unknown
pub fn mime_type_for_path(path: &Path) -> Option<&'static str> {
    ImageFormat::from_path(path)
        .ok()
        .map(|format| format.to_mime_type())
}

/// Decodes an encoded image buffer (PNG, JPEG, ...) into a sample.
///
/// # Errors
///
/// Returns `ImageDecodeFailure` if the bytes are not a decodable image.
pub fn decode_image(bytes: &[u8]) -> Result<ImageSample, ClassifierError> {
    let img = image::load_from_memory(bytes)?;
    ImageSample::from_dynamic(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let img = RgbImage::from_pixel(3, 2, Rgb([9, 8, 7]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_is_image_mime() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/svg+xml"));
        assert!(is_image_mime("image/"));
        assert!(!is_image_mime("IMAGE/JPEG"));
        assert!(!is_image_mime(" image/png"));
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime("application/image"));
        assert!(!is_image_mime(""));
        assert!(!is_image_mime("imag"));
    }

    #[test]
    fn test_mime_type_for_path() {
        assert_eq!(mime_type_for_path(Path::new("a/cat.png")), Some("image/png"));
        assert_eq!(mime_type_for_path(Path::new("dog.JPG")), Some("image/jpeg"));
        assert_eq!(mime_type_for_path(Path::new("notes.txt")), None);
        assert_eq!(mime_type_for_path(Path::new("no_extension")), None);
    }

    #[test]
    fn test_decode_image() {
        let sample = decode_image(&png_bytes()).unwrap();
        assert_eq!(sample.dimensions(), (3, 2));
        assert_eq!(sample.pixels().get_pixel(2, 1).0, [9, 8, 7]);

        assert!(matches!(
            decode_image(b"definitely not an image"),
            Err(ClassifierError::ImageDecodeFailure { .. })
        ));
    }
}
