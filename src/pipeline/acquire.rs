//! Image acquisition.
//!
//! Files chosen through a picker and files dropped onto the UI both end up
//! here. The declared MIME type is checked before any decoding happens.

use crate::core::errors::ClassifierError;
use crate::domain::ImageSample;
use crate::utils::image::{decode_image, is_image_mime, mime_type_for_path};
use std::path::Path;
use tracing::debug;

/// Validates and decodes user-supplied images.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageAcquirer;

impl ImageAcquirer {
    pub fn new() -> Self {
        Self
    }

    /// Decodes `bytes` declared as `mime`.
    ///
    /// # Errors
    ///
    /// * `InvalidImageType` - `mime` is not an `image/*` type; `bytes` are not read
    /// * `ImageDecodeFailure` - The bytes do not decode to an image
    pub fn accept_bytes(&self, bytes: &[u8], mime: &str) -> Result<ImageSample, ClassifierError> {
        if !is_image_mime(mime) {
            return Err(ClassifierError::invalid_image_type(mime));
        }
        let sample = decode_image(bytes)?;
        debug!(
            "Decoded {} image: {}x{}",
            mime,
            sample.width(),
            sample.height()
        );
        Ok(sample)
    }

    /// Reads and decodes the file at `path`, taking the MIME type from its extension.
    ///
    /// # Errors
    ///
    /// * `InvalidImageType` - The extension is not a known image format
    /// * `ImageDecodeFailure` - The file cannot be read or decoded
    pub fn accept_path(&self, path: &Path) -> Result<ImageSample, ClassifierError> {
        let mime = mime_type_for_path(path).ok_or_else(|| {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default();
            ClassifierError::invalid_image_type(format!("unknown (.{ext})"))
        })?;
        let bytes = std::fs::read(path).map_err(|e| {
            ClassifierError::image_decode(format!("failed to read '{}'", path.display()), Some(e))
        })?;
        self.accept_bytes(&bytes, mime)
    }
}
