//! Label metadata shipped next to a model.
//!
//! The metadata document is a JSON object whose `labels` array maps output
//! slot `i` of the model to a human-readable class name:
//!
//! ```json
//! { "labels": ["cat", "dog", "bird"], "modelName": "pets", "imageSize": 224 }
//! ```
//!
//! `modelName` and `imageSize` are optional; any other fields are ignored.

use crate::core::errors::ClassifierError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Immutable, index-addressed label list for a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetadata {
    labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_size: Option<u32>,
}

impl ModelMetadata {
    /// Builds metadata from a label list.
    ///
    /// # Errors
    ///
    /// Returns `MetadataUnavailable` if `labels` is empty.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, ClassifierError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let metadata = Self {
            labels: labels.into_iter().map(Into::into).collect(),
            model_name: None,
            image_size: None,
        };
        metadata.check(Path::new("<memory>"))?;
        Ok(metadata)
    }

    /// Parses a metadata document.
    ///
    /// `location` is only used for error reporting.
    pub fn from_json_str(text: &str, location: &Path) -> Result<Self, ClassifierError> {
        let metadata: Self = serde_json::from_str(text).map_err(|e| {
            ClassifierError::metadata_unavailable(location, "metadata document is not valid", e)
        })?;
        metadata.check(location)?;
        Ok(metadata)
    }

    /// Reads and parses the metadata document at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ClassifierError::metadata_unavailable(path, "could not read metadata document", e)
        })?;
        Self::from_json_str(&text, path)
    }

    fn check(&self, location: &Path) -> Result<(), ClassifierError> {
        if self.labels.is_empty() {
            return Err(ClassifierError::invalid_metadata(
                location,
                "metadata document declares no labels",
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for label in &self.labels {
            if !seen.insert(label.as_str()) {
                warn!(label = %label, "duplicate label in metadata");
            }
        }
        Ok(())
    }

    /// Ordered label list; index `i` names output slot `i`.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false for loaded metadata; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label for output slot `index`.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Model name declared by the document, if any.
    pub fn model_name(&self) -> Option<&str> {
        self.model_name.as_deref()
    }

    /// Input side length declared by the document, if any.
    pub fn image_size(&self) -> Option<u32> {
        self.image_size
    }
}
