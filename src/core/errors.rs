//! Error types for the classification pipeline.
//!
//! This module defines the errors that can occur while loading a model, acquiring
//! an image, running inference and ranking the output. Every error maps to a
//! [`Severity`] and a short user-facing message so that a presenter can show it
//! without inspecting the variant.

use crate::domain::Severity;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Boxed error used as the source of wrapped failures.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Convenient result alias for classification operations.
pub type ClassifierResult<T> = Result<T, ClassifierError>;

/// Stages of a single classification request.
///
/// Used to tag failures with the stage they happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Image decoding and validation.
    Acquisition,
    /// Resize and normalization into the input tensor.
    Preprocessing,
    /// Forward pass through the model.
    Inference,
    /// Pairing probabilities with labels and sorting.
    Ranking,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineStage::Acquisition => write!(f, "acquisition"),
            PipelineStage::Preprocessing => write!(f, "preprocessing"),
            PipelineStage::Inference => write!(f, "inference"),
            PipelineStage::Ranking => write!(f, "ranking"),
        }
    }
}

/// Errors raised by the classification pipeline.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// The label metadata document could not be read or parsed.
    #[error("metadata unavailable at '{}': {message}", location.display())]
    MetadataUnavailable {
        /// Location of the metadata document.
        location: PathBuf,
        /// What went wrong.
        message: String,
        /// The underlying error, if any.
        #[source]
        source: Option<BoxedError>,
    },

    /// The model could not be fetched or initialized.
    #[error("model unavailable at '{}': {message}", location.display())]
    ModelUnavailable {
        /// Location of the model definition.
        location: PathBuf,
        /// What went wrong.
        message: String,
        /// The underlying error, if any.
        #[source]
        source: Option<BoxedError>,
    },

    /// The supplied file is not declared as an image.
    #[error("invalid image type: '{mime}'")]
    InvalidImageType {
        /// The declared MIME type.
        mime: String,
    },

    /// The image bytes could not be decoded into RGB pixels.
    #[error("image decode failed: {context}")]
    ImageDecodeFailure {
        /// Additional context about the failure.
        context: String,
        /// The underlying decoder error, if any.
        #[source]
        source: Option<BoxedError>,
    },

    /// Prediction vector and label list disagree in length.
    #[error("shape mismatch in {stage}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        /// Stage where the mismatch was detected.
        stage: PipelineStage,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// Classification was requested before the model or an image was available.
    #[error("not ready: {reason}")]
    NotReady {
        /// Which precondition is missing.
        reason: String,
    },

    /// Another classification is still in flight.
    #[error("a classification is already in progress")]
    Busy,

    /// The model has already been loaded, or failed to load, in this session.
    #[error("model load already attempted (state: {state})")]
    LoadAlreadyAttempted {
        /// The state the session is in.
        state: String,
    },

    /// The inference engine failed to run the model.
    #[error("inference failed for model '{model}': {context}")]
    Inference {
        /// Name of the model.
        model: String,
        /// Additional context about the failure.
        context: String,
        /// The underlying error.
        #[source]
        source: Option<BoxedError>,
    },

    /// Configuration problem.
    #[error(transparent)]
    Config(#[from] crate::core::config::ConfigError),

    /// Error from the ONNX Runtime session.
    #[error(transparent)]
    Session(#[from] ort::Error),

    /// Error from tensor shape operations.
    #[error("tensor operation")]
    Tensor(#[from] ndarray::ShapeError),
}

impl ClassifierError {
    /// Creates a `MetadataUnavailable` error with an underlying cause.
    pub fn metadata_unavailable(
        location: &Path,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::MetadataUnavailable {
            location: location.to_path_buf(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a `MetadataUnavailable` error without an underlying cause.
    pub fn invalid_metadata(location: &Path, message: impl Into<String>) -> Self {
        Self::MetadataUnavailable {
            location: location.to_path_buf(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a `ModelUnavailable` error.
    ///
    /// # Arguments
    ///
    /// * `location` - Path of the model definition that failed.
    /// * `message` - Short description of the failure.
    /// * `source` - The underlying error, if any.
    pub fn model_unavailable<E>(location: &Path, message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ModelUnavailable {
            location: location.to_path_buf(),
            message: message.into(),
            source: source.map(|e| Box::new(e) as BoxedError),
        }
    }

    /// Creates an `InvalidImageType` error for the given MIME type.
    pub fn invalid_image_type(mime: impl Into<String>) -> Self {
        Self::InvalidImageType { mime: mime.into() }
    }

    /// Creates an `ImageDecodeFailure` error.
    pub fn image_decode<E>(context: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageDecodeFailure {
            context: context.into(),
            source: source.map(|e| Box::new(e) as BoxedError),
        }
    }

    /// Creates a `ShapeMismatch` error.
    pub fn shape_mismatch(stage: PipelineStage, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            stage,
            expected,
            actual,
        }
    }

    /// Creates a `NotReady` error.
    pub fn not_ready(reason: impl Into<String>) -> Self {
        Self::NotReady {
            reason: reason.into(),
        }
    }

    /// Creates an `Inference` error.
    ///
    /// # Arguments
    ///
    /// * `model` - Name of the model that failed.
    /// * `context` - What the engine was doing.
    /// * `source` - The underlying error, if any.
    pub fn inference<E>(model: &str, context: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Inference {
            model: model.to_string(),
            context: context.into(),
            source: source.map(|e| Box::new(e) as BoxedError),
        }
    }

    /// Severity to use when showing this error to a user.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Busy => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Whether the error signals a broken model/metadata pairing rather than user error.
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }

    /// Short message suitable for a transient notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MetadataUnavailable { .. } | Self::ModelUnavailable { .. } | Self::Session(_) => {
                "Error loading the model. Check that the model files are in the model folder."
            }
            Self::InvalidImageType { .. } => "Please select a valid image file.",
            Self::ImageDecodeFailure { .. } => "Error loading the image. Please try again.",
            Self::NotReady { .. } => "Model or image not loaded correctly.",
            Self::Busy => "A classification is already running. Please wait.",
            Self::LoadAlreadyAttempted { .. } => "The model has already been loaded.",
            Self::ShapeMismatch { .. }
            | Self::Inference { .. }
            | Self::Tensor(_)
            | Self::Config(_) => "Error classifying the image. Please try again.",
        }
    }
}

impl From<image::ImageError> for ClassifierError {
    fn from(error: image::ImageError) -> Self {
        Self::image_decode("decoder rejected the image data", Some(error))
    }
}
