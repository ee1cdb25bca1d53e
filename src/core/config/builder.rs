//! Classifier configuration and its builder-style setters.

use super::errors::{ConfigError, ConfigValidator};
use super::onnx::OrtSessionConfig;
use crate::core::constants::{
    DEFAULT_INPUT_SIZE, DEFAULT_METADATA_PATH, DEFAULT_MODEL_PATH, DEFAULT_SESSION_POOL_SIZE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for loading a classification model.
///
/// Every field has a default, so a JSON document only needs to name what it
/// overrides:
///
/// ```rust
/// use oar_classify::core::config::ClassifierConfig;
///
/// let config: ClassifierConfig = serde_json::from_str(r#"{ "model_name": "pets" }"#).unwrap();
/// assert_eq!(config.model_name.as_deref(), Some("pets"));
/// assert_eq!(config.get_input_shape(), (224, 224));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Location of the ONNX model definition.
    pub model_path: PathBuf,
    /// Location of the label metadata document.
    pub metadata_path: PathBuf,
    /// Display name of the model; defaults to the metadata `modelName` or the file stem.
    pub model_name: Option<String>,
    /// Preprocessor target size as (width, height).
    pub input_shape: Option<(u32, u32)>,
    /// Name of the model input tensor; the first session input when unset.
    pub input_name: Option<String>,
    /// Name of the model output tensor; the first session output when unset.
    pub output_name: Option<String>,
    /// Whether to emit per-request timing logs.
    pub enable_logging: Option<bool>,
    /// Number of ONNX Runtime sessions kept for the model (>= 1).
    pub session_pool_size: Option<usize>,
    /// ONNX Runtime session configuration.
    pub ort_session: Option<OrtSessionConfig>,
}

impl ClassifierConfig {
    /// Creates a configuration pointing at the default model bundle.
    pub fn new() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            metadata_path: PathBuf::from(DEFAULT_METADATA_PATH),
            model_name: None,
            input_shape: Some((DEFAULT_INPUT_SIZE, DEFAULT_INPUT_SIZE)),
            input_name: None,
            output_name: None,
            enable_logging: Some(true),
            session_pool_size: Some(DEFAULT_SESSION_POOL_SIZE),
            ort_session: None,
        }
    }

    /// Creates a configuration for a model bundle directory containing
    /// `model.onnx` and `metadata.json`.
    pub fn from_model_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model_path: dir.join("model.onnx"),
            metadata_path: dir.join("metadata.json"),
            ..Self::new()
        }
    }

    /// Reads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid configuration document.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Sets the model path.
    pub fn model_path(mut self, model_path: impl Into<PathBuf>) -> Self {
        self.model_path = model_path.into();
        self
    }

    /// Sets the metadata path.
    pub fn metadata_path(mut self, metadata_path: impl Into<PathBuf>) -> Self {
        self.metadata_path = metadata_path.into();
        self
    }

    /// Sets the model name.
    pub fn model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = Some(model_name.into());
        self
    }

    /// Sets the preprocessor target size as (width, height).
    pub fn input_shape(mut self, input_shape: (u32, u32)) -> Self {
        self.input_shape = Some(input_shape);
        self
    }

    /// Sets the model input tensor name.
    pub fn input_name(mut self, input_name: impl Into<String>) -> Self {
        self.input_name = Some(input_name.into());
        self
    }

    /// Sets the model output tensor name.
    pub fn output_name(mut self, output_name: impl Into<String>) -> Self {
        self.output_name = Some(output_name.into());
        self
    }

    /// Enables or disables per-request timing logs.
    pub fn enable_logging(mut self, enable: bool) -> Self {
        self.enable_logging = Some(enable);
        self
    }

    /// Sets the session pool size.
    pub fn session_pool_size(mut self, size: usize) -> Self {
        self.session_pool_size = Some(size);
        self
    }

    /// Sets the ONNX Runtime session configuration.
    pub fn ort_session(mut self, cfg: OrtSessionConfig) -> Self {
        self.ort_session = Some(cfg);
        self
    }

    /// Effective preprocessor target size.
    pub fn get_input_shape(&self) -> (u32, u32) {
        self.input_shape
            .unwrap_or((DEFAULT_INPUT_SIZE, DEFAULT_INPUT_SIZE))
    }

    /// Effective session pool size.
    pub fn get_session_pool_size(&self) -> usize {
        self.session_pool_size
            .unwrap_or(DEFAULT_SESSION_POOL_SIZE)
            .max(1)
    }

    /// Whether per-request timing logs are enabled.
    pub fn get_enable_logging(&self) -> bool {
        self.enable_logging.unwrap_or(true)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigValidator for ClassifierConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = self.get_input_shape();
        self.validate_image_dimensions(width, height)?;

        if let Some(size) = self.session_pool_size {
            self.validate_positive_usize(size, "session_pool_size")?;
        }

        self.validate_non_blank(self.model_name.as_deref(), "model_name")?;
        self.validate_non_blank(self.input_name.as_deref(), "input_name")?;
        self.validate_non_blank(self.output_name.as_deref(), "output_name")?;

        if let Some(ort) = &self.ort_session {
            if let Some(intra) = ort.intra_threads {
                self.validate_thread_count(intra)?;
            }
            if let Some(inter) = ort.inter_threads {
                self.validate_thread_count(inter)?;
            }
        }

        if self.model_path.as_os_str().is_empty() || self.metadata_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfig {
                message: "model_path and metadata_path must be set".to_string(),
            });
        }

        Ok(())
    }

    fn get_defaults() -> Self {
        Self::new()
    }
}
