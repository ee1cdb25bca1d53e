//! ONNX Runtime model backend.

use crate::core::config::ClassifierConfig;
use crate::core::errors::ClassifierError;
use crate::core::inference::OrtInfer;
use crate::core::traits::ModelBackend;
use std::path::Path;

/// Creates [`OrtInfer`] engines using the session settings of a [`ClassifierConfig`].
#[derive(Debug, Clone, Default)]
pub struct OrtBackend {
    config: ClassifierConfig,
}

impl OrtBackend {
    /// Creates a backend that applies `config` to every engine it builds.
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// The configuration applied to new engines.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}

impl ModelBackend for OrtBackend {
    type Engine = OrtInfer;

    fn load_engine(&self, location: &Path) -> Result<OrtInfer, ClassifierError> {
        OrtInfer::from_config(&self.config, location)
    }
}
