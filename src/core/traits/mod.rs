//! Trait definitions for the classification pipeline.
//!
//! The pipeline talks to the machine-learning runtime through two seams:
//! [`InferenceEngine`], which runs a loaded model on one input tensor, and
//! [`ModelBackend`], which turns a model location into an engine. Production
//! code uses the ONNX Runtime implementations in [`crate::core::inference`];
//! tests plug in deterministic fakes.

use crate::core::errors::ClassifierError;
use crate::core::tensor::{InputTensor, PredictionVector};
use std::fmt::Debug;
use std::path::Path;

/// Trait for inference engine operations.
///
/// Implementations must be deterministic for a fixed model and input, and own
/// any internal buffers they allocate; the caller keeps ownership of the input
/// tensor and receives ownership of the returned vector.
pub trait InferenceEngine: Send + Sync + Debug {
    /// Runs the model forward on a single input.
    ///
    /// # Arguments
    ///
    /// * `input` - Preprocessed `[1, H, W, 3]` tensor
    ///
    /// # Returns
    ///
    /// One probability per class, in class-index order
    fn predict(&self, input: &InputTensor) -> Result<PredictionVector, ClassifierError>;

    /// Human-readable model name used in logs and errors.
    fn model_name(&self) -> &str;

    /// Number of output classes, when the model declares a static output shape.
    fn num_classes(&self) -> Option<usize> {
        None
    }

    /// Input shape the model declares, `[N, H, W, C]`, with `-1` for dynamic axes.
    fn input_dims(&self) -> Option<Vec<i64>> {
        None
    }
}

/// Trait for backends that can initialize an inference engine from a model location.
pub trait ModelBackend {
    /// Engine produced by this backend.
    type Engine: InferenceEngine;

    /// Fetches and initializes the model at `location`.
    fn load_engine(&self, location: &Path) -> Result<Self::Engine, ClassifierError>;
}
