//! The core module of the classifier.
//!
//! This module contains the fundamental building blocks shared by every stage:
//! - Configuration management
//! - Constants describing the model input contract
//! - Error handling
//! - Tensor types passed between stages
//! - Inference engine traits and the ONNX Runtime implementation

pub mod config;
pub mod constants;
pub mod errors;
pub mod inference;
pub mod tensor;
pub mod traits;

pub use config::{ClassifierConfig, ConfigError, ConfigValidator, OrtSessionConfig};
pub use constants::*;
pub use errors::{ClassifierError, ClassifierResult, PipelineStage};
pub use inference::{OrtBackend, OrtInfer};
pub use tensor::{InputTensor, PredictionVector};
pub use traits::{InferenceEngine, ModelBackend};
