//! ONNX Runtime inference engine with a small session pool.

use crate::core::{
    errors::ClassifierError,
    tensor::{InputTensor, PredictionVector},
    traits::InferenceEngine,
};
use ort::{session::Session, value::ValueType};
use std::sync::Mutex;

#[path = "ort_infer_builders.rs"]
mod ort_infer_builders;
#[path = "ort_infer_execution.rs"]
mod ort_infer_execution;
#[cfg(test)]
#[path = "ort_infer_tests.rs"]
mod ort_infer_tests;

pub struct OrtInfer {
    pub(super) sessions: Vec<Mutex<Session>>,
    pub(super) next_idx: std::sync::atomic::AtomicUsize,
    pub(super) input_name: String,
    pub(super) output_name: String,
    pub(super) num_classes: Option<usize>,
    pub(super) model_path: std::path::PathBuf,
    pub(super) model_name: String,
    pub(super) enable_logging: bool,
}

impl std::fmt::Debug for OrtInfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrtInfer")
            .field("sessions", &self.sessions.len())
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("num_classes", &self.num_classes)
            .field("model_path", &self.model_path)
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl OrtInfer {
    /// Declared shape of the input named `input_name`, read from the first session.
    ///
    /// Dynamic dimensions (e.g., -1) are returned as-is.
    pub fn primary_input_shape(&self) -> Option<Vec<i64>> {
        let session = self.sessions.first()?.lock().ok()?;
        let input = session.inputs.iter().find(|i| i.name == self.input_name)?;
        match &input.input_type {
            ValueType::Tensor { shape, .. } => Some(shape.iter().copied().collect()),
            _ => None,
        }
    }

    /// Returns the model path associated with this inference engine.
    pub fn model_path(&self) -> &std::path::Path {
        &self.model_path
    }

    /// Name of the input tensor fed by [`InferenceEngine::predict`].
    pub fn input_name(&self) -> &str {
        &self.input_name
    }

    /// Name of the output tensor read by [`InferenceEngine::predict`].
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// Number of pooled sessions.
    pub fn pool_size(&self) -> usize {
        self.sessions.len()
    }

    /// Static class count of the output named `output_name`, if the model declares one.
    pub(super) fn declared_num_classes(session: &Session, output_name: &str) -> Option<usize> {
        let output = session.outputs.iter().find(|o| o.name == output_name)?;
        match &output.output_type {
            ValueType::Tensor { shape, .. } => shape
                .last()
                .copied()
                .filter(|&d| d > 0)
                .map(|d| d as usize),
            _ => None,
        }
    }
}

impl InferenceEngine for OrtInfer {
    fn predict(&self, input: &InputTensor) -> Result<PredictionVector, ClassifierError> {
        self.run(input)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn num_classes(&self) -> Option<usize> {
        self.num_classes
    }

    fn input_dims(&self) -> Option<Vec<i64>> {
        self.primary_input_shape()
    }
}
