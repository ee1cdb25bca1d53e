//! Tensor types exchanged between pipeline stages.
//!
//! [`InputTensor`] is produced by the preprocessor and consumed by an inference
//! engine; [`PredictionVector`] is produced by the engine and consumed by the
//! ranker. Both are owned by exactly one classification request and are dropped
//! as soon as their consumer has read them.

use crate::core::constants::{INPUT_BATCH, INPUT_CHANNELS};
use crate::core::errors::{ClassifierError, PipelineStage};
use ndarray::{Array1, Array4, ArrayView4};

/// Four-dimensional model input in NHWC layout, values in `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTensor {
    data: Array4<f32>,
}

impl InputTensor {
    /// Wraps an NHWC array, checking the batch and channel dimensions.
    pub fn new(data: Array4<f32>) -> Result<Self, ClassifierError> {
        let shape = data.shape();
        if shape[0] != INPUT_BATCH {
            return Err(ClassifierError::shape_mismatch(
                PipelineStage::Preprocessing,
                INPUT_BATCH,
                shape[0],
            ));
        }
        if shape[3] != INPUT_CHANNELS {
            return Err(ClassifierError::shape_mismatch(
                PipelineStage::Preprocessing,
                INPUT_CHANNELS,
                shape[3],
            ));
        }
        Ok(Self { data })
    }

    /// Shape as `[batch, height, width, channels]`.
    pub fn shape(&self) -> [usize; 4] {
        let s = self.data.shape();
        [s[0], s[1], s[2], s[3]]
    }

    /// Borrowed view of the tensor data.
    pub fn view(&self) -> ArrayView4<'_, f32> {
        self.data.view()
    }

    /// Total number of scalar values.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the tensor holds no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `(y, x, channel)` of the single batch element.
    pub fn get(&self, y: usize, x: usize, channel: usize) -> Option<f32> {
        self.data.get((0, y, x, channel)).copied()
    }

    /// Consumes the tensor and returns the underlying array.
    pub fn into_inner(self) -> Array4<f32> {
        self.data
    }
}

/// Per-class probabilities returned by an inference engine.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionVector {
    values: Array1<f32>,
}

impl PredictionVector {
    /// Number of classes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector holds no classes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Probabilities in class-index order.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.values.iter().copied()
    }

    /// Probability of class `index`.
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Sum of all probabilities; not guaranteed to be exactly 1.0.
    pub fn sum(&self) -> f32 {
        self.values.sum()
    }

    /// Copies the probabilities into a plain vector.
    pub fn to_vec(&self) -> Vec<f32> {
        self.values.to_vec()
    }
}

impl From<Vec<f32>> for PredictionVector {
    fn from(values: Vec<f32>) -> Self {
        Self {
            values: Array1::from(values),
        }
    }
}

impl From<Array1<f32>> for PredictionVector {
    fn from(values: Array1<f32>) -> Self {
        Self { values }
    }
}
