use super::*;
use ort::value::TensorRef;
use std::sync::atomic::Ordering;
use tracing::debug;

impl OrtInfer {
    /// Runs one forward pass and copies the class probabilities out of the session.
    ///
    /// Accepts outputs shaped `[1, N]` or `[N]`. The ORT output buffers are released
    /// before this returns.
    pub(super) fn run(&self, input: &InputTensor) -> Result<PredictionVector, ClassifierError> {
        let start = std::time::Instant::now();
        let input_shape = input.shape();

        let input_tensor = TensorRef::from_array_view(input.view()).map_err(|e| {
            ClassifierError::inference(
                &self.model_name,
                format!("failed to convert input tensor with shape {:?}", input_shape),
                Some(e),
            )
        })?;
        let inputs = ort::inputs![self.input_name.as_str() => input_tensor];

        let idx = self.next_idx.fetch_add(1, Ordering::Relaxed) % self.sessions.len();
        let mut session_guard = self.sessions[idx].lock().map_err(|_| {
            ClassifierError::inference(
                &self.model_name,
                format!(
                    "failed to acquire session lock for session {}/{}",
                    idx,
                    self.sessions.len()
                ),
                None::<std::io::Error>,
            )
        })?;

        let outputs = session_guard.run(inputs).map_err(|e| {
            ClassifierError::inference(
                &self.model_name,
                format!(
                    "forward pass failed with input '{}' -> output '{}'",
                    self.input_name, self.output_name
                ),
                Some(e),
            )
        })?;

        let (output_shape, output_data) = outputs[self.output_name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(|e| {
                ClassifierError::inference(
                    &self.model_name,
                    format!("failed to extract output tensor '{}' as f32", self.output_name),
                    Some(e),
                )
            })?;

        let dims: Vec<i64> = output_shape.iter().copied().collect();
        let num_classes = match dims.as_slice() {
            [n] => *n as usize,
            [1, n] => *n as usize,
            _ => {
                return Err(ClassifierError::inference(
                    &self.model_name,
                    format!(
                        "expected output shape [1, N] or [N] for input {:?}, got {:?}",
                        input_shape, dims
                    ),
                    None::<std::io::Error>,
                ));
            }
        };

        if output_data.len() != num_classes {
            return Err(ClassifierError::inference(
                &self.model_name,
                format!(
                    "output data size mismatch: expected {}, got {}",
                    num_classes,
                    output_data.len()
                ),
                None::<std::io::Error>,
            ));
        }

        if self.enable_logging {
            debug!(
                model = %self.model_name,
                session = idx,
                classes = num_classes,
                elapsed = ?start.elapsed(),
                "forward pass complete"
            );
        }

        Ok(PredictionVector::from(output_data.to_vec()))
    }
}
