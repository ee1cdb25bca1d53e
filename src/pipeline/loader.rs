//! Model loading.
//!
//! Loading reads the label metadata first and only then asks the backend for an
//! engine, so a missing or malformed metadata document never triggers a model
//! fetch.

use crate::core::errors::ClassifierError;
use crate::core::traits::{InferenceEngine, ModelBackend};
use crate::domain::{LoadedModel, ModelMetadata};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Loads a model and its metadata through a [`ModelBackend`].
#[derive(Debug)]
pub struct ModelLoader<B> {
    backend: B,
    /// Preprocessor target as (width, height), used to check `imageSize`.
    input_shape: (u32, u32),
}

impl<B: ModelBackend> ModelLoader<B> {
    pub fn new(backend: B) -> Self {
        let size = crate::core::constants::DEFAULT_INPUT_SIZE;
        Self {
            backend,
            input_shape: (size, size),
        }
    }

    /// Sets the preprocessor target the metadata `imageSize` is checked against.
    pub fn with_input_shape(mut self, input_shape: (u32, u32)) -> Self {
        self.input_shape = input_shape;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Reads the metadata at `metadata_location`, then initializes the model at
    /// `model_location`.
    ///
    /// # Errors
    ///
    /// * `MetadataUnavailable` - The metadata could not be read or parsed; the
    ///   backend is not called
    /// * `ModelUnavailable` - The backend failed to produce an engine
    pub fn load(
        &self,
        model_location: &Path,
        metadata_location: &Path,
    ) -> Result<LoadedModel<B::Engine>, ClassifierError> {
        let start = Instant::now();

        let metadata = ModelMetadata::from_path(metadata_location)?;
        debug!(
            "Loaded {} labels from {}",
            metadata.len(),
            metadata_location.display()
        );
        self.check_image_size(&metadata);

        let engine = self
            .backend
            .load_engine(model_location)
            .map_err(|e| match e {
                ClassifierError::ModelUnavailable { .. } => e,
                other => ClassifierError::model_unavailable(
                    model_location,
                    "failed to initialize model",
                    Some(other),
                ),
            })?;

        let model = LoadedModel::new(engine, metadata);
        self.check_class_count(&model);
        self.check_input_dims(&model);

        info!(
            "Model '{}' ready with {} classes in {:.2?}",
            model.display_name(),
            model.labels().len(),
            start.elapsed()
        );
        Ok(model)
    }

    fn check_image_size(&self, metadata: &ModelMetadata) {
        if let Some(size) = metadata.image_size() {
            let (width, height) = self.input_shape;
            if size != width || size != height {
                warn!(
                    "Metadata declares imageSize {size}, but images are resized to {width}x{height}"
                );
            }
        }
    }

    fn check_class_count(&self, model: &LoadedModel<B::Engine>) {
        if let Some(classes) = model.engine().num_classes() {
            let labels = model.labels().len();
            if classes != labels {
                warn!(
                    "Model '{}' outputs {classes} classes but metadata lists {labels} labels; \
                     classification will fail with a shape mismatch",
                    model.engine().model_name()
                );
            }
        }
    }

    fn check_input_dims(&self, model: &LoadedModel<B::Engine>) {
        let Some(dims) = model.engine().input_dims() else {
            return;
        };
        let Some(declared) = declared_spatial_dims(&dims) else {
            debug!("Model input {dims:?} has dynamic spatial axes");
            return;
        };
        if declared != self.input_shape {
            let (width, height) = declared;
            let (target_w, target_h) = self.input_shape;
            warn!(
                "Model '{}' declares input {dims:?} ({width}x{height}), \
                 but images are resized to {target_w}x{target_h}",
                model.engine().model_name()
            );
        }
    }
}

/// Width and height of a declared `[N, H, W, C]` input shape.
///
/// `None` when the shape has another rank or either spatial axis is dynamic.
pub fn declared_spatial_dims(dims: &[i64]) -> Option<(u32, u32)> {
    let [_, height, width, _] = dims else {
        return None;
    };
    let width = u32::try_from(*width).ok().filter(|&w| w > 0)?;
    let height = u32::try_from(*height).ok().filter(|&h| h > 0)?;
    Some((width, height))
}
