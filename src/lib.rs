//! # OAR Classify
//!
//! A Rust library that classifies single images with ONNX models exported from
//! image-classification trainers, and reports every label ranked by probability.
//!
//! ## Features
//!
//! - One-shot model loading from a model file plus a label metadata document
//! - Image acquisition with MIME validation and RGB decoding
//! - Nearest-neighbor preprocessing into `[1, 224, 224, 3]` tensors scaled to `[0, 1]`
//! - ONNX Runtime integration with a session pool and optional GPU providers
//! - Stable ranking of every class with two-decimal percentages
//! - A session object that gates classification on model and image state
//!
//! ## Modules
//!
//! * [`core`] - Configuration, errors, tensors, inference traits and the ONNX Runtime engine
//! * [`domain`] - Label metadata, image samples, model state and notifications
//! * [`pipeline`] - Model loader, image acquirer, presenter trait and classification session
//! * [`processors`] - Preprocessing and result ranking
//! * [`utils`] - Image decoding helpers and logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use oar_classify::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClassifierConfig::from_model_dir("model");
//! let loader = ModelLoader::new(OrtBackend::new(config.clone()))
//!     .with_input_shape(config.get_input_shape());
//!
//! let mut session: ClassificationSession<OrtInfer, _> =
//!     ClassificationSession::from_config(TracingPresenter::new(), &config)?;
//! session.load_model(&loader, &config.model_path, &config.metadata_path)?;
//!
//! session.select_path(Path::new("cat.jpg"))?;
//! let result = session.classify()?;
//! if let Some(best) = result.best() {
//!     println!("{}: {}%", best.label, best.percentage());
//! }
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod core;
pub mod domain;

pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
///
/// ```rust
/// use oar_classify::prelude::*;
/// ```
///
/// Included items cover loading a model, running a session and reading results.
/// For custom engines or configuration details, import from
/// `oar_classify::core::traits` and `oar_classify::core::config`.
pub mod prelude {
    // Pipeline (essential)
    pub use crate::pipeline::{
        ClassificationSession, ImageAcquirer, ModelLoader, Presenter, TracingPresenter,
    };

    // Configuration and inference
    pub use crate::core::{ClassifierConfig, OrtBackend, OrtInfer};

    // Results and state
    pub use crate::domain::{ImageSample, ModelMetadata, ModelStatus, Notification, Severity};
    pub use crate::processors::{RankedEntry, RankedResult};

    // Error Handling (essential)
    pub use crate::core::{ClassifierError, ClassifierResult};

    // Logging
    pub use crate::utils::init_tracing;
}
