//! The classification pipeline.
//!
//! This module ties the building blocks together: loading a model with its
//! labels, acquiring images, and running one image at a time through
//! preprocessing, inference and ranking while reporting to a [`Presenter`].

pub mod acquire;
pub mod loader;
pub mod presenter;
pub mod session;
mod stats;

pub use acquire::ImageAcquirer;
pub use loader::{ModelLoader, declared_spatial_dims};
pub use presenter::{Presenter, TracingPresenter};
pub use session::{ClassificationSession, ClassifyPhase, MODEL_LOADED_NOTICE};
pub use stats::ClassificationStats;
