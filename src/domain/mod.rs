//! Domain-level structures shared across the classifier.
//!
//! This module groups the label metadata, decoded image samples, the model
//! lifecycle state and the notification types presenters display.

pub mod metadata;
pub mod notification;
pub mod sample;
pub mod state;

pub use metadata::ModelMetadata;
pub use notification::{Notification, Severity};
pub use sample::ImageSample;
pub use state::{LoadedModel, ModelState, ModelStatus};
