//! Configuration management for the classifier.
//!
//! This module provides the classifier configuration, validation traits, and
//! ONNX Runtime session settings.

pub mod builder;
pub mod errors;
pub mod onnx;

pub use builder::ClassifierConfig;
pub use errors::{ConfigError, ConfigValidator, ConfigValidatorExt};
pub use onnx::*;
