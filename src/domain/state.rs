//! Model lifecycle state.
//!
//! A session starts in [`ModelState::Unloaded`], moves to
//! [`ModelState::Loading`] when a load begins and ends in either
//! [`ModelState::Ready`] or [`ModelState::Failed`]. Both end states are terminal.

use crate::core::traits::InferenceEngine;
use crate::domain::metadata::ModelMetadata;
use serde::Serialize;
use std::sync::Arc;

/// A model that finished loading: the engine plus its label metadata.
///
/// Both halves are read-only after loading and cheap to clone.
#[derive(Debug)]
pub struct LoadedModel<E> {
    engine: Arc<E>,
    metadata: Arc<ModelMetadata>,
}

impl<E> Clone for LoadedModel<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            metadata: Arc::clone(&self.metadata),
        }
    }
}

impl<E: InferenceEngine> LoadedModel<E> {
    pub fn new(engine: E, metadata: ModelMetadata) -> Self {
        Self {
            engine: Arc::new(engine),
            metadata: Arc::new(metadata),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn labels(&self) -> &[String] {
        self.metadata.labels()
    }

    /// Display name: the metadata `modelName` when present, else the engine's name.
    pub fn display_name(&self) -> &str {
        self.metadata
            .model_name()
            .unwrap_or_else(|| self.engine.model_name())
    }
}

/// Lifecycle of the model owned by a session.
#[derive(Debug)]
pub enum ModelState<E> {
    Unloaded,
    Loading,
    Ready(LoadedModel<E>),
    Failed(String),
}

impl<E: InferenceEngine> ModelState<E> {
    pub fn is_ready(&self) -> bool {
        matches!(self, ModelState::Ready(_))
    }

    /// `Ready` and `Failed` never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ModelState::Ready(_) | ModelState::Failed(_))
    }

    pub fn loaded(&self) -> Option<&LoadedModel<E>> {
        match self {
            ModelState::Ready(model) => Some(model),
            _ => None,
        }
    }

    /// Handle-free snapshot for presenters.
    pub fn status(&self) -> ModelStatus {
        match self {
            ModelState::Unloaded => ModelStatus::Unloaded,
            ModelState::Loading => ModelStatus::Loading,
            ModelState::Ready(model) => ModelStatus::Ready {
                model_name: model.display_name().to_string(),
                labels: model.labels().to_vec(),
            },
            ModelState::Failed(reason) => ModelStatus::Failed {
                reason: reason.clone(),
            },
        }
    }
}

impl<E> Default for ModelState<E> {
    fn default() -> Self {
        ModelState::Unloaded
    }
}

/// What a presenter needs to know about the model state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ModelStatus {
    Unloaded,
    Loading,
    Ready {
        model_name: String,
        /// Class names in output order, for display.
        labels: Vec<String>,
    },
    Failed {
        reason: String,
    },
}

impl std::fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelStatus::Unloaded => write!(f, "unloaded"),
            ModelStatus::Loading => write!(f, "loading"),
            ModelStatus::Ready { model_name, labels } => {
                write!(f, "ready ({}, {} classes)", model_name, labels.len())
            }
            ModelStatus::Failed { reason } => write!(f, "failed: {}", reason),
        }
    }
}
