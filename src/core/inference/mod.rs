//! ONNX Runtime inference.
//!
//! [`OrtInfer`] runs an ONNX model on the CPU or an accelerated execution
//! provider; [`OrtBackend`] adapts it to the [`ModelBackend`](crate::core::traits::ModelBackend)
//! seam used by the model loader.

pub mod backend;
pub mod ort_infer;

pub use backend::OrtBackend;
pub use ort_infer::OrtInfer;
