use super::*;
use crate::core::config::{ClassifierConfig, OrtSessionConfig};

#[test]
fn test_missing_model_is_model_unavailable() {
    let result = OrtInfer::new("dummy_path.onnx");
    assert!(matches!(
        result,
        Err(ClassifierError::ModelUnavailable { .. })
    ));
}

#[test]
fn test_from_config_respects_session_pool_size_on_missing_file() {
    let config = ClassifierConfig::new()
        .session_pool_size(3)
        .ort_session(OrtSessionConfig::new().with_intra_threads(1));
    let result = OrtInfer::from_config(&config, "dummy_path.onnx");
    assert!(result.is_err());
}

#[test]
fn test_garbage_model_file_is_rejected() {
    use std::io::Write;

    let mut file = tempfile::Builder::new().suffix(".onnx").tempfile().unwrap();
    file.write_all(b"definitely not a protobuf").unwrap();

    let result = OrtInfer::new(file.path());
    assert!(result.is_err());
}
