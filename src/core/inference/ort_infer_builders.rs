use super::*;
use crate::core::config::{
    ClassifierConfig, OrtExecutionProvider, OrtGraphOptimizationLevel, OrtSessionConfig,
};
use ort::execution_providers::ExecutionProviderDispatch;
use ort::logging::LogLevel;
use ort::session::builder::{GraphOptimizationLevel, SessionBuilder};
use std::path::Path;
use tracing::{debug, warn};

impl OrtInfer {
    /// Creates a new OrtInfer instance with default ONNX Runtime settings and a single session.
    pub fn new(model_path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        Self::from_config(&ClassifierConfig::new(), model_path)
    }

    /// Creates a new OrtInfer instance from a [`ClassifierConfig`], applying the ORT
    /// session configuration and constructing the session pool.
    ///
    /// Tensor names not given in the configuration are taken from the first
    /// declared input and output of the model.
    pub fn from_config(
        config: &ClassifierConfig,
        model_path: impl AsRef<Path>,
    ) -> Result<Self, ClassifierError> {
        let path = model_path.as_ref();
        if !path.is_file() {
            return Err(ClassifierError::model_unavailable(
                path,
                "model file not found",
                None::<std::io::Error>,
            ));
        }

        let pool_size = config.get_session_pool_size();
        let mut sessions = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            let builder = Session::builder()?;
            let builder = match &config.ort_session {
                Some(cfg) => Self::apply_ort_config(builder, cfg)?,
                None => builder.with_log_level(LogLevel::Error)?,
            };
            let session = builder.commit_from_file(path).map_err(|e| {
                ClassifierError::model_unavailable(
                    path,
                    "failed to create ONNX session",
                    Some(e),
                )
            })?;
            sessions.push(session);
        }

        let first = sessions.first().ok_or_else(|| {
            ClassifierError::model_unavailable(path, "empty session pool", None::<std::io::Error>)
        })?;

        let input_name = match &config.input_name {
            Some(name) => name.clone(),
            None => first
                .inputs
                .first()
                .map(|i| i.name.clone())
                .ok_or_else(|| {
                    ClassifierError::model_unavailable(
                        path,
                        "model declares no inputs",
                        None::<std::io::Error>,
                    )
                })?,
        };
        let output_name = match &config.output_name {
            Some(name) => name.clone(),
            None => first
                .outputs
                .first()
                .map(|o| o.name.clone())
                .ok_or_else(|| {
                    ClassifierError::model_unavailable(
                        path,
                        "model declares no outputs",
                        None::<std::io::Error>,
                    )
                })?,
        };
        if !first.outputs.iter().any(|o| o.name == output_name) {
            return Err(ClassifierError::model_unavailable(
                path,
                format!("model has no output named '{}'", output_name),
                None::<std::io::Error>,
            ));
        }
        if !first.inputs.iter().any(|i| i.name == input_name) {
            return Err(ClassifierError::model_unavailable(
                path,
                format!("model has no input named '{}'", input_name),
                None::<std::io::Error>,
            ));
        }
        let num_classes = Self::declared_num_classes(first, &output_name);

        let model_name = config
            .model_name
            .clone()
            .or_else(|| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_string())
            })
            .unwrap_or_else(|| "unknown_model".to_string());

        debug!(
            model = %model_name,
            input = %input_name,
            output = %output_name,
            ?num_classes,
            pool_size,
            "ONNX session pool ready"
        );

        Ok(OrtInfer {
            sessions: sessions.into_iter().map(Mutex::new).collect(),
            next_idx: std::sync::atomic::AtomicUsize::new(0),
            input_name,
            output_name,
            num_classes,
            model_path: path.to_path_buf(),
            model_name,
            enable_logging: config.get_enable_logging(),
        })
    }

    fn apply_ort_config(
        mut builder: SessionBuilder,
        cfg: &OrtSessionConfig,
    ) -> Result<SessionBuilder, ort::Error> {
        builder = builder.with_log_level(Self::map_log_level(cfg.log_severity_level))?;
        if let Some(intra) = cfg.intra_threads {
            builder = builder.with_intra_threads(intra)?;
        }
        if let Some(inter) = cfg.inter_threads {
            builder = builder.with_inter_threads(inter)?;
        }
        if let Some(par) = cfg.parallel_execution {
            builder = builder.with_parallel_execution(par)?;
        }
        if let Some(level) = cfg.optimization_level {
            let mapped = match level {
                OrtGraphOptimizationLevel::DisableAll => GraphOptimizationLevel::Disable,
                OrtGraphOptimizationLevel::Level1 => GraphOptimizationLevel::Level1,
                OrtGraphOptimizationLevel::Level2 => GraphOptimizationLevel::Level2,
                OrtGraphOptimizationLevel::Level3 => GraphOptimizationLevel::Level3,
            };
            builder = builder.with_optimization_level(mapped)?;
        }
        if let Some(eps) = &cfg.execution_providers {
            let providers = Self::build_execution_providers(eps);
            if !providers.is_empty() {
                builder = builder.with_execution_providers(providers)?;
            }
        }
        Ok(builder)
    }

    fn map_log_level(level: Option<i32>) -> LogLevel {
        match level {
            Some(0) => LogLevel::Verbose,
            Some(1) => LogLevel::Info,
            Some(2) => LogLevel::Warning,
            Some(4) => LogLevel::Fatal,
            _ => LogLevel::Error,
        }
    }

    /// Builds execution providers from configuration.
    ///
    /// Providers whose cargo feature is disabled are skipped.
    fn build_execution_providers(eps: &[OrtExecutionProvider]) -> Vec<ExecutionProviderDispatch> {
        let mut providers = Vec::new();

        for ep in eps {
            match ep {
                OrtExecutionProvider::CPU => {
                    providers.push(ort::execution_providers::CPUExecutionProvider::default().build());
                }
                #[cfg(feature = "cuda")]
                OrtExecutionProvider::CUDA { device_id } => {
                    let mut cuda = ort::execution_providers::CUDAExecutionProvider::default();
                    if let Some(id) = device_id {
                        cuda = cuda.with_device_id(*id);
                    }
                    providers.push(cuda.build());
                }
                #[cfg(feature = "directml")]
                OrtExecutionProvider::DirectML { device_id } => {
                    let mut dml = ort::execution_providers::DirectMLExecutionProvider::default();
                    if let Some(id) = device_id {
                        dml = dml.with_device_id(*id);
                    }
                    providers.push(dml.build());
                }
                #[cfg(feature = "coreml")]
                OrtExecutionProvider::CoreML => {
                    providers
                        .push(ort::execution_providers::CoreMLExecutionProvider::default().build());
                }
                #[allow(unreachable_patterns)]
                other => {
                    warn!(
                        "Execution provider {:?} requested but its feature is not enabled, skipping",
                        other
                    );
                }
            }
        }

        providers
    }
}
