//! Image Classification Example
//!
//! Loads a classification model bundle (`model.onnx` + `metadata.json`),
//! classifies each input image and prints every class with its probability.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example classify -- [OPTIONS] <IMAGES>...
//! ```
//!
//! # Arguments
//!
//! * `-m, --model-dir` - Directory holding `model.onnx` and `metadata.json`
//! * `-c, --config` - JSON configuration file; overrides `--model-dir`
//! * `-k, --top-k` - Number of classes to print per image (default: all)
//! * `--device` - Device to use for inference (e.g., 'cpu', 'cuda', 'cuda:0')
//! * `<IMAGES>...` - Paths to input images to process
//!
//! # Example
//!
//! ```bash
//! cargo run --example classify -- -m model --device cuda cat.jpg dog.png
//! ```

mod common;

use clap::Parser;
use common::{parse_device, validate_image_paths};
use oar_classify::core::config::{ConfigValidatorExt, OrtSessionConfig};
use oar_classify::prelude::*;
use std::path::Path;
use tracing::{error, info};

/// Command-line arguments for the classification example
#[derive(Parser)]
#[command(name = "classify")]
#[command(about = "Image Classification Example - ranks every label for each image")]
struct Args {
    /// Directory holding model.onnx and metadata.json
    #[arg(short, long, default_value = "model")]
    model_dir: String,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Number of classes to print per image
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Paths to input images to process
    #[arg(required = true)]
    images: Vec<String>,

    /// Device to use for inference (e.g., 'cpu', 'cuda', 'cuda:0')
    #[arg(long, default_value = "cpu")]
    device: String,
}

/// Prints results to stdout with a percentage bar per class.
struct ConsolePresenter {
    top_k: Option<usize>,
}

impl Presenter for ConsolePresenter {
    fn on_model_state_changed(&mut self, status: &ModelStatus) {
        info!("Model {status}");
        if let ModelStatus::Ready { labels, .. } = status {
            info!("Classes: {}", labels.join(", "));
        }
    }

    fn on_classification_result(&mut self, result: &RankedResult) {
        let shown = match self.top_k {
            Some(k) => result.top(k),
            None => result.entries(),
        };
        let width = shown.iter().map(|e| e.label.len()).max().unwrap_or(0);
        for entry in shown {
            let filled = (entry.probability.clamp(0.0, 1.0) * 30.0).round() as usize;
            println!(
                "  {:<width$}  {:>6}%  {}{}",
                entry.label,
                entry.percentage(),
                "#".repeat(filled),
                ".".repeat(30 - filled),
            );
        }
    }

    fn on_error(&mut self, message: &str, severity: Severity) {
        let notification = Notification::new(message, severity);
        error!(ttl_ms = notification.ttl.as_millis() as u64, "{notification}");
    }

    fn on_notice(&mut self, message: &str, severity: Severity) {
        let notification = Notification::new(message, severity);
        info!(ttl_ms = notification.ttl.as_millis() as u64, "{notification}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args = Args::parse();

    let images = validate_image_paths(&args.images)?;

    let mut config = match &args.config {
        Some(path) => ClassifierConfig::from_json_file(path)?,
        None => ClassifierConfig::from_model_dir(&args.model_dir),
    };
    let ort = config
        .ort_session
        .take()
        .unwrap_or_else(OrtSessionConfig::new)
        .with_execution_providers(parse_device(&args.device)?);
    let config = config.ort_session(ort).validate_and_wrap()?;

    let loader = ModelLoader::new(OrtBackend::new(config.clone()))
        .with_input_shape(config.get_input_shape());
    let mut session: ClassificationSession<OrtInfer, _> =
        ClassificationSession::from_config(ConsolePresenter { top_k: args.top_k }, &config)?;

    session.load_model(&loader, &config.model_path, &config.metadata_path)?;

    for path in images {
        println!("{}", path);
        if session.select_path(Path::new(path)).is_err() {
            continue;
        }
        if let Err(e) = session.classify() {
            error!("Failed to classify {}: {}", path, e);
        }
    }

    info!("{}", session.stats());
    Ok(())
}
