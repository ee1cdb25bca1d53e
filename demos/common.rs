//! Common utilities for demos.

use oar_classify::core::config::onnx::OrtExecutionProvider;
use tracing::warn;

/// Parses a device string and returns the corresponding execution providers.
///
/// Accepts "cpu", "cuda", "cuda:N", "directml", "directml:N" and "coreml".
/// GPU providers are followed by a CPU fallback.
///
/// # Errors
///
/// Returns an error if the device string is not recognized or the device index
/// is not a number.
pub fn parse_device(device: &str) -> Result<Vec<OrtExecutionProvider>, Box<dyn std::error::Error>> {
    let device = device.to_lowercase();
    let (name, index) = match device.split_once(':') {
        Some((name, id)) => {
            let id: i32 = id
                .parse()
                .map_err(|_| format!("Invalid device ID: {}", id))?;
            (name, Some(id))
        }
        None => (device.as_str(), None),
    };

    let provider = match name {
        "cpu" => return Ok(vec![OrtExecutionProvider::CPU]),
        "cuda" => OrtExecutionProvider::CUDA {
            device_id: Some(index.unwrap_or(0)),
        },
        "directml" | "dml" => OrtExecutionProvider::DirectML {
            device_id: Some(index.unwrap_or(0)),
        },
        "coreml" => OrtExecutionProvider::CoreML,
        _ => {
            return Err(format!(
                "Unsupported device: {}. Supported devices: cpu, cuda[:N], directml[:N], coreml",
                device
            )
            .into());
        }
    };

    if !provider_compiled_in(&provider) {
        warn!("{} requested but its feature is not enabled. Falling back to CPU.", name);
        return Ok(vec![OrtExecutionProvider::CPU]);
    }

    Ok(vec![provider, OrtExecutionProvider::CPU])
}

fn provider_compiled_in(provider: &OrtExecutionProvider) -> bool {
    match provider {
        OrtExecutionProvider::CPU => true,
        OrtExecutionProvider::CUDA { .. } => cfg!(feature = "cuda"),
        OrtExecutionProvider::DirectML { .. } => cfg!(feature = "directml"),
        OrtExecutionProvider::CoreML => cfg!(feature = "coreml"),
    }
}

/// Keeps the paths that point at existing files.
///
/// # Errors
///
/// Returns an error if no valid image files are found.
pub fn validate_image_paths(image_paths: &[String]) -> Result<Vec<&String>, Box<dyn std::error::Error>> {
    let valid_images: Vec<&String> = image_paths
        .iter()
        .filter(|path| {
            let path = std::path::Path::new(path);
            let ok = path.is_file();
            if !ok {
                warn!("Skipping missing image: {}", path.display());
            }
            ok
        })
        .collect();

    if valid_images.is_empty() {
        return Err("No valid image files found".into());
    }

    Ok(valid_images)
}
