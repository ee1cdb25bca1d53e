//! Constants shared across the classifier.

/// Side length of the square model input, in pixels.
pub const DEFAULT_INPUT_SIZE: u32 = 224;

/// Number of color channels fed to the model.
pub const INPUT_CHANNELS: usize = 3;

/// Batch dimension of every input tensor.
pub const INPUT_BATCH: usize = 1;

/// Divisor mapping 8-bit channel values into `[0.0, 1.0]`.
pub const PIXEL_SCALE: f32 = 255.0;

/// Default location of the model definition.
pub const DEFAULT_MODEL_PATH: &str = "model/model.onnx";

/// Default location of the label metadata document.
pub const DEFAULT_METADATA_PATH: &str = "model/metadata.json";

/// Default number of ONNX Runtime sessions per model.
pub const DEFAULT_SESSION_POOL_SIZE: usize = 1;

/// MIME prefix every acquired file must carry.
pub const IMAGE_MIME_PREFIX: &str = "image/";
