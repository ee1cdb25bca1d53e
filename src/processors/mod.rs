//! Image and output processing for classification models.
//!
//! # Modules
//!
//! * `preprocess` - Nearest-neighbor resize and scaling into the model input tensor
//! * `rank` - Pairing probabilities with labels and ordering them

pub mod preprocess;
pub mod rank;

pub use preprocess::{Preprocessor, nearest_source_indices, resize_nearest_neighbor};
pub use rank::{RankedEntry, RankedResult, format_fixed_2, rank, sort_entries};
