//! Column statistics and min-max normalization.
//!
//! # Overview
//!
//! - **Statistics**: [`compute_min_max`] scans every column of a dataset
//! - **Normalization**: [`NormalizationPlan`] validates target ranges, then
//!   rescales the selected columns into a new dataset
//!
//! # Example
//!
//! ```ignore
//! use arff_transform::{compute_min_max, normalize};
//!
//! let stats = compute_min_max(&dataset)?;
//! let ranges = vec![RangeSpec::new("a1", 0.0, 1.0)];
//! let normalized = normalize(&dataset, &stats, "class", &ranges)?;
//! ```

mod error;
mod normalize;
mod stats;

pub use error::{Result, TransformError};
pub use normalize::{ColumnRescale, LinearRescale, NormalizationPlan, normalize};
pub use stats::{column_max, column_min, compute_min_max};
