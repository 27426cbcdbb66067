//! CLI library components for the min-max normalizer.

pub mod logging;
pub mod pipeline;
pub mod ranges;
