//! Whiteboard photo to SVG line drawing.
//!
//! The pipeline runs four stages over an RGBA image and serializes the result:
//!
//! 1. 5x5 Gaussian smoothing ([`gaussian_blur`])
//! 2. quantization into black, white, red, green and blue ([`quantize_in_place`])
//! 3. Guo-Hall thinning of the non-white pixels ([`thin_rounds`])
//! 4. greedy 8-connected tracing into polylines ([`trace_paths`])
//!
//! and finally [`render_svg`] writes one `<path>` per polyline into a
//! fixed-capacity buffer. [`transform`] runs everything with the default
//! [`PipelineConfig`].
//!
//! This crate re-exports the stage crates so most callers only need it.

mod config;
mod pipeline;

pub use config::{
    DEFAULT_MAX_THINNING_ROUNDS, DEFAULT_SVG_CAPACITY, PipelineConfig, ThinningMode,
};
pub use pipeline::{
    Drawing, Stage, StageObserver, preprocess, preprocess_observed, run_pipeline, transform,
    transform_to_vec, transform_with, vectorize, vectorize_observed,
};
pub use wb_color::*;
pub use wb_core::*;
pub use wb_filter::*;
pub use wb_morph::*;
pub use wb_svg::*;
pub use wb_trace::*;
