//! Skeletonization of quantized line drawings.
//!
//! Pixels are binary: white is background, every other color is foreground.
//! Thinning follows Guo and Hall (1989), "Parallel thinning with two-subiteration
//! algorithms". Each round runs two sub-iterations that differ only in which
//! neighbor triple protects a pixel from removal.
//!
//! Within one sub-iteration all removals are decided against the state at the
//! start of the sub-iteration: the marker mask is computed completely and only
//! then applied.
//!
//! Row 0 and column 0 are never evaluated, so foreground on the top and left
//! edges always survives. Neighbors beyond the bottom and right edges read as
//! background.

mod guo_hall;

pub use guo_hall::{
    DEFAULT_THINNING_ROUNDS, SubIteration, guo_hall_thinning, thin_rounds, thin_until_stable,
    thinning_pass,
};
