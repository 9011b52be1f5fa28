//! Fixed-kernel 2D convolution for the wb2svg pipeline.
//!
//! Kernels are correlated, not flipped: `weights[ky][kx]` multiplies the
//! sample at `(x + kx - r, y + ky - r)`. Reads outside the image follow the
//! [`wb_core::BorderMode`] passed to [`convolve`].
//!
//! The smoothing stage is [`gaussian_blur`]: the 5x5 integer Gaussian with
//! divisor 159 and an opaque black border. It has to stay exact to those
//! weights because color classification thresholds are tuned against it.

pub mod conv2d;
pub mod gaussian;
pub mod kernels;

pub use conv2d::{Convolve, convolve, convolve_into};
pub use gaussian::{gaussian_blur, luminance, sobel_magnitude};
pub use kernels::{GAUSSIAN_5X5, Kernel2D, SOBEL_X, SOBEL_Y};
