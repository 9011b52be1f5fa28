//! Foundational buffers and value types for the wb2svg pipeline.
//!
//! ## Buffers
//! [`Image<T>`] is a dense, row-major 2D container. The same type serves as
//! the RGBA pixel buffer (`Image<Rgba>`), the scalar field (`Image<f32>`) and
//! the binary marker mask (`Image<bool>`). Element `(x, y)` lives at index
//! `y * width + x`.
//!
//! ## Border Modes
//! Neighborhood reads that fall outside the image resolve through a
//! [`BorderMode`]: constant fill, clamp to edge, or reflect-101.
//!
//! ## Coordinates
//! All coordinates are integer pixel indices; `x` grows to the right and `y`
//! grows downwards, matching SVG user space.

mod border;
mod error;
mod geom;
mod image;
mod pixel;
mod sample;

pub use border::{BorderMode, map_index};
pub use error::Error;
pub use geom::{GridPoint, NEIGHBORS_8, Polyline};
pub use image::Image;
pub use pixel::{Rgba, scalar_to_rgba};
pub use sample::{neighbor, sample_at};
