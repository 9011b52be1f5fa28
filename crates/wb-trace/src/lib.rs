//! Polyline extraction from skeletonized drawings.
//!
//! The tracer owns the image it walks and erases every pixel it visits, so the
//! image doubles as the visited set. Each foreground pixel ends up in exactly
//! one [`wb_core::Polyline`].
//!
//! Walks are greedy and never backtrack: at every step the first remaining
//! foreground neighbor in [`wb_core::NEIGHBORS_8`] order is taken. At a
//! junction this splits one logical stroke into several polylines; the order is
//! fixed so output is reproducible.

mod trace;

pub use trace::{PathTracer, trace_paths};
