//! SVG serialization of traced polylines into fixed-capacity buffers.
//!
//! The document grammar is deliberately small:
//!
//! ```text
//! <svg width="W" height="H" xmlns="http://www.w3.org/2000/svg">
//!   <path fill="none" stroke="rgb(R,G,B)" d="M x y L x y ..."/>   (one per polyline)
//! </svg>
//! ```
//!
//! emitted without whitespace between elements. Coordinates are integer pixel
//! indices.
//!
//! [`render_svg`] writes into a caller-owned `&mut [u8]` through [`SvgWriter`]
//! and never grows it: if the document does not fit, the result is
//! [`SvgError::Overflow`] and the buffer contents are unspecified.

mod error;
mod render;
mod writer;

pub use error::SvgError;
pub use render::{
    SVG_NAMESPACE, document_len, render_svg, render_svg_string, write_document, write_path,
};
pub use writer::SvgWriter;
