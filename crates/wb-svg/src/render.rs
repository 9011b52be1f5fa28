use core::fmt::{self, Write};

use log::debug;
use wb_core::{Polyline, Rgba};

use crate::error::SvgError;
use crate::writer::{ByteCounter, SvgWriter};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Writes the whole document: the `<svg>` root sized to the image, one
/// `<path>` per polyline, and the closing tag.
///
/// Stops at the first failed write.
pub fn write_document<W: Write>(
    out: &mut W,
    width: usize,
    height: usize,
    paths: &[Polyline],
) -> fmt::Result {
    write!(
        out,
        r#"<svg width="{width}" height="{height}" xmlns="{SVG_NAMESPACE}">"#
    )?;
    for path in paths {
        write_path(out, path)?;
    }
    out.write_str("</svg>")
}

/// `<path fill="none" stroke="rgb(r,g,b)" d="M x y L x y ..."/>`.
///
/// A single-point polyline becomes a bare `M x y`.
pub fn write_path<W: Write>(out: &mut W, path: &Polyline) -> fmt::Result {
    let Rgba { r, g, b, .. } = path.color;
    write!(out, r#"<path fill="none" stroke="rgb({r},{g},{b})" d=""#)?;
    for (i, p) in path.points.iter().enumerate() {
        if i == 0 {
            write!(out, "M {} {}", p.x, p.y)?;
        } else {
            write!(out, " L {} {}", p.x, p.y)?;
        }
    }
    out.write_str(r#""/>"#)
}

/// Renders into `buf` and returns the number of bytes written, not counting
/// the trailing NUL.
pub fn render_svg(
    width: usize,
    height: usize,
    paths: &[Polyline],
    buf: &mut [u8],
) -> Result<usize, SvgError> {
    let mut writer = SvgWriter::new(buf)?;
    // Overflow is tracked by the writer itself.
    let _ = write_document(&mut writer, width, height, paths);
    let written = writer.finish()?;
    debug!("rendered {} paths into {written} bytes", paths.len());
    Ok(written)
}

/// Unbounded rendering into an owned string.
pub fn render_svg_string(width: usize, height: usize, paths: &[Polyline]) -> String {
    let mut out = String::new();
    write_document(&mut out, width, height, paths).expect("writing to a String cannot fail");
    out
}

/// Exact document length in bytes; a buffer needs one more for the NUL.
pub fn document_len(width: usize, height: usize, paths: &[Polyline]) -> usize {
    let mut counter = ByteCounter::default();
    let _ = write_document(&mut counter, width, height, paths);
    counter.0
}
