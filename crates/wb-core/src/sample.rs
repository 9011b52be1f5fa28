use crate::border::{BorderMode, map_index};
use crate::image::Image;

/// Reads `img` at a signed coordinate, resolving outside reads through `border`.
///
/// # Panics
/// Panics when a non-constant border is used on an empty image.
pub fn sample_at<T: Copy>(img: &Image<T>, x: isize, y: isize, border: &BorderMode<T>) -> T {
    if let BorderMode::Constant(fill) = border {
        if !img.contains(x, y) {
            return *fill;
        }
        return img.at(x as usize, y as usize);
    }

    let mx = map_index(x, img.width(), border).expect("cannot sample an empty image");
    let my = map_index(y, img.height(), border).expect("cannot sample an empty image");
    img.at(mx, my)
}

/// Returns the in-bounds neighbor of `(x, y)` displaced by `(dx, dy)`.
#[inline]
pub fn neighbor<T>(
    img: &Image<T>,
    x: usize,
    y: usize,
    dx: isize,
    dy: isize,
) -> Option<(usize, usize)> {
    let nx = x as isize + dx;
    let ny = y as isize + dy;
    img.contains(nx, ny).then_some((nx as usize, ny as usize))
}
