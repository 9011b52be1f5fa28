use wb_core::{BorderMode, Image, Rgba};

use crate::conv2d::convolve;
use crate::kernels::{GAUSSIAN_5X5, SOBEL_X, SOBEL_Y};

/// Smooths `img` with [`GAUSSIAN_5X5`], treating everything outside the image
/// as opaque black.
pub fn gaussian_blur(img: &Image<Rgba>) -> Image<Rgba> {
    convolve(img, &GAUSSIAN_5X5, BorderMode::Constant(Rgba::BLACK))
}

/// Rec. 601 luma in `[0, 1]`.
pub fn luminance(img: &Image<Rgba>) -> Image<f32> {
    img.map(|p| (0.299 * p.r as f32 + 0.587 * p.g as f32 + 0.114 * p.b as f32) / 255.0)
}

/// Sobel gradient magnitude, scaled so the strongest response is `1.0`.
///
/// A field with no gradient anywhere comes back all zero.
pub fn sobel_magnitude(field: &Image<f32>) -> Image<f32> {
    let gx = convolve(field, &SOBEL_X, BorderMode::Clamp);
    let gy = convolve(field, &SOBEL_Y, BorderMode::Clamp);

    let mut mag = gx;
    let mut max = 0.0f32;
    for (m, &y) in mag.data_mut().iter_mut().zip(gy.data()) {
        *m = m.hypot(y);
        max = max.max(*m);
    }

    if max > 0.0 {
        for m in mag.data_mut() {
            *m /= max;
        }
    }
    mag
}
