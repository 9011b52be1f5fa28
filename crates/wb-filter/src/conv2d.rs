use wb_core::{BorderMode, Image, Rgba, sample_at};

use crate::kernels::Kernel2D;

/// Element types that can be run through [`convolve`].
///
/// Each channel is accumulated independently in `f32`; `finish` turns the
/// normalized sums back into an element.
pub trait Convolve: Copy + Default {
    type Acc: Copy + Default;

    fn accumulate(acc: &mut Self::Acc, value: Self, weight: f32);

    fn finish(acc: Self::Acc, normalization: f32) -> Self;
}

impl Convolve for f32 {
    type Acc = f32;

    #[inline]
    fn accumulate(acc: &mut f32, value: f32, weight: f32) {
        *acc += value * weight;
    }

    #[inline]
    fn finish(acc: f32, normalization: f32) -> f32 {
        acc / normalization
    }
}

/// RGB channels are floored to integers; alpha is always opaque.
impl Convolve for Rgba {
    type Acc = [f32; 3];

    #[inline]
    fn accumulate(acc: &mut [f32; 3], value: Rgba, weight: f32) {
        acc[0] += value.r as f32 * weight;
        acc[1] += value.g as f32 * weight;
        acc[2] += value.b as f32 * weight;
    }

    #[inline]
    fn finish(acc: [f32; 3], normalization: f32) -> Rgba {
        let [r, g, b] = acc.map(|c| (c / normalization).floor() as u8);
        Rgba::opaque(r, g, b)
    }
}

/// Correlates `src` with `kernel`, producing an image of the same size.
pub fn convolve<T: Convolve, const N: usize>(
    src: &Image<T>,
    kernel: &Kernel2D<N>,
    border: BorderMode<T>,
) -> Image<T> {
    let mut out = Image::new_fill(src.width(), src.height(), T::default());
    convolve_into(src, kernel, border, &mut out);
    out
}

/// Like [`convolve`] but writes into a caller-provided buffer.
///
/// # Panics
/// Panics if `out` does not match the dimensions of `src`.
pub fn convolve_into<T: Convolve, const N: usize>(
    src: &Image<T>,
    kernel: &Kernel2D<N>,
    border: BorderMode<T>,
    out: &mut Image<T>,
) {
    assert_eq!(src.dims(), out.dims(), "out must match src dimensions");

    let r = kernel.radius() as isize;
    for cy in 0..src.height() {
        for cx in 0..src.width() {
            let mut acc = T::Acc::default();
            for (ky, row) in kernel.weights.iter().enumerate() {
                let y = cy as isize + ky as isize - r;
                for (kx, &w) in row.iter().enumerate() {
                    let x = cx as isize + kx as isize - r;
                    T::accumulate(&mut acc, sample_at(src, x, y, &border), w);
                }
            }
            out.set(cx, cy, T::finish(acc, kernel.normalization));
        }
    }
}

#[cfg(test)]
mod tests {
    use wb_core::{BorderMode, Image, Rgba};

    use crate::conv2d::{convolve, convolve_into};
    use crate::kernels::{GAUSSIAN_5X5, Kernel2D};

    #[test]
    fn identity_kernel_copies_input() {
        let identity = Kernel2D::new([[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]], 1.0);
        let src = Image::from_vec(3, 2, vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
        let out = convolve(&src, &identity, BorderMode::Constant(0.0));
        assert_eq!(out, src);
    }

    #[test]
    fn box_kernel_with_constant_border() {
        let ones = Kernel2D::new([[1.0; 3]; 3], 1.0);
        let src = Image::new_fill(3, 3, 1.0f32);

        let zero_fill = convolve(&src, &ones, BorderMode::Constant(0.0));
        assert_eq!(
            zero_fill.data(),
            &[4.0, 6.0, 4.0, 6.0, 9.0, 6.0, 4.0, 6.0, 4.0]
        );

        let clamped = convolve(&src, &ones, BorderMode::Clamp);
        assert!(clamped.data().iter().all(|&v| v == 9.0));
    }

    #[test]
    fn kernel_is_not_flipped() {
        let right = Kernel2D::new([[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]], 1.0);
        let src = Image::from_vec(3, 1, vec![1.0f32, 2.0, 3.0]).expect("valid");
        let out = convolve(&src, &right, BorderMode::Constant(-1.0));
        assert_eq!(out.data(), &[2.0, 3.0, -1.0]);
    }

    #[test]
    fn rgba_channels_floor_and_force_opaque() {
        let mut src = Image::new_fill(5, 5, Rgba::new(0, 0, 0, 0));
        src.set(2, 2, Rgba::new(255, 159, 1, 0));
        let out = convolve(&src, &GAUSSIAN_5X5, BorderMode::Constant(Rgba::BLACK));

        // 255 * 15 / 159 = 24.05, 159 * 15 / 159 = 15, 1 * 15 / 159 = 0.09
        assert_eq!(out.at(2, 2), Rgba::new(24, 15, 0, 255));
        // 255 * 12 / 159 = 19.24
        assert_eq!(out.at(3, 2).r, 19);
        // 255 * 2 / 159 = 3.2
        assert_eq!(out.at(0, 0).r, 3);
        assert!(out.data().iter().all(|p| p.a == 255));
    }

    #[test]
    #[should_panic(expected = "must match")]
    fn convolve_into_rejects_mismatched_output() {
        let src = Image::new_fill(5, 4, 1.0f32);
        let mut out = Image::new_fill(4, 4, 0.0f32);
        convolve_into(&src, &GAUSSIAN_5X5, BorderMode::Clamp, &mut out);
    }
}
