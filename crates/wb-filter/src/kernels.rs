/// Square convolution kernel with an explicit normalization divisor.
///
/// `weights[ky][kx]` is applied to the sample at offset
/// `(kx - N / 2, ky - N / 2)` from the output cell; the kernel is not flipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel2D<const N: usize> {
    pub weights: [[f32; N]; N],
    pub normalization: f32,
}

impl<const N: usize> Kernel2D<N> {
    pub const fn new(weights: [[f32; N]; N], normalization: f32) -> Self {
        assert!(N % 2 == 1, "kernel size must be odd");
        Self {
            weights,
            normalization,
        }
    }

    pub const fn radius(&self) -> usize {
        N / 2
    }

    pub fn weight_sum(&self) -> f32 {
        self.weights.iter().flatten().sum()
    }
}

/// 5x5 integer approximation of a Gaussian with sigma ~1.4.
pub static GAUSSIAN_5X5: Kernel2D<5> = Kernel2D::new(
    [
        [2.0, 4.0, 5.0, 4.0, 2.0],
        [4.0, 9.0, 12.0, 9.0, 4.0],
        [5.0, 12.0, 15.0, 12.0, 5.0],
        [4.0, 9.0, 12.0, 9.0, 4.0],
        [2.0, 4.0, 5.0, 4.0, 2.0],
    ],
    159.0,
);

pub static SOBEL_X: Kernel2D<3> = Kernel2D::new(
    [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]],
    1.0,
);

pub static SOBEL_Y: Kernel2D<3> = Kernel2D::new(
    [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]],
    1.0,
);

#[cfg(test)]
mod tests {
    use super::{GAUSSIAN_5X5, SOBEL_X, SOBEL_Y};

    #[test]
    fn gaussian_weights_sum_to_normalization() {
        assert_eq!(GAUSSIAN_5X5.weight_sum(), GAUSSIAN_5X5.normalization);
        assert_eq!(GAUSSIAN_5X5.radius(), 2);

        for ky in 0..5 {
            for kx in 0..5 {
                assert_eq!(GAUSSIAN_5X5.weights[ky][kx], GAUSSIAN_5X5.weights[4 - ky][4 - kx]);
                assert_eq!(GAUSSIAN_5X5.weights[ky][kx], GAUSSIAN_5X5.weights[kx][ky]);
            }
        }
    }

    #[test]
    fn sobel_kernels_are_transposes() {
        assert_eq!(SOBEL_X.weight_sum(), 0.0);
        for ky in 0..3 {
            for kx in 0..3 {
                assert_eq!(SOBEL_X.weights[ky][kx], SOBEL_Y.weights[kx][ky]);
            }
        }
    }
}
