use crate::image::Image;

/// 8-bit RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const GREEN: Rgba = Rgba::opaque(0, 255, 0);
    pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_array(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// White is the background of a quantized drawing. Alpha is ignored.
    pub const fn is_white(self) -> bool {
        self.r == 255 && self.g == 255 && self.b == 255
    }
}

/// Converts a field with values in `[0, 1]` into an opaque gray image.
///
/// Values are scaled by 255 and truncated; anything outside the range
/// saturates.
pub fn scalar_to_rgba(field: &Image<f32>) -> Image<Rgba> {
    field.map(|&v| {
        let c = (255.0 * v) as u8;
        Rgba::opaque(c, c, c)
    })
}
