use wb_core::{Image, Rgba};

use crate::hsv::rgb_to_hsv;

/// At or below this value a pixel is ink regardless of hue.
pub const VALUE_THRESHOLD_LOW: f32 = 0.2;
/// At or above this value a weakly saturated pixel is board.
pub const VALUE_THRESHOLD_HIGH: f32 = 0.6;
/// Above this saturation a pixel is colored ink.
pub const SATURATION_THRESHOLD: f32 = 0.2;

/// The five colors a quantized drawing is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorClass {
    Black,
    White,
    Red,
    Green,
    Blue,
}

impl ColorClass {
    pub const ALL: [ColorClass; 5] = [
        ColorClass::Black,
        ColorClass::White,
        ColorClass::Red,
        ColorClass::Green,
        ColorClass::Blue,
    ];

    /// Canonical opaque pixel for the class.
    pub const fn rgba(self) -> Rgba {
        match self {
            ColorClass::Black => Rgba::BLACK,
            ColorClass::White => Rgba::WHITE,
            ColorClass::Red => Rgba::RED,
            ColorClass::Green => Rgba::GREEN,
            ColorClass::Blue => Rgba::BLUE,
        }
    }

    /// Inverse of [`ColorClass::rgba`]; `None` for any non-canonical pixel.
    pub fn from_canonical(px: Rgba) -> Option<ColorClass> {
        Self::ALL.into_iter().find(|c| c.rgba() == px)
    }

    pub const fn is_foreground(self) -> bool {
        !matches!(self, ColorClass::White)
    }
}

/// Buckets a pixel into one of the five classes. First match wins:
///
/// 1. dark (`v <= 0.2`): black
/// 2. bright and unsaturated: white
/// 3. saturated: by hue, `[0, 60)` red, `[60, 180)` green, `[180, 300)` blue,
///    anything else red
/// 4. otherwise white
pub fn classify(px: Rgba) -> ColorClass {
    let hsv = rgb_to_hsv(px);

    if hsv.v <= VALUE_THRESHOLD_LOW {
        return ColorClass::Black;
    }

    if hsv.v >= VALUE_THRESHOLD_HIGH && hsv.s <= SATURATION_THRESHOLD {
        return ColorClass::White;
    }

    if hsv.s > SATURATION_THRESHOLD {
        return match hsv.h {
            h if (0.0..60.0).contains(&h) => ColorClass::Red,
            h if (60.0..180.0).contains(&h) => ColorClass::Green,
            h if (180.0..300.0).contains(&h) => ColorClass::Blue,
            // Magenta and anything that escaped the named bands.
            _ => ColorClass::Red,
        };
    }

    ColorClass::White
}

pub fn quantized_color(px: Rgba) -> Rgba {
    classify(px).rgba()
}

/// Replaces every pixel with the canonical color of its class.
pub fn quantize_in_place(img: &mut Image<Rgba>) {
    for px in img.data_mut() {
        *px = quantized_color(*px);
    }
}

/// Two-buffer form of [`quantize_in_place`].
///
/// # Panics
/// Panics if `out` does not match the dimensions of `src`.
pub fn quantize_into(src: &Image<Rgba>, out: &mut Image<Rgba>) {
    assert_eq!(src.dims(), out.dims(), "out must match src dimensions");
    for (o, &px) in out.data_mut().iter_mut().zip(src.data()) {
        *o = quantized_color(px);
    }
}

pub fn quantize(src: &Image<Rgba>) -> Image<Rgba> {
    src.map(|&px| quantized_color(px))
}
