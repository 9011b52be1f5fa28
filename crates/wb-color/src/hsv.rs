use wb_core::Rgba;

/// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Standard max/min/delta conversion. Alpha is ignored.
///
/// Gray pixels (`delta == 0`) have no defined hue and get `h = 0`.
pub fn rgb_to_hsv(px: Rgba) -> Hsv {
    let r = px.r as f32 / 255.0;
    let g = px.g as f32 / 255.0;
    let b = px.b as f32 / 255.0;

    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let delta = max - min;

    let mut h = if delta == 0.0 {
        0.0
    } else if max == r {
        // `%` is the truncated remainder, so this can come out negative.
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    if h < 0.0 {
        h += 360.0;
    }

    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv { h, s, v: max }
}
