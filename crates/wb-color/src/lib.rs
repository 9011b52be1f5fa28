//! Color quantization for whiteboard photos.
//!
//! Every pixel is converted to HSV and bucketed into one of five classes
//! (black, white, red, green, blue). After quantization an image contains only
//! the five canonical colors from [`ColorClass::rgba`]; white is the board and
//! every other class is ink.

mod classify;
mod hsv;

pub use classify::{
    ColorClass, SATURATION_THRESHOLD, VALUE_THRESHOLD_HIGH, VALUE_THRESHOLD_LOW, classify,
    quantize, quantize_in_place, quantize_into, quantized_color,
};
pub use hsv::{Hsv, rgb_to_hsv};
