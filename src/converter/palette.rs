//! Terminal color model.
//!
//! Stateless mapping from terminal color encodings to display RGB:
//! the 8 standard and 8 bright ANSI colors, the xterm 256-color palette
//! and gamma correction.

use super::types::Rgb;

/// Standard VGA palette (SGR 30-37 / 40-47).
pub const STANDARD_COLORS: [Rgb; 8] = [
    Rgb::new(0, 0, 0),
    Rgb::new(170, 0, 0),
    Rgb::new(0, 170, 0),
    Rgb::new(170, 85, 0),
    Rgb::new(0, 0, 170),
    Rgb::new(170, 0, 170),
    Rgb::new(0, 170, 170),
    Rgb::new(170, 170, 170),
];

/// Bright palette, used for bold foregrounds and 256-color indices 8-15.
pub const BRIGHT_COLORS: [Rgb; 8] = [
    Rgb::new(85, 85, 85),
    Rgb::new(255, 85, 85),
    Rgb::new(85, 255, 85),
    Rgb::new(255, 255, 85),
    Rgb::new(85, 85, 255),
    Rgb::new(255, 85, 255),
    Rgb::new(85, 255, 255),
    Rgb::new(255, 255, 255),
];

/// Cube step between adjacent components of the 6x6x6 color cube.
const CUBE_STEP: f64 = 42.5;

/// Look up a 3-bit color. Indices past 7 wrap into the palette.
pub fn basic_color(index: u8, bright: bool) -> Rgb {
    let slot = usize::from(index) % STANDARD_COLORS.len();
    if bright {
        BRIGHT_COLORS[slot]
    } else {
        STANDARD_COLORS[slot]
    }
}

/// Resolve an xterm 256-color palette index.
///
/// The grayscale ramp covers 232 through 256 inclusive. Values past the ramp
/// fall through to the cube formula, whose channels wrap modulo 6.
pub fn indexed_color(code: u32) -> Rgb {
    match code {
        0..=7 => STANDARD_COLORS[code as usize],
        8..=15 => BRIGHT_COLORS[(code - 8) as usize],
        232..=256 => {
            let level = ((code - 232) * 10 + 8) as u8;
            Rgb::new(level, level, level)
        }
        _ => {
            let value = code - 16;
            let component = |n: u32| (f64::from(n % 6) * CUBE_STEP) as u8;
            Rgb::new(
                component(value / 36),
                component(value / 6),
                component(value),
            )
        }
    }
}

/// Apply a power-law gamma to each channel. `gamma == 1.0` is the identity.
pub fn apply_gamma(rgb: Rgb, gamma: f64) -> Rgb {
    let channel = |c: u8| {
        let v = (f64::from(c) / 255.0).powf(gamma).clamp(0.0, 1.0);
        (v * 255.0) as u8
    };
    Rgb::new(channel(rgb.r), channel(rgb.g), channel(rgb.b))
}
