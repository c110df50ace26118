//! Unit tests for the color model

use a2h::converter::{apply_gamma, basic_color, indexed_color, Rgb, BRIGHT_COLORS, STANDARD_COLORS};

#[test]
fn basic_color_selects_palette_by_brightness() {
    for i in 0..8u8 {
        assert_eq!(basic_color(i, false), STANDARD_COLORS[i as usize]);
        assert_eq!(basic_color(i, true), BRIGHT_COLORS[i as usize]);
    }
}

#[test]
fn first_sixteen_indices_match_basic_palettes() {
    for i in 0..8u32 {
        assert_eq!(indexed_color(i), STANDARD_COLORS[i as usize]);
        assert_eq!(indexed_color(i + 8), BRIGHT_COLORS[i as usize]);
    }
}

#[test]
fn cube_components_follow_truncated_scale() {
    let steps = [0u8, 42, 85, 127, 170, 212];
    for (n, &step) in steps.iter().enumerate() {
        let n = n as u32;
        assert_eq!(indexed_color(16 + n * 36), Rgb::new(step, 0, 0));
        assert_eq!(indexed_color(16 + n * 6), Rgb::new(0, step, 0));
        assert_eq!(indexed_color(16 + n), Rgb::new(0, 0, step));
    }
}

#[test]
fn grayscale_ramp_steps_by_ten() {
    for code in 232..=256u32 {
        let level = ((code - 232) * 10 + 8) as u8;
        assert_eq!(indexed_color(code), Rgb::new(level, level, level));
    }
}

#[test]
fn hex_is_lower_case() {
    assert_eq!(Rgb::new(0xAB, 0x0C, 0xFF).to_hex(), "#ab0cff");
    assert_eq!(Rgb::new(0xAB, 0x0C, 0xFF).packed(), 0xab0cff);
}

#[test]
fn gamma_below_one_brightens() {
    let out = apply_gamma(Rgb::new(64, 64, 64), 0.5);
    assert!(out.r > 64);
    assert_eq!(out, Rgb::new(out.r, out.r, out.r));
}

#[test]
fn gamma_keeps_extremes() {
    for gamma in [0.3, 1.0, 2.2, 5.0] {
        assert_eq!(apply_gamma(Rgb::new(0, 255, 0), gamma), Rgb::new(0, 255, 0));
    }
}
