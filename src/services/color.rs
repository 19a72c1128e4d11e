use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parses `#RRGGBB` (leading `#` optional, case-insensitive).
///
/// Exactly six hex digits are accepted; 3-digit shorthand and 8-digit
/// RGBA strings both return `None`.
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

/// Strict parse for callers that want malformed input surfaced instead of
/// the generator's silent black fallback.
pub fn parse_hex_strict(hex: &str) -> Result<Rgb, AppError> {
    parse_hex(hex).ok_or_else(|| AppError::InvalidColor(hex.to_string()))
}

/// Fail-closed entry used by theme generation: unparseable input becomes
/// black rather than an error.
pub fn hex_or_black(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or_default()
}

/// Pushes each channel toward white by `pct * 255`, clamped.
pub fn lighten(hex: &str, pct: f64) -> String {
    let rgb = hex_or_black(hex);
    let amount = (255.0 * pct).round() as i64;
    Rgb::new(
        clamp_channel(rgb.r as i64 + amount),
        clamp_channel(rgb.g as i64 + amount),
        clamp_channel(rgb.b as i64 + amount),
    )
    .to_hex()
}

/// Pushes each channel toward black by `pct * 255`, clamped.
pub fn darken(hex: &str, pct: f64) -> String {
    let rgb = hex_or_black(hex);
    let amount = (255.0 * pct).round() as i64;
    Rgb::new(
        clamp_channel(rgb.r as i64 - amount),
        clamp_channel(rgb.g as i64 - amount),
        clamp_channel(rgb.b as i64 - amount),
    )
    .to_hex()
}

fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

/// Perceptual luminance in [0, 1]: `0.299 R + 0.587 G + 0.114 B`.
pub fn luminance(hex: &str) -> f64 {
    let rgb = hex_or_black(hex);
    (0.299 * rgb.r as f64 + 0.587 * rgb.g as f64 + 0.114 * rgb.b as f64) / 255.0
}

/// Rotates the HSL hue by `degrees`, preserving saturation and lightness.
pub fn rotate_hue(hex: &str, degrees: f64) -> String {
    let rgb = hex_or_black(hex);
    let (h, s, l) = rgb_to_hsl(rgb);

    let mut h = (h + degrees / 360.0) % 1.0;
    if h < 0.0 {
        h += 1.0;
    }

    hsl_to_rgb(h, s, l).to_hex()
}

/// RGB to HSL with all three components in [0, 1].
fn rgb_to_hsl(rgb: Rgb) -> (f64, f64, f64) {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // achromatic
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let h = if max == r {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };

    (h, s, l)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    if s == 0.0 {
        let v = (l * 255.0).round() as i64;
        let v = clamp_channel(v);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        clamp_channel((hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0).round() as i64),
        clamp_channel((hue_to_rgb(p, q, h) * 255.0).round() as i64),
        clamp_channel((hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0).round() as i64),
    )
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}
