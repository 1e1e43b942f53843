use super::ColorModel;
use std::fmt;

/// Hue/saturation/lightness components of a [`ColorModel`].
///
/// `hue` is in degrees (0 up to, but excluding, 360). `saturation` and
/// `lightness` are fractions in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// Converts 8-bit channels with the normalized-channel algorithm.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        let r = f64::from(red) / 255.0;
        let g = f64::from(green) / 255.0;
        let b = f64::from(blue) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            // Achromatic
            return Self {
                hue: 0.0,
                saturation: 0.0,
                lightness,
            };
        }

        let d = max - min;
        let saturation = if lightness > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self {
            hue: sector * 60.0,
            saturation,
            lightness,
        }
    }
}

/// Renders `hsl(H, S%, L%)`.
///
/// H is rounded to whole degrees. S and L are rounded to four decimals but
/// stay fractions, so pure red prints as `hsl(0, 1%, 0.5%)`.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            round_half_up(self.hue),
            round_to(self.saturation, 4),
            round_to(self.lightness, 4)
        )
    }
}

/// Digits kept when snapping a scaled value before rounding it.
///
/// Every exact result here is a ratio with a denominator of at most 510, so a
/// true value is never within 1e-9 of a .5 boundary unless it sits on it.
const PRE_ROUND_FACTOR: f64 = 1e9;

/// Rounds half away from zero after snapping off float error, so an exact
/// midpoint computed as 192.49999999999997 still rounds to 193.
fn round_half_up(value: f64) -> f64 {
    ((value * PRE_ROUND_FACTOR).round() / PRE_ROUND_FACTOR).round()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    round_half_up(value * factor) / factor
}

impl ColorModel {
    /// Returns the unrounded HSL components.
    pub fn hsl(&self) -> Hsl {
        Hsl::from_rgb(self.red, self.green, self.blue)
    }

    /// Returns the color as `hsl(H, S%, L%)`, see [`Hsl`]'s `Display`.
    pub fn to_hsl(&self) -> String {
        self.hsl().to_string()
    }
}
