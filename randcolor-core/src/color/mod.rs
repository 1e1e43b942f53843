//! The [`ColorModel`] value and its text representations.

mod hex;
mod hsl;
mod web_safe;

pub use hsl::Hsl;
pub use web_safe::WEB_SAFE_STEPS;

use rand::Rng;
use std::fmt;
use tracing::trace;

const CHANNEL_MIN: i64 = 0;
const CHANNEL_MAX: i64 = 255;

/// An 8-bit RGB color.
///
/// Channels are saturated into 0-255 on construction, so every value of this
/// type is a valid color. The text conversions are pure functions of the
/// three channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorModel {
    red: u8,
    green: u8,
    blue: u8,
}

impl ColorModel {
    /// Creates a color, clamping each channel to 0-255.
    pub fn new(red: i64, green: i64, blue: i64) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }

    /// Creates a color from channels that are already in range.
    pub fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a color with every channel drawn from the thread-local RNG.
    pub fn random() -> Self {
        let mut color = Self::default();
        color.randomize();
        color
    }

    /// Returns the red channel.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green channel.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue channel.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns `(red, green, blue)`.
    pub fn channels(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// Overwrites all three channels with independent uniform values in 0-255.
    ///
    /// Uses the non-cryptographic thread-local generator.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    /// Same as [`randomize`](Self::randomize) but draws from `rng`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.red = rng.gen_range(0..=u8::MAX);
        self.green = rng.gen_range(0..=u8::MAX);
        self.blue = rng.gen_range(0..=u8::MAX);

        trace!(color = %self, "randomized color");
    }

    /// Returns the color as `rgb(R, G, B)`.
    pub fn to_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<(u8, u8, u8)> for ColorModel {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::from_channels(red, green, blue)
    }
}

fn clamp_channel(value: i64) -> u8 {
    value.clamp(CHANNEL_MIN, CHANNEL_MAX) as u8
}
