//! # randcolor
//!
//! A small color model for 8-bit RGB values with the conversions a color
//! picker or random-color service needs.
//!
//! ## Features
//!
//! - **Saturating construction**: channel values outside 0-255 are clamped, never rejected
//! - **Randomization**: uniform random channels from a thread-local or caller-supplied RNG
//! - **Hex**: `#RRGGBB` output and `#RRGGBB` / `#RGB` parsing
//! - **HSL**: hue in degrees, saturation and lightness as fractions
//! - **Web-safe**: nearest color from the 216-color web-safe cube
//! - **Info record**: every representation in one serializable struct (`serde` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use randcolor::ColorModel;
//!
//! let red = ColorModel::new(300, -20, 0);
//! assert_eq!(red.to_hex(), "#FF0000");
//! assert_eq!(red.to_rgb(), "rgb(255, 0, 0)");
//! assert_eq!(red.to_hsl(), "hsl(0, 1%, 0.5%)");
//! assert_eq!(red.to_web_safe(), "#FF0000");
//!
//! let mut color = ColorModel::default();
//! color.randomize();
//! let info = color.info();
//! assert_eq!(info.hex.clean.len(), 6);
//! ```
//!
//! ### Parsing
//!
//! ```rust
//! use randcolor::{ColorModel, Result};
//!
//! # fn main() -> Result<()> {
//! let color: ColorModel = "#a1b2c3".parse()?;
//! assert_eq!(color.channels(), (161, 178, 195));
//! assert_eq!(ColorModel::from_hex("F80")?.to_hex(), "#FF8800");
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod error;
pub mod info;

pub use color::{ColorModel, Hsl, WEB_SAFE_STEPS};
pub use error::{ColorError, Result};
pub use info::{ColorInfo, HexInfo, HslInfo, RgbInfo, WebSafeInfo};

/// Current version of randcolor
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
