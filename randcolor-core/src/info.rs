//! The combined record of every representation of a color.

use crate::color::ColorModel;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// All representations of one color, as returned by [`ColorModel::info`].
///
/// Serializes (with the `serde` feature) to
/// `{hex: {value, clean}, hsl: {value}, rgb: {value, r, g, b}, websafe: {value}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorInfo {
    pub hex: HexInfo,
    pub hsl: HslInfo,
    pub rgb: RgbInfo,
    pub websafe: WebSafeInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HexInfo {
    /// `#RRGGBB`
    pub value: String,
    /// `RRGGBB`, without the leading `#`
    pub clean: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HslInfo {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RgbInfo {
    pub value: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WebSafeInfo {
    pub value: String,
}

impl ColorModel {
    pub fn info(&self) -> ColorInfo {
        let hex = self.to_hex();
        let clean = hex.replace('#', "");

        ColorInfo {
            hex: HexInfo { value: hex, clean },
            hsl: HslInfo {
                value: self.to_hsl(),
            },
            rgb: RgbInfo {
                value: self.to_rgb(),
                r: self.red(),
                g: self.green(),
                b: self.blue(),
            },
            websafe: WebSafeInfo {
                value: self.to_web_safe(),
            },
        }
    }
}

impl From<ColorModel> for ColorInfo {
    fn from(color: ColorModel) -> Self {
        color.info()
    }
}
