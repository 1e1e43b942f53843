use super::ColorModel;
use crate::error::{ColorError, Result};
use std::str::FromStr;

impl ColorModel {
    /// Returns the color as `#RRGGBB` with uppercase digits.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Parses `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`, in either case.
    ///
    /// The short form repeats each digit, so `F80` is `#FF8800`.
    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = value.trim().strip_prefix('#').unwrap_or(value.trim());

        let expanded;
        let digits = match digits.len() {
            6 => digits,
            3 => {
                expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
                expanded.as_str()
            }
            n => {
                return Err(ColorError::InvalidHex(format!(
                    "'{value}' has {n} digits, expected 3 or 6"
                )))
            }
        };

        let bytes = hex::decode(digits)
            .map_err(|e| ColorError::InvalidHex(format!("'{value}': {e}")))?;

        match bytes.as_slice() {
            [red, green, blue] => Ok(Self::from_channels(*red, *green, *blue)),
            _ => Err(ColorError::InvalidHex(format!(
                "'{value}' does not encode three channels"
            ))),
        }
    }
}

impl FromStr for ColorModel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}
