use super::ColorModel;

/// Channel values of the 216-color web-safe palette, ascending.
pub const WEB_SAFE_STEPS: [u8; 6] = [0, 51, 102, 153, 204, 255];

/// Snaps a channel to the nearest web-safe step.
///
/// Steps are scanned in ascending order starting from 0, and a step only
/// replaces the current best when the best is strictly farther away. A tie
/// keeps the lower step. With steps 51 apart no integer channel is ever
/// equidistant, so the result is always the true nearest step.
fn closest_step(channel: u8) -> u8 {
    let channel = i16::from(channel);
    let mut closest = WEB_SAFE_STEPS[0];

    for step in WEB_SAFE_STEPS {
        if (channel - i16::from(closest)).abs() > (i16::from(step) - channel).abs() {
            closest = step;
        }
    }

    closest
}

impl ColorModel {
    /// Returns the nearest web-safe color.
    pub fn web_safe(&self) -> ColorModel {
        ColorModel::from_channels(
            closest_step(self.red),
            closest_step(self.green),
            closest_step(self.blue),
        )
    }

    /// Returns the nearest web-safe color as `#RRGGBB`.
    pub fn to_web_safe(&self) -> String {
        self.web_safe().to_hex()
    }
}
