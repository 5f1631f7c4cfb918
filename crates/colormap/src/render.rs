//! Conversion of blended colors to 8-bit pixels.

use crate::scheme::Rgba;

impl Rgba {
    /// 8-bit channels; out-of-range values clamp, NaN becomes 0.
    pub fn to_rgba8(self) -> [u8; 4] {
        self.to_array().map(channel_to_u8)
    }
}

fn channel_to_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
