//! RGB888 <-> HSV conversion
//!
//! Both directions truncate instead of rounding, and intermediate values are
//! narrowed to `f32` at the same points as the legacy C formulas so existing
//! consumers see identical output. A round trip can therefore drift by a few
//! units per channel.

use libm::fmod;
use serde::{Deserialize, Serialize};

use crate::rgb565::{pack_rgb888, unpack_rgb888};

/// Hue in degrees `[0, 360)`, saturation and value in percent `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: u32,
    pub sat: u32,
    pub val: u32,
}

impl Hsv {
    pub const fn new(hue: u32, sat: u32, val: u32) -> Self {
        Self { hue, sat, val }
    }

    /// Limit saturation and value to 100 and reduce hue modulo 360
    pub fn normalized(self) -> Self {
        Self {
            hue: self.hue % 360,
            sat: self.sat.min(100),
            val: self.val.min(100),
        }
    }
}

impl From<u32> for Hsv {
    fn from(rgb: u32) -> Self {
        rgb_to_hsv(rgb)
    }
}

impl From<Hsv> for u32 {
    fn from(hsv: Hsv) -> Self {
        hsv_to_rgb(hsv)
    }
}

fn normalize_channel(channel: u8) -> f32 {
    (f64::from(channel) / 255.0) as f32
}

fn max3(a: f32, b: f32, c: f32) -> f32 {
    if a > b {
        if a > c { a } else { c }
    } else if b > c {
        b
    } else {
        c
    }
}

fn min3(a: f32, b: f32, c: f32) -> f32 {
    if a < b {
        if a < c { a } else { c }
    } else if b < c {
        b
    } else {
        c
    }
}

// Hue for the sextant pair owned by the max channel
fn sector_hue(delta: f32, diff: f32, offset: f64) -> f32 {
    fmod(60.0 * f64::from(delta / diff) + offset, 360.0) as f32
}

/// Convert `0x00RRGGBB` to HSV
pub fn rgb_to_hsv(rgb: u32) -> Hsv {
    let (r8, g8, b8) = unpack_rgb888(rgb);
    let r = normalize_channel(r8);
    let g = normalize_channel(g8);
    let b = normalize_channel(b8);

    let cmax = max3(r, g, b);
    let cmin = min3(r, g, b);
    let diff = cmax - cmin;

    // cmax is always one of r, g or b, so the final arm is unreachable in
    // practice; it keeps the hue at 0 like the legacy code.
    let hue = if cmax == cmin {
        0.0
    } else if cmax == r {
        sector_hue(g - b, diff, 360.0)
    } else if cmax == g {
        sector_hue(b - r, diff, 120.0)
    } else if cmax == b {
        sector_hue(r - g, diff, 240.0)
    } else {
        0.0
    };

    let sat = if cmax == 0.0 {
        0.0
    } else {
        (f64::from(diff / cmax) * 100.0) as f32
    };
    let val = (f64::from(cmax) * 100.0) as f32;

    Hsv {
        hue: hue as u32,
        sat: sat as u32,
        val: val as u32,
    }
}

/// Convert HSV to `0x00RRGGBB`
///
/// Hue is taken modulo 360. Saturation or value above 100 is clamped to 100.
pub fn hsv_to_rgb(hsv: Hsv) -> u32 {
    if hsv.sat > 100 || hsv.val > 100 {
        log::warn!(
            "HSV out of range (sat={}, val={}), clamping to 100",
            hsv.sat,
            hsv.val
        );
    }
    let hsv = hsv.normalized();

    let rgb_max = hsv.val as f32 * 2.55f32;
    let rgb_min = (f64::from(rgb_max) * (100.0 - f64::from(hsv.sat as f32)) / 100.0) as f32;
    let sector = hsv.hue / 60;
    let offset = hsv.hue % 60;

    // RGB adjustment amount by hue
    let rgb_adj = (f64::from((rgb_max - rgb_min) * offset as f32) / 60.0) as f32;

    let (r, g, b) = match sector {
        0 => (rgb_max, rgb_min + rgb_adj, rgb_min),
        1 => (rgb_max - rgb_adj, rgb_max, rgb_min),
        2 => (rgb_min, rgb_max, rgb_min + rgb_adj),
        3 => (rgb_min, rgb_max - rgb_adj, rgb_max),
        4 => (rgb_min + rgb_adj, rgb_min, rgb_max),
        _ => (rgb_max, rgb_min, rgb_max - rgb_adj),
    };

    pack_rgb888(r as u8, g as u8, b as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_hsv(0xFF0000), Hsv::new(0, 100, 100));
        assert_eq!(rgb_to_hsv(0x00FF00), Hsv::new(120, 100, 100));
        assert_eq!(rgb_to_hsv(0x0000FF), Hsv::new(240, 100, 100));
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(rgb_to_hsv(0x000000), Hsv::new(0, 0, 0));
        assert_eq!(rgb_to_hsv(0xFFFFFF), Hsv::new(0, 0, 100));
        assert_eq!(rgb_to_hsv(0x808080), Hsv::new(0, 0, 50));
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        // 0xFF8000 has an exact hue of 30.12 degrees
        assert_eq!(rgb_to_hsv(0xFF8000), Hsv::new(30, 100, 100));
        assert_eq!(rgb_to_hsv(0xFF6347), Hsv::new(9, 72, 100));
        assert_eq!(rgb_to_hsv(0x8A2BE2), Hsv::new(271, 80, 88));
    }

    #[test]
    fn test_hsv_to_rgb_sectors() {
        assert_eq!(hsv_to_rgb(Hsv::new(0, 100, 100)), 0xFF0000);
        assert_eq!(hsv_to_rgb(Hsv::new(60, 100, 100)), 0xFFFF00);
        assert_eq!(hsv_to_rgb(Hsv::new(120, 100, 100)), 0x00FF00);
        assert_eq!(hsv_to_rgb(Hsv::new(180, 100, 100)), 0x00FFFF);
        assert_eq!(hsv_to_rgb(Hsv::new(240, 100, 100)), 0x0000FF);
        assert_eq!(hsv_to_rgb(Hsv::new(300, 100, 100)), 0xFF00FF);
    }

    #[test]
    fn test_hsv_to_rgb_partial_sector() {
        assert_eq!(hsv_to_rgb(Hsv::new(30, 100, 100)), 0xFF7F00);
        assert_eq!(hsv_to_rgb(Hsv::new(90, 100, 100)), 0x7FFF00);
        assert_eq!(hsv_to_rgb(Hsv::new(210, 50, 80)), 0x6699CC);
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hsv_to_rgb(Hsv::new(360, 100, 100)), 0xFF0000);
        assert_eq!(
            hsv_to_rgb(Hsv::new(420, 100, 100)),
            hsv_to_rgb(Hsv::new(60, 100, 100))
        );
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(hsv_to_rgb(Hsv::new(0, 250, 250)), 0xFF0000);
        assert_eq!(hsv_to_rgb(Hsv::new(0, 0, 1000)), 0xFFFFFF);
    }

    #[test]
    fn test_from_impls() {
        let hsv: Hsv = 0x00FF00.into();
        assert_eq!(hsv, Hsv::new(120, 100, 100));
        let rgb: u32 = hsv.into();
        assert_eq!(rgb, 0x00FF00);
    }
}
