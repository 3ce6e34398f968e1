//! Pixel formats, frame-buffer encoding and color parsing

use anyhow::{bail, ensure, Context, Result};
use core::fmt::Write;
use embedded_graphics_core::pixelcolor::{raw::RawU16, IntoStorage, Rgb565, Rgb888, RgbColor};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::named;
use crate::rgb565::{
    pack_rgb888, rgb565_to_rgb, rgb_to_rgb565, rgb_to_swapped_rgb565, swapped_rgb565_to_rgb,
    unpack_rgb888,
};

/// 16-bit layout a panel expects on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelFormat {
    #[default]
    Rgb565,
    SwappedRgb565,
}

impl PixelFormat {
    pub const fn encode(self, rgb: u32) -> u16 {
        match self {
            Self::Rgb565 => rgb_to_rgb565(rgb),
            Self::SwappedRgb565 => rgb_to_swapped_rgb565(rgb),
        }
    }

    pub const fn decode(self, raw: u16) -> u32 {
        match self {
            Self::Rgb565 => rgb565_to_rgb(raw),
            Self::SwappedRgb565 => swapped_rgb565_to_rgb(raw),
        }
    }
}

/// Encode RGB888 pixels into a frame-buffer region
pub fn encode_slice(format: PixelFormat, src: &[u32], dst: &mut [u16]) -> Result<()> {
    ensure!(
        src.len() == dst.len(),
        "Pixel count mismatch: {} source, {} destination",
        src.len(),
        dst.len()
    );

    for (out, &rgb) in dst.iter_mut().zip(src) {
        *out = format.encode(rgb);
    }

    trace!("Encoded {} pixels as {:?}", src.len(), format);
    Ok(())
}

/// Decode a frame-buffer region back to RGB888
pub fn decode_slice(format: PixelFormat, src: &[u16], dst: &mut [u32]) -> Result<()> {
    ensure!(
        src.len() == dst.len(),
        "Pixel count mismatch: {} source, {} destination",
        src.len(),
        dst.len()
    );

    for (out, &raw) in dst.iter_mut().zip(src) {
        *out = format.decode(raw);
    }

    trace!("Decoded {} pixels from {:?}", src.len(), format);
    Ok(())
}

/// Fill a frame-buffer region with one color
pub fn fill_slice(format: PixelFormat, rgb: u32, dst: &mut [u16]) {
    let pixel = format.encode(rgb);
    dst.fill(pixel);
    trace!("Filled {} pixels with 0x{:04x}", dst.len(), pixel);
}

/// Render `0x00RRGGBB` as `#RRGGBB`
pub fn to_hex(rgb: u32) -> heapless::String<7> {
    let mut s = heapless::String::new();
    write!(&mut s, "#{:06X}", rgb & 0x00FF_FFFF).ok();
    s
}

fn parse_hex_digits(digits: &str) -> Result<u32> {
    ensure!(
        digits.len() == 6,
        "Expected 6 hex digits, got {}",
        digits.len()
    );
    ensure!(
        digits.bytes().all(|c| c.is_ascii_hexdigit()),
        "Non-hex character in '{}'",
        digits
    );
    Ok(u32::from_str_radix(digits, 16)?)
}

/// Parse `#RRGGBB`, `0xRRGGBB`, bare `RRGGBB` or a color name
pub fn parse_color(input: &str) -> Result<u32> {
    let s = input.trim();

    let prefixed = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"));
    if let Some(digits) = prefixed {
        return parse_hex_digits(digits).with_context(|| format!("Invalid hex color '{}'", input));
    }

    if let Some(rgb) = named::lookup(s) {
        return Ok(rgb);
    }

    if s.len() == 6 && s.bytes().all(|c| c.is_ascii_hexdigit()) {
        return parse_hex_digits(s);
    }

    bail!("Unknown color '{}'", input)
}

pub fn to_pixel(color: u16) -> Rgb565 {
    Rgb565::from(RawU16::new(color))
}

pub fn from_pixel(pixel: Rgb565) -> u16 {
    pixel.into_storage()
}

pub fn to_rgb888_pixel(rgb: u32) -> Rgb888 {
    let (r, g, b) = unpack_rgb888(rgb);
    Rgb888::new(r, g, b)
}

pub fn from_rgb888_pixel(pixel: Rgb888) -> u32 {
    pack_rgb888(pixel.r(), pixel.g(), pixel.b())
}
