//! Display Colors - RGB888, HSV and RGB565 conversions for embedded displays
//!
//! All conversions are pure functions on packed integers: RGB888 lives in a
//! `u32` as `0x00RRGGBB`, RGB565 in a `u16`. Nothing here allocates or keeps
//! state, so every function can be called from any thread or interrupt.

pub mod config;
pub mod format;
pub mod hsv;
pub mod named;
pub mod rgb565;

#[cfg(test)]
mod tests;

pub use config::ColorConfig;
pub use format::{
    decode_slice, encode_slice, fill_slice, from_pixel, from_rgb888_pixel, parse_color, to_hex,
    to_pixel, to_rgb888_pixel, PixelFormat,
};
pub use hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
pub use named::{lookup, name_of, NAMED_COLORS};
pub use rgb565::{
    pack_rgb888, rgb565_to_rgb, rgb_to_rgb565, rgb_to_swapped_rgb565, swap_rgb565,
    swapped_rgb565_to_rgb, unpack_rgb888,
};
