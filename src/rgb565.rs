/// RGB888 <-> RGB565 packing
///
/// RGB888 values are carried in a `u32` as `0x00RRGGBB`. The top byte is
/// ignored on input and always zero on output.
///
/// Panels such as the ST7789 on an 8-bit bus expect the two bytes of each
/// RGB565 pixel in the opposite order, hence the swapped variants.

const RED_MASK: u16 = 0b11111_000000_00000;
const GREEN_MASK: u16 = 0b00000_111111_00000;
const BLUE_MASK: u16 = 0b00000_000000_11111;

/// Pack three 8-bit channels into `0x00RRGGBB`
pub const fn pack_rgb888(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Split `0x00RRGGBB` into its channels
pub const fn unpack_rgb888(rgb: u32) -> (u8, u8, u8) {
    ((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Convert RGB888 to RGB565 by keeping the top 5/6/5 bits of each channel
pub const fn rgb_to_rgb565(rgb: u32) -> u16 {
    let (r, g, b) = unpack_rgb888(rgb);
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | ((b as u16 & 0xF8) >> 3)
}

/// Convert RGB565 to RGB888
///
/// Each field is scaled with `(field * mult + bias) >> 6`, which lands on
/// `round(field * 255 / max)` for every 5 and 6 bit value. Plain bit
/// replication differs by one on some inputs, so it is not used here.
pub const fn rgb565_to_rgb(color: u16) -> u32 {
    let r5 = ((color & RED_MASK) >> 11) as u32;
    let g6 = ((color & GREEN_MASK) >> 5) as u32;
    let b5 = (color & BLUE_MASK) as u32;

    let r = (r5 * 527 + 23) >> 6;
    let g = (g6 * 259 + 33) >> 6;
    let b = (b5 * 527 + 23) >> 6;

    (r << 16) | (g << 8) | b
}

/// Exchange the high and low byte of an RGB565 pixel
pub const fn swap_rgb565(color: u16) -> u16 {
    color.swap_bytes()
}

/// Convert RGB888 to byte-swapped RGB565
pub const fn rgb_to_swapped_rgb565(rgb: u32) -> u16 {
    swap_rgb565(rgb_to_rgb565(rgb))
}

/// Convert byte-swapped RGB565 back to RGB888
pub const fn swapped_rgb565_to_rgb(swapped: u16) -> u32 {
    rgb565_to_rgb(swap_rgb565(swapped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_colors() {
        assert_eq!(rgb_to_rgb565(0xFF0000), 0xF800);
        assert_eq!(rgb_to_rgb565(0x00FF00), 0x07E0);
        assert_eq!(rgb_to_rgb565(0x0000FF), 0x001F);
        assert_eq!(rgb_to_rgb565(0x000000), 0x0000);
        assert_eq!(rgb_to_rgb565(0xFFFFFF), 0xFFFF);
    }

    #[test]
    fn test_top_byte_ignored() {
        assert_eq!(rgb_to_rgb565(0xAB12_3456), rgb_to_rgb565(0x0012_3456));
    }

    #[test]
    fn test_expansion_endpoints() {
        assert_eq!(rgb565_to_rgb(0x0000), 0x000000);
        assert_eq!(rgb565_to_rgb(0xFFFF), 0xFFFFFF);
        assert_eq!(rgb565_to_rgb(0xF800), 0xFF0000);
        assert_eq!(rgb565_to_rgb(0x07E0), 0x00FF00);
        assert_eq!(rgb565_to_rgb(0x001F), 0x0000FF);
    }

    #[test]
    fn test_expansion_matches_rounded_scale() {
        for field in 0u32..32 {
            let expected = (field * 255 + 15) / 31;
            let c = (field as u16) << 11;
            assert_eq!(rgb565_to_rgb(c) >> 16, expected, "red field {}", field);
            assert_eq!(rgb565_to_rgb(field as u16), expected, "blue field {}", field);
        }
        for field in 0u32..64 {
            let expected = (field * 255 + 31) / 63;
            let c = (field as u16) << 5;
            assert_eq!((rgb565_to_rgb(c) >> 8) & 0xFF, expected, "green field {}", field);
        }
    }

    // Ensure color packing is correct
    #[test]
    fn test_rgb565_bit_packing() {
        let color = rgb_to_rgb565(pack_rgb888(0b11111000, 0b11111100, 0b11111000));

        assert_eq!((color >> 11) & 0x1F, 0b11111);
        assert_eq!((color >> 5) & 0x3F, 0b111111);
        assert_eq!(color & 0x1F, 0b11111);
    }

    #[test]
    fn test_swapped_red() {
        assert_eq!(rgb_to_swapped_rgb565(0xFF0000), 0x00F8);
        assert_eq!(swapped_rgb565_to_rgb(0x00F8), 0xFF0000);
    }

    #[test]
    fn test_pack_unpack() {
        assert_eq!(pack_rgb888(0x12, 0x34, 0x56), 0x123456);
        assert_eq!(unpack_rgb888(0xFF12_3456), (0x12, 0x34, 0x56));
    }
}
