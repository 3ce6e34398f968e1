use crate::*;

fn channel_diff(a: u32, b: u32, shift: u32) -> u32 {
    let a = (a >> shift) & 0xFF;
    let b = (b >> shift) & 0xFF;
    a.abs_diff(b)
}

#[test]
fn test_rgb565_roundtrip_is_identity_for_all_values() {
    for w in 0..=u16::MAX {
        assert_eq!(rgb_to_rgb565(rgb565_to_rgb(w)), w, "0x{:04x}", w);
    }
}

#[test]
fn test_swapped_roundtrip_is_identity_for_all_values() {
    for w in 0..=u16::MAX {
        assert_eq!(swap_rgb565(swap_rgb565(w)), w);
        assert_eq!(rgb_to_swapped_rgb565(swapped_rgb565_to_rgb(w)), w, "0x{:04x}", w);
    }
}

#[test]
fn test_rgb565_expansion_is_deterministic() {
    for w in 0..=u16::MAX {
        let rgb = rgb565_to_rgb(w);
        assert_eq!(rgb, rgb565_to_rgb(w));
        assert_eq!(rgb & 0xFF00_0000, 0);
    }
}

#[test]
fn test_rgb888_quantization_error_per_channel() {
    // Every channel value once per channel, other channels zero
    for v in 0u32..=255 {
        for shift in [16, 8, 0] {
            let rgb = v << shift;
            let back = rgb565_to_rgb(rgb_to_rgb565(rgb));
            let limit = if shift == 8 { 4 } else { 8 };
            assert!(
                channel_diff(rgb, back, shift) <= limit,
                "0x{:06x} -> 0x{:06x}",
                rgb,
                back
            );
        }
    }
}

#[test]
fn test_hsv_inverts_full_intensity_hues() {
    let colors = [
        0x000000, 0xFFFFFF, 0xFF0000, 0x00FF00, 0x0000FF, 0xFFFF00, 0x00FFFF, 0xFF00FF,
    ];
    for rgb in colors {
        let back = hsv_to_rgb(rgb_to_hsv(rgb));
        for shift in [16, 8, 0] {
            assert!(
                channel_diff(rgb, back, shift) <= 1,
                "0x{:06x} -> {:?} -> 0x{:06x}",
                rgb,
                rgb_to_hsv(rgb),
                back
            );
        }
    }
}

#[test]
fn test_gray_levels_stay_gray() {
    for v in 0u32..=255 {
        let rgb = v * 0x010101;
        let hsv = rgb_to_hsv(rgb);
        assert_eq!((hsv.hue, hsv.sat), (0, 0));

        let back = hsv_to_rgb(hsv);
        let level = back & 0xFF;
        assert_eq!(back, level * 0x010101, "gray 0x{:06x} lost neutrality", rgb);
        // Value only has 101 steps, and both directions truncate
        assert!(level <= v && v - level <= 3, "gray {} came back as {}", v, level);
    }
}

#[test]
fn test_hsv_then_rgb565_pipeline() {
    let pixel = rgb_to_rgb565(hsv_to_rgb(Hsv::new(120, 100, 100)));
    assert_eq!(pixel, 0x07E0);
    assert_eq!(PixelFormat::SwappedRgb565.encode(hsv_to_rgb(Hsv::new(240, 100, 100))), 0x1F00);
}
