// Packed 0xAARRGGBB pixels, the layout minifb reads (it ignores the alpha byte).

/// One pixel split into its four channels.
#[cfg_attr(not(test), allow(dead_code, reason = "only produced by unpack"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Pack four channels into one pixel: alpha 24..31, red 16..23, green 8..15, blue 0..7.
#[inline]
pub const fn pack(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Inverse of [`pack`].
#[cfg_attr(not(test), allow(dead_code, reason = "decoding pixels is only needed by tests"))]
#[inline]
pub const fn unpack(px: u32) -> Rgba {
    Rgba {
        r: ((px >> 16) & 0xFF) as u8,
        g: ((px >> 8) & 0xFF) as u8,
        b: (px & 0xFF) as u8,
        a: (px >> 24) as u8,
    }
}

/// Reduce a float to 8 bits the way a C cast chain does:
/// truncate toward zero, then wrap modulo 256.
#[inline]
pub fn truncate8(v: f64) -> u8 {
    // f64 -> i64 saturates at the extremes; the low byte is what we keep.
    (v as i64) as u8
}
