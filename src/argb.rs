//! Packed 32-bit ARGB pixel values, and conversions to/from [`image::Rgba`].

/// Mask which keeps only the alpha byte of a packed ARGB pixel.
pub const ALPHA_MASK: u32 = 0xFF00_0000;
/// Mask which isolates the red channel, zeroing green, blue and alpha.
pub const RED_MASK: u32 = 0x00FF_0000;
/// Mask which isolates the green channel, zeroing red, blue and alpha.
pub const GREEN_MASK: u32 = 0x0000_FF00;
/// Mask which isolates the blue channel, zeroing red, green and alpha.
pub const BLUE_MASK: u32 = 0x0000_00FF;

/// Packs an RGBA byte quadruple into a single ARGB word.
pub fn pack(image::Rgba([r, g, b, a]): image::Rgba<u8>) -> u32 {
    (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Splits a packed ARGB word back into RGBA bytes.
pub fn unpack(argb: u32) -> image::Rgba<u8> {
    image::Rgba([
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
        (argb >> 24) as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack() {
        let orange = image::Rgba([0xFF, 0x80, 0x00, 0xFF]);
        assert_eq!(pack(orange), 0xFFFF8000);
        assert_eq!(unpack(0xFFFF8000), orange);
        // Masks pick out exactly one channel of solid white
        assert_eq!(0xFFFFFFFF & RED_MASK, 0x00FF0000);
        assert_eq!(0xFFFFFFFF & GREEN_MASK, 0x0000FF00);
        assert_eq!(0xFFFFFFFF & BLUE_MASK, 0x000000FF);
    }
}
