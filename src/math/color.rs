/// Convert a packed 0xRRGGBB value to RGB floats in [0, 1]
pub const fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

/// Rich gold used by the primary mesh and the key light
pub const GOLD: u32 = 0xD4AF37;
/// Bright gold used for glow and the rim light
pub const BRIGHT_GOLD: u32 = 0xFFD700;
pub const WHITE: u32 = 0xFFFFFF;
pub const SILVER: u32 = 0xC0C0C0;
pub const BLACK: u32 = 0x000000;
