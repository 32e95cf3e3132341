//! Packed 8-bit palette colors

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 8-bit-per-channel color as stored in palettes and sector data.
///
/// Memory layout is B, G, R, A so that the raw little-endian `u32` view reads
/// `0xAARRGGBB`.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct PalEntry {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl PalEntry {
    /// Opaque white, every bit set
    pub const WHITE: PalEntry = PalEntry::rgba(255, 255, 255, 255);

    /// Transparent black, every bit clear
    pub const BLACK: PalEntry = PalEntry::rgba(0, 0, 0, 0);

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Create from the packed `0xAARRGGBB` form
    pub const fn from_raw(raw: u32) -> Self {
        let [b, g, r, a] = raw.to_le_bytes();
        Self { b, g, r, a }
    }

    /// Packed `0xAARRGGBB` form
    pub const fn to_raw(self) -> u32 {
        u32::from_le_bytes([self.b, self.g, self.r, self.a])
    }

    /// True if the color channels are all zero, ignoring alpha
    pub const fn rgb_is_black(self) -> bool {
        self.to_raw() & 0x00FF_FFFF == 0
    }

    /// Normalized `[r, g, b, a]`
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Quantize a normalized color channel-by-channel, rounding to nearest
    ///
    /// Inputs outside 0.0-1.0 are clamped.
    pub fn from_rgb_f32(r: f32, g: f32, b: f32) -> Self {
        let q = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(q(r), q(g), q(b))
    }
}

impl From<u32> for PalEntry {
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}

impl From<PalEntry> for u32 {
    fn from(pe: PalEntry) -> Self {
        pe.to_raw()
    }
}
