//! Colour conversion core
//!
//! Everything in here is pure: no I/O, no shared mutable state. The HTTP
//! layer hands in a raw string and gets a canonical [`Rgb`] back, which can
//! then be expanded into every supported representation.
//!
//! # Example
//!
//! ```
//! use pinea_colours::color::{normalize, to_formats};
//!
//! let colour = normalize("#f77");
//! assert_eq!(colour.to_string(), "FF7777");
//!
//! let formats = to_formats(colour);
//! assert_eq!(formats.rgb_string(), "(255, 119, 119)");
//! ```

mod convert;
mod decode;
mod names;
mod normalize;

use serde::{Serialize, Serializer};
use std::fmt;

pub use convert::{to_formats, ColorFormats, FormatRow};
pub use decode::{
    decode_cmyk_tuple, decode_hsv_tuple, decode_rgb_int, decode_rgb_tuple, parse_float_or,
    parse_int_or,
};
pub use names::NameTable;
pub use normalize::{normalize, normalize_hex};

/// A canonical 24-bit colour.
///
/// Maps one-to-one onto a 6-digit uppercase hex string, which is what
/// `Display` produces (without the leading `#`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack the low 24 bits of a packed `0xRRGGBB` value.
    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// `R*65536 + G*256 + B`
    #[inline]
    pub const fn packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parse a strict 6-digit hex string, with or without a leading `#`.
    ///
    /// Use [`normalize`] for user input; this only accepts canonical text.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(hex, 16).ok().map(Self::from_packed)
    }

    /// `#RRGGBB`
    pub fn to_hex(self) -> String {
        format!("#{self}")
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("#{self}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_uppercase_hex() {
        assert_eq!(Rgb::new(0xF2, 0x78, 0x78).to_string(), "F27878");
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "010203");
    }

    #[test]
    fn test_to_hex_has_hash() {
        assert_eq!(Rgb::new(0x72, 0xAE, 0xF5).to_hex(), "#72AEF5");
    }

    #[test]
    fn test_packed_roundtrip() {
        let colour = Rgb::new(242, 120, 120);
        assert_eq!(colour.packed(), 15_890_552);
        assert_eq!(Rgb::from_packed(15_890_552), colour);
    }

    #[test]
    fn test_from_packed_ignores_high_bits() {
        assert_eq!(Rgb::from_packed(0xFF00_0000 | 0x0012_3456), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#f27878"), Some(Rgb::new(242, 120, 120)));
        assert_eq!(Rgb::from_hex("F27878"), Some(Rgb::new(242, 120, 120)));
        assert_eq!(Rgb::from_hex("F2787"), None);
        assert_eq!(Rgb::from_hex("+F2787"), None);
        assert_eq!(Rgb::from_hex("GG0000"), None);
    }

    #[test]
    fn test_every_hex_string_maps_back() {
        for packed in (0..=0xFF_FFFFu32).step_by(0x01_0101) {
            let colour = Rgb::from_packed(packed);
            assert_eq!(Rgb::from_hex(&colour.to_string()), Some(colour));
        }
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(0, 0x80, 0xFF)).unwrap();
        assert_eq!(json, "\"#0080FF\"");
    }
}
