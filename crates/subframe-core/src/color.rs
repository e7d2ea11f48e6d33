use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of entries in a subtitle palette.
pub const PALETTE_SIZE: usize = 256;

/// A packed 32-bit ARGB color as stored in subtitle palettes.
///
/// Byte layout: bits 24–31 alpha, 16–23 red, 8–15 green, 0–7 blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "ArgbRepr", into = "u32")]
pub struct Argb(pub u32);

impl Argb {
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);

    /// Pack four channels into an ARGB word.
    pub fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub fn alpha(&self) -> u8 {
        ((self.0 >> 24) & 0xFF) as u8
    }

    pub fn red(&self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    pub fn green(&self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    pub fn blue(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Unpack into straight-alpha RGBA bytes.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    /// Parse "#AARRGGBB", or "#RRGGBB" as an opaque color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex);
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| ColorError::InvalidHex)?;
        match hex.len() {
            6 => Ok(Argb(0xFF00_0000 | value)),
            8 => Ok(Argb(value)),
            _ => Err(ColorError::InvalidHex),
        }
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Palette entries may be written as integers or as hex strings in fixtures.
#[derive(Deserialize)]
#[serde(untagged)]
enum ArgbRepr {
    Packed(u32),
    Hex(String),
}

impl TryFrom<ArgbRepr> for Argb {
    type Error = ColorError;

    fn try_from(repr: ArgbRepr) -> Result<Self, Self::Error> {
        match repr {
            ArgbRepr::Packed(value) => Ok(Argb(value)),
            ArgbRepr::Hex(hex) => Argb::from_hex(&hex),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color string")]
    InvalidHex,
}

/// A 256-entry lookup table from pixel index byte to ARGB color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Argb>", into = "Vec<Argb>")]
pub struct Palette {
    entries: Vec<Argb>,
}

impl Palette {
    /// A palette with every entry set to `color`.
    pub fn filled(color: Argb) -> Self {
        Self {
            entries: vec![color; PALETTE_SIZE],
        }
    }

    /// Look up the color for a pixel index. Every `u8` is a valid index.
    pub fn get(&self, index: u8) -> Argb {
        self.entries[index as usize]
    }

    /// Replace a single entry.
    pub fn set(&mut self, index: u8, color: Argb) {
        self.entries[index as usize] = color;
    }

    pub fn entries(&self) -> &[Argb] {
        &self.entries
    }
}

impl TryFrom<Vec<Argb>> for Palette {
    type Error = crate::SubframeError;

    fn try_from(entries: Vec<Argb>) -> Result<Self, Self::Error> {
        if entries.len() != PALETTE_SIZE {
            return Err(crate::SubframeError::InvalidPalette(format!(
                "expected {} entries, got {}",
                PALETTE_SIZE,
                entries.len()
            )));
        }
        Ok(Self { entries })
    }
}

impl From<Palette> for Vec<Argb> {
    fn from(palette: Palette) -> Self {
        palette.entries
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::filled(Argb::TRANSPARENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_unpack() {
        let c = Argb(0x80FF_0000);
        assert_eq!(c.to_rgba8(), [255, 0, 0, 128]);
    }

    #[test]
    fn test_argb_from_channels() {
        let c = Argb::from_channels(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c, Argb(0x1234_5678));
        assert_eq!(c.alpha(), 0x12);
        assert_eq!(c.blue(), 0x78);
    }

    #[test]
    fn test_argb_from_hex() {
        assert_eq!(Argb::from_hex("#80FF0000").unwrap(), Argb(0x80FF_0000));
        assert_eq!(Argb::from_hex("00FF00").unwrap(), Argb(0xFF00_FF00));
    }

    #[test]
    fn test_argb_from_hex_invalid() {
        assert!(Argb::from_hex("invalid").is_err());
        assert!(Argb::from_hex("#GG0000").is_err());
        assert!(Argb::from_hex("#FFF").is_err());
        assert!(Argb::from_hex("+FFFFF").is_err());
        assert!(Argb::from_hex("##FF0000").is_err());
    }

    #[test]
    fn test_argb_display() {
        assert_eq!(format!("{}", Argb(0xFF00_FF00)), "#FF00FF00");
    }

    #[test]
    fn test_palette_get_set() {
        let mut palette = Palette::default();
        palette.set(5, Argb(0xFF00_FF00));
        assert_eq!(palette.get(5), Argb(0xFF00_FF00));
        assert_eq!(palette.get(255), Argb::TRANSPARENT);
    }

    #[test]
    fn test_palette_deserialize_mixed_entries() {
        let mut entries: Vec<serde_json::Value> = vec![serde_json::json!(0); PALETTE_SIZE];
        entries[1] = serde_json::json!("#80FF0000");
        entries[2] = serde_json::json!(0xFF00_00FFu32);
        let palette: Palette = serde_json::from_value(serde_json::Value::Array(entries)).unwrap();
        assert_eq!(palette.get(1).to_rgba8(), [255, 0, 0, 128]);
        assert_eq!(palette.get(2).to_rgba8(), [0, 0, 255, 255]);
    }

    #[test]
    fn test_palette_rejects_wrong_length() {
        let result: Result<Palette, _> = serde_json::from_str("[0, 1, 2]");
        assert!(result.is_err());
    }
}
