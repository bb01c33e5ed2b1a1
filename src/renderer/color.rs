//! RGB colors with CSS-style hex notation

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An opaque 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (leading `#` optional, case-insensitive)
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            3 => {
                // #abc expands to #aabbcc
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
                Some(Self::rgb(digit(0)?, digit(1)?, digit(2)?))
            }
            _ => None,
        }
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Float RGBA for vertex colors (alpha is always 1)
    pub fn to_rgba(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }

    /// Uniformly random color, one byte per channel
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::rgb(rng.random(), rng.random(), rng.random())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s).ok_or_else(|| format!("invalid color '{s}', expected #rrggbb"))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

/// Default palette
pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(0x00, 0x00, 0x00);
    /// Fill for bodies created with a radius below `SMALL_BODY_RADIUS`
    pub const SMALL_BODY: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const LARGE_BODY: Color = Color::rgb(0xff, 0xf0, 0x00);
    pub const BODY_STROKE: Color = Color::rgb(0x44, 0x44, 0x00);
    /// Pending launch vector while aiming
    pub const AIM_LINE: Color = Color::rgb(0xff, 0x00, 0xff);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#fff000"), Some(palette::LARGE_BODY));
        assert_eq!(Color::from_hex("444400"), Some(palette::BODY_STROKE));
        assert_eq!(Color::from_hex("#FF00FF"), Some(palette::AIM_LINE));
        assert_eq!(Color::from_hex("#f00"), Some(palette::SMALL_BODY));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn test_to_hex_pads_channels() {
        assert_eq!(Color::rgb(1, 2, 255).to_hex(), "#0102ff");
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&palette::AIM_LINE).unwrap();
        assert_eq!(json, "\"#ff00ff\"");
        let back: Color = serde_json::from_str("\"#444400\"").unwrap();
        assert_eq!(back, palette::BODY_STROKE);
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn test_random_is_seeded() {
        let mut a = Pcg32::seed_from_u64(7);
        let mut b = Pcg32::seed_from_u64(7);
        assert_eq!(Color::random(&mut a), Color::random(&mut b));
    }
}
