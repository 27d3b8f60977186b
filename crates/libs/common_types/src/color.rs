use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
    #[error("unknown color name: {0}")]
    UnknownName(String),
    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Mean of the three channels, in `0.0..=255.0`.
    #[must_use]
    pub fn brightness(&self) -> f64 {
        (f64::from(self.red) + f64::from(self.green) + f64::from(self.blue)) / 3.0
    }

    #[must_use]
    pub fn max_channel(&self) -> u8 {
        self.red.max(self.green).max(self.blue)
    }

    #[must_use]
    pub fn min_channel(&self) -> u8 {
        self.red.min(self.green).min(self.blue)
    }

    /// `#rrggbb`, lowercase and zero padded.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:x}", Srgb::from(*self))
    }

    /// Parses `#rrggbb` (the leading `#` is optional, case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, ParseError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseError::InvalidHex(hex.to_string()));
        }
        let srgb = Srgb::<u8>::from_str(digits)
            .map_err(|_| ParseError::InvalidHex(hex.to_string()))?;
        Ok(srgb.into())
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.red, rgb.green, rgb.blue)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

/// The fixed vocabulary of human-readable garment colors.
///
/// Every name parses from its English kebab-case form and from the Chinese
/// label the wardrobe catalog stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorName {
    Black,
    DarkGray,
    Gray,
    LightGray,
    White,
    Red,
    Orange,
    Pink,
    YellowGreen,
    Cyan,
    Green,
    Purple,
    Teal,
    Blue,
    Yellow,
    Magenta,
    MixedColor,
    Navy,
    LightBlue,
    Brown,
    Tan,
    Beige,
}

impl ColorName {
    pub const ALL: [Self; 22] = [
        Self::Black,
        Self::DarkGray,
        Self::Gray,
        Self::LightGray,
        Self::White,
        Self::Red,
        Self::Orange,
        Self::Pink,
        Self::YellowGreen,
        Self::Cyan,
        Self::Green,
        Self::Purple,
        Self::Teal,
        Self::Blue,
        Self::Yellow,
        Self::Magenta,
        Self::MixedColor,
        Self::Navy,
        Self::LightBlue,
        Self::Brown,
        Self::Tan,
        Self::Beige,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkGray => "dark-gray",
            Self::Gray => "gray",
            Self::LightGray => "light-gray",
            Self::White => "white",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::YellowGreen => "yellow-green",
            Self::Cyan => "cyan",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Teal => "teal",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Magenta => "magenta",
            Self::MixedColor => "mixed-color",
            Self::Navy => "navy",
            Self::LightBlue => "light-blue",
            Self::Brown => "brown",
            Self::Tan => "tan",
            Self::Beige => "beige",
        }
    }

    /// Label used by the Chinese-language catalog.
    #[must_use]
    pub const fn label_zh(&self) -> &'static str {
        match self {
            Self::Black => "黑色",
            Self::DarkGray => "深灰",
            Self::Gray => "灰色",
            Self::LightGray => "浅灰",
            Self::White => "白色",
            Self::Red => "红色",
            Self::Orange => "橙色",
            Self::Pink => "粉色",
            Self::YellowGreen => "黄绿色",
            Self::Cyan => "青色",
            Self::Green => "绿色",
            Self::Purple => "紫色",
            Self::Teal => "蓝绿色",
            Self::Blue => "蓝色",
            Self::Yellow => "黄色",
            Self::Magenta => "紫红色",
            Self::MixedColor => "混合色",
            Self::Navy => "深蓝",
            Self::LightBlue => "浅蓝",
            Self::Brown => "棕色",
            Self::Tan => "褐色",
            Self::Beige => "米色",
        }
    }

    /// Lenient lookup used for names coming from storage or the remote model.
    #[must_use]
    pub fn parse_lenient(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "dark-blue" => return Ok(Self::Navy),
            "grey" => return Ok(Self::Gray),
            "dark-grey" => return Ok(Self::DarkGray),
            "light-grey" => return Ok(Self::LightGray),
            "mixed" => return Ok(Self::MixedColor),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized || c.label_zh() == trimmed)
            .ok_or_else(|| ParseError::UnknownName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_of_extremes() {
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(255, 255, 255).to_hex(), "#ffffff");
        assert_eq!(Rgb::new(1, 10, 171).to_hex(), "#010aab");
    }

    #[test]
    fn hex_round_trip() {
        // Strided walk over the cube keeps this fast in debug builds.
        for red in (0..=255u8).step_by(5) {
            for green in (0..=255u8).step_by(3) {
                for blue in (0..=255u8).step_by(7) {
                    let rgb = Rgb::new(red, green, blue);
                    let hex = rgb.to_hex();
                    assert_eq!(Rgb::from_hex(&hex), Ok(rgb));
                    assert_eq!(Rgb::from_hex(&hex).map(|c| c.to_hex()), Ok(hex));
                }
            }
        }
    }

    #[test]
    fn rejects_short_hex() {
        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("#gg0000").is_err());
        assert_eq!(Rgb::from_hex("FF8000"), Ok(Rgb::new(255, 128, 0)));
    }

    #[test]
    fn parses_english_and_chinese_names() {
        assert_eq!("红色".parse::<ColorName>(), Ok(ColorName::Red));
        assert_eq!("Dark Blue".parse::<ColorName>(), Ok(ColorName::Navy));
        assert_eq!("light-gray".parse::<ColorName>(), Ok(ColorName::LightGray));
        assert_eq!(ColorName::parse_lenient("藏青色"), None);
        for color in ColorName::ALL {
            assert_eq!(color.as_str().parse::<ColorName>(), Ok(color));
            assert_eq!(color.label_zh().parse::<ColorName>(), Ok(color));
        }
    }

    #[test]
    fn serializes_kebab_case() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&ColorName::YellowGreen)?, "\"yellow-green\"");
        Ok(())
    }
}
