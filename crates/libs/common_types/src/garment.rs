use crate::ParseError;
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Brightness above which a garment counts as light.
pub const LIGHT_THRESHOLD: f64 = 150.0;
/// Brightness below which a garment counts as dark.
pub const DARK_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Pants,
    Shoes,
    Accessory,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Top, Self::Pants, Self::Shoes, Self::Accessory];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Pants => "pants",
            Self::Shoes => "shoes",
            Self::Accessory => "accessory",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownVariant {
                kind: "category",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    All,
}

impl Season {
    pub const ALL: [Self; 5] = [
        Self::Spring,
        Self::Summer,
        Self::Autumn,
        Self::Winter,
        Self::All,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
            Self::All => "all",
        }
    }

    /// Meteorological season of a month (1-12, northern hemisphere).
    #[must_use]
    pub const fn for_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    #[must_use]
    pub fn current() -> Self {
        Self::for_month(Local::now().month())
    }

    /// Whether a garment tagged with `self` can be worn in `season`.
    #[must_use]
    pub fn suits(&self, season: Self) -> bool {
        *self == season || *self == Self::All
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownVariant {
                kind: "season",
                value: s.to_string(),
            })
    }
}

/// Output of the geometric category heuristic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategoryPrediction {
    pub category: Category,
    pub confidence: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchingSuggestion {
    pub tip: String,
    pub safe: Vec<String>,
    pub complementary: Vec<String>,
    pub analogous: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrightnessAnalysis {
    pub brightness: f64,
    pub is_light: bool,
    pub is_dark: bool,
}

impl BrightnessAnalysis {
    /// Derives the light/dark flags from the canonical thresholds.
    #[must_use]
    pub fn from_brightness(brightness: f64) -> Self {
        Self {
            brightness,
            is_light: brightness > LIGHT_THRESHOLD,
            is_dark: brightness < DARK_THRESHOLD,
        }
    }
}

/// Structured description of one photographed garment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GarmentDescriptor {
    pub color: String,
    pub color_hex: String,
    pub category: Category,
    pub confidence: f32,
    pub suggested_season: Season,
    pub occasions: Vec<String>,
    pub matching: MatchingSuggestion,
    pub analysis: BrightnessAnalysis,
}

impl GarmentDescriptor {
    /// Name suggestion for a new catalog entry, e.g. `"navy pants"`.
    #[must_use]
    pub fn suggested_name(&self) -> String {
        format!("{} {}", self.color, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_flags_are_exclusive() {
        for step in 0..=2550 {
            let analysis = BrightnessAnalysis::from_brightness(f64::from(step) / 10.0);
            assert!(!(analysis.is_light && analysis.is_dark));
        }
        let mid = BrightnessAnalysis::from_brightness(128.0);
        assert!(!mid.is_light && !mid.is_dark);
        assert!(BrightnessAnalysis::from_brightness(150.5).is_light);
        assert!(!BrightnessAnalysis::from_brightness(150.0).is_light);
        assert!(BrightnessAnalysis::from_brightness(99.9).is_dark);
    }

    #[test]
    fn seasons_by_month() {
        assert_eq!(Season::for_month(1), Season::Winter);
        assert_eq!(Season::for_month(3), Season::Spring);
        assert_eq!(Season::for_month(8), Season::Summer);
        assert_eq!(Season::for_month(11), Season::Autumn);
        assert_eq!(Season::for_month(12), Season::Winter);
        assert!(Season::All.suits(Season::Summer));
        assert!(!Season::Winter.suits(Season::Summer));
    }

    #[test]
    fn parses_enum_names() {
        assert_eq!("Autumn".parse::<Season>(), Ok(Season::Autumn));
        assert_eq!(" shoes ".parse::<Category>(), Ok(Category::Shoes));
        assert!("dress".parse::<Category>().is_err());
    }

    #[test]
    fn descriptor_uses_camel_case_keys() -> Result<(), serde_json::Error> {
        let descriptor = GarmentDescriptor {
            color: "gray".to_string(),
            color_hex: "#808080".to_string(),
            category: Category::Top,
            confidence: 0.6,
            suggested_season: Season::All,
            occasions: vec!["formal".to_string()],
            matching: MatchingSuggestion {
                tip: "versatile".to_string(),
                safe: vec![],
                complementary: vec![],
                analogous: vec![],
            },
            analysis: BrightnessAnalysis::from_brightness(128.0),
        };
        let json = serde_json::to_value(&descriptor)?;
        assert_eq!(json["colorHex"], "#808080");
        assert_eq!(json["suggestedSeason"], "all");
        assert_eq!(json["analysis"]["isLight"], false);
        assert_eq!(descriptor.suggested_name(), "gray top");
        Ok(())
    }
}
