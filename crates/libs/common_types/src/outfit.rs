use crate::{Category, Season};
use serde::{Deserialize, Serialize};

/// Placeholder values the catalog stores for garments without a color.
const UNSET_COLORS: [&str; 2] = ["unset", "未设置"];

/// Colors of the garments currently placed in each outfit slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutfitCandidate {
    pub top: Option<String>,
    pub pants: Option<String>,
    pub shoes: Option<String>,
    pub accessory: Option<String>,
}

impl OutfitCandidate {
    pub fn set(&mut self, slot: Category, color: Option<String>) {
        match slot {
            Category::Top => self.top = color,
            Category::Pants => self.pants = color,
            Category::Shoes => self.shoes = color,
            Category::Accessory => self.accessory = color,
        }
    }

    #[must_use]
    pub fn get(&self, slot: Category) -> Option<&str> {
        match slot {
            Category::Top => self.top.as_deref(),
            Category::Pants => self.pants.as_deref(),
            Category::Shoes => self.shoes.as_deref(),
            Category::Accessory => self.accessory.as_deref(),
        }
    }

    /// Populated colors in slot order, skipping empty and placeholder values.
    #[must_use]
    pub fn colors(&self) -> Vec<&str> {
        Category::ALL
            .iter()
            .filter_map(|slot| self.get(*slot))
            .map(str::trim)
            .filter(|color| !color.is_empty() && !UNSET_COLORS.contains(color))
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColorConflictReport {
    pub has_conflict: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ColorConflictReport {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            has_conflict: false,
            warning: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutfitCheck {
    pub ok: bool,
    pub warnings: Vec<String>,
}

/// The part of a stored garment record that outfit generation reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogGarment {
    pub id: String,
    pub category: Category,
    pub season: Season,
    #[serde(default)]
    pub color: Option<String>,
}

/// Garment ids chosen for each slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutfitSelection {
    pub top: Option<String>,
    pub pants: Option<String>,
    pub shoes: Option<String>,
    pub accessory: Option<String>,
}

impl OutfitSelection {
    pub fn set(&mut self, slot: Category, id: Option<String>) {
        match slot {
            Category::Top => self.top = id,
            Category::Pants => self.pants = id,
            Category::Shoes => self.shoes = id,
            Category::Accessory => self.accessory = id,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.top.is_none() && self.pants.is_none() && self.shoes.is_none() && self.accessory.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_skip_placeholders() {
        let candidate = OutfitCandidate {
            top: Some("red".to_string()),
            pants: Some("未设置".to_string()),
            shoes: Some("  ".to_string()),
            accessory: Some("navy".to_string()),
        };
        assert_eq!(candidate.colors(), vec!["red", "navy"]);
    }

    #[test]
    fn set_and_get_slots() {
        let mut candidate = OutfitCandidate::default();
        candidate.set(Category::Shoes, Some("black".to_string()));
        assert_eq!(candidate.get(Category::Shoes), Some("black"));
        assert_eq!(candidate.get(Category::Top), None);
    }
}
