//! Outfit recommendation records returned by the model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::agent::{AgentError, AgentResult};
use crate::prompts::{extract_json_object, ITEMS_PER_CATEGORY};

/// Outfit category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutfitCategory {
    Casual,
    Formal,
    Workwear,
    Accessories,
}

impl OutfitCategory {
    pub const ALL: [OutfitCategory; 4] = [
        OutfitCategory::Casual,
        OutfitCategory::Formal,
        OutfitCategory::Workwear,
        OutfitCategory::Accessories,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutfitCategory::Casual => "casual",
            OutfitCategory::Formal => "formal",
            OutfitCategory::Workwear => "workwear",
            OutfitCategory::Accessories => "accessories",
        }
    }
}

impl fmt::Display for OutfitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single recommended item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Why the item suits the body shape
    #[serde(default)]
    pub reason_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Recommendations grouped by category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub casual: Vec<OutfitItem>,
    #[serde(default)]
    pub formal: Vec<OutfitItem>,
    #[serde(default)]
    pub workwear: Vec<OutfitItem>,
    #[serde(default)]
    pub accessories: Vec<OutfitItem>,
}

impl Recommendations {
    pub fn items(&self, category: OutfitCategory) -> &[OutfitItem] {
        match category {
            OutfitCategory::Casual => &self.casual,
            OutfitCategory::Formal => &self.formal,
            OutfitCategory::Workwear => &self.workwear,
            OutfitCategory::Accessories => &self.accessories,
        }
    }

    pub fn total_items(&self) -> usize {
        OutfitCategory::ALL.iter().map(|c| self.items(*c).len()).sum()
    }

    /// Categories with fewer items than were requested
    pub fn short_categories(&self) -> Vec<OutfitCategory> {
        OutfitCategory::ALL
            .iter()
            .copied()
            .filter(|c| self.items(*c).len() < ITEMS_PER_CATEGORY)
            .collect()
    }
}

/// Parse a raw model reply into recommendations
pub fn parse_recommendations(text: &str) -> AgentResult<Recommendations> {
    let json = extract_json_object(text)
        .ok_or_else(|| AgentError::ParseError("No JSON object in response".to_string()))?;

    Ok(serde_json::from_str(json)?)
}

/// Items the user marked as favourites, keyed by `"{name}-{category}"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedItems {
    keys: BTreeSet<String>,
}

impl SavedItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(item: &OutfitItem, category: OutfitCategory) -> String {
        format!("{}-{}", item.name, category.name())
    }

    /// Save the item if absent, unsave it otherwise. Returns whether it is now saved.
    pub fn toggle(&mut self, item: &OutfitItem, category: OutfitCategory) -> bool {
        let key = Self::key(item, category);
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn contains(&self, item: &OutfitItem, category: OutfitCategory) -> bool {
        self.keys.contains(&Self::key(item, category))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}
