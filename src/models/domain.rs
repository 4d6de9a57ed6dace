use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cheese category
///
/// Unknown labels deserialize to `Other` so a catalog row with a new
/// category still flows through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheeseType {
    Fresh,
    #[serde(rename = "Soft-Ripened")]
    SoftRipened,
    #[serde(rename = "Semi-Soft")]
    SemiSoft,
    Hard,
    Blue,
    #[serde(rename = "Washed-Rind")]
    WashedRind,
    #[serde(other)]
    Other,
}

impl CheeseType {
    pub const KNOWN: [CheeseType; 6] = [
        CheeseType::Fresh,
        CheeseType::SoftRipened,
        CheeseType::SemiSoft,
        CheeseType::Hard,
        CheeseType::Blue,
        CheeseType::WashedRind,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheeseType::Fresh => "Fresh",
            CheeseType::SoftRipened => "Soft-Ripened",
            CheeseType::SemiSoft => "Semi-Soft",
            CheeseType::Hard => "Hard",
            CheeseType::Blue => "Blue",
            CheeseType::WashedRind => "Washed-Rind",
            CheeseType::Other => "Other",
        }
    }

    /// Parse a stored label, mapping anything unrecognised to `Other`
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(CheeseType::Other)
    }
}

impl fmt::Display for CheeseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheeseType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheeseType::KNOWN
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLabel::new("category", s))
    }
}

/// Milk the cheese is made from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MilkSource {
    Cow,
    Goat,
    Sheep,
    Buffalo,
    Mixed,
    #[serde(other)]
    Other,
}

impl MilkSource {
    pub const KNOWN: [MilkSource; 5] = [
        MilkSource::Cow,
        MilkSource::Goat,
        MilkSource::Sheep,
        MilkSource::Buffalo,
        MilkSource::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MilkSource::Cow => "Cow",
            MilkSource::Goat => "Goat",
            MilkSource::Sheep => "Sheep",
            MilkSource::Buffalo => "Buffalo",
            MilkSource::Mixed => "Mixed",
            MilkSource::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(MilkSource::Other)
    }
}

impl fmt::Display for MilkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MilkSource {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MilkSource::KNOWN
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLabel::new("milk source", s))
    }
}

/// Where the cheese was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    #[serde(alias = "Ukrainian", alias = "Domestic")]
    Domestic,
    #[serde(alias = "Import", alias = "Imported")]
    Imported,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Domestic => "domestic",
            Origin::Imported => "imported",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "domestic" | "ukrainian" => Origin::Domestic,
            _ => Origin::Imported,
        }
    }
}

/// A label that does not name any known variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownLabel {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Catalog entry
///
/// Legacy field names (`type`, `milk`, `flavorProfile`, `bestPairing`,
/// `pricePer100g`) are accepted on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cheese {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(alias = "type")]
    pub category: CheeseType,
    #[serde(rename = "milkSource", alias = "milk")]
    pub milk_source: MilkSource,
    pub origin: Origin,
    #[serde(default)]
    pub region: String,
    #[serde(rename = "agingMonths", default)]
    pub aging_months: u32,
    #[serde(default = "default_scale")]
    pub intensity: i32,
    #[serde(default = "default_scale")]
    pub texture: i32,
    #[serde(default = "default_scale")]
    pub saltiness: i32,
    #[serde(default = "default_scale")]
    pub pungency: i32,
    #[serde(rename = "flavorNotes", alias = "flavorProfile", default)]
    pub flavor_notes: String,
    #[serde(rename = "pairingSuggestion", alias = "bestPairing", default)]
    pub pairing_suggestion: String,
    #[serde(rename = "pricePerUnit", alias = "pricePer100g", default)]
    pub price_per_unit: f64,
}

impl Cheese {
    pub fn is_domestic(&self) -> bool {
        self.origin == Origin::Domestic
    }
}

fn default_scale() -> i32 { 3 }

/// Caller preference profile
///
/// Every field may be omitted; an omitted field neutralizes the rule that
/// reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceProfile {
    #[serde(rename = "likedCategories", alias = "likedTypes")]
    pub liked_categories: Vec<CheeseType>,
    #[serde(rename = "dislikedCategories", alias = "dislikedTypes")]
    pub disliked_categories: Vec<CheeseType>,
    #[serde(rename = "preferredMilkSources", alias = "preferredMilk")]
    pub preferred_milk_sources: Vec<MilkSource>,
    #[serde(rename = "dislikedMilkSources", alias = "dislikedMilk")]
    pub disliked_milk_sources: Vec<MilkSource>,
    #[serde(rename = "maxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(rename = "minAging")]
    pub min_aging: u32,
    #[serde(rename = "favoriteNotes")]
    pub favorite_notes: Vec<String>,
    #[serde(rename = "dislikedNotes")]
    pub disliked_notes: Vec<String>,
    #[serde(rename = "preferredIntensity", skip_serializing_if = "Option::is_none")]
    pub preferred_intensity: Option<i32>,
}

/// Ranked recommendation for a single cheese
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub explanation: String,
    pub score: u8,
}

/// Scoring weights
///
/// Each field is the number of raw points a rule contributes; the raw
/// total is divided by `normalization` and scaled to 0-100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub category: f64,
    pub milk_source: f64,
    pub flavor_note: f64,
    pub intensity_step: f64,
    pub domestic: f64,
    pub normalization: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            category: 40.0,
            milk_source: 35.0,
            flavor_note: 25.0,
            intensity_step: 10.0,
            domestic: 15.0,
            normalization: 200.0,
        }
    }
}
