use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Cheese, CheeseType, MilkSource, Origin, PreferenceProfile};

/// Request to rank the catalog against a preference profile
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[serde(default)]
    pub preferences: PreferenceProfile,
    #[serde(default, rename = "excludedIds")]
    pub excluded_ids: Vec<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request for a replacement after the caller rejected one recommendation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReplaceRequest {
    #[serde(default)]
    pub preferences: PreferenceProfile,
    #[validate(length(min = 1))]
    #[serde(rename = "rejectedId")]
    pub rejected_id: String,
    #[serde(default, rename = "excludedIds")]
    pub excluded_ids: Vec<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

impl ReplaceRequest {
    /// Exclusions for the re-run: the caller's list plus the rejected id
    pub fn exclusions(&self) -> Vec<String> {
        let mut excluded = self.excluded_ids.clone();
        if !excluded.contains(&self.rejected_id) {
            excluded.push(self.rejected_id.clone());
        }
        excluded
    }
}

/// Preference dimension a toggle applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PreferenceDimension {
    Category,
    MilkSource,
    Note,
}

/// Request to cycle one value through neutral -> liked -> disliked
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ToggleRequest {
    #[serde(default)]
    pub preferences: PreferenceProfile,
    pub dimension: PreferenceDimension,
    #[validate(length(min = 1))]
    pub value: String,
}

/// Body for creating or replacing a catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheeseRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1))]
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
    #[validate(range(min = 1, max = 5))]
    #[serde(default = "default_scale")]
    pub intensity: i32,
    #[validate(range(min = 1, max = 5))]
    #[serde(default = "default_scale")]
    pub texture: i32,
    #[validate(range(min = 1, max = 5))]
    #[serde(default = "default_scale")]
    pub saltiness: i32,
    #[validate(range(min = 1, max = 5))]
    #[serde(default = "default_scale")]
    pub pungency: i32,
    #[serde(rename = "flavorNotes", alias = "flavorProfile", default)]
    pub flavor_notes: String,
    #[serde(rename = "pairingSuggestion", alias = "bestPairing", default)]
    pub pairing_suggestion: String,
    #[validate(range(min = 0.0))]
    #[serde(rename = "pricePerUnit", alias = "pricePer100g", default)]
    pub price_per_unit: f64,
}

fn default_scale() -> i32 { 3 }

impl CheeseRequest {
    /// Build the catalog entry, using `id` for the identity
    pub fn into_cheese(self, id: String) -> Cheese {
        Cheese {
            id,
            name: self.name,
            category: self.category,
            milk_source: self.milk_source,
            origin: self.origin,
            region: self.region,
            aging_months: self.aging_months,
            intensity: self.intensity,
            texture: self.texture,
            saltiness: self.saltiness,
            pungency: self.pungency,
            flavor_notes: self.flavor_notes,
            pairing_suggestion: self.pairing_suggestion,
            price_per_unit: self.price_per_unit,
        }
    }
}

/// Query string for catalog search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_request_adds_rejected_id_once() {
        let req = ReplaceRequest {
            preferences: PreferenceProfile::default(),
            rejected_id: "b".to_string(),
            excluded_ids: vec!["a".to_string(), "b".to_string()],
            limit: None,
        };

        assert_eq!(req.exclusions(), vec!["a".to_string(), "b".to_string()]);

        let req = ReplaceRequest { excluded_ids: vec![], ..req };
        assert_eq!(req.exclusions(), vec!["b".to_string()]);
    }

    #[test]
    fn test_cheese_request_rejects_out_of_scale_values() {
        let json = r#"{"name": "Test", "category": "Hard", "milkSource": "Cow", "origin": "domestic", "intensity": 9}"#;
        let req: CheeseRequest = serde_json::from_str(json).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_recommend_request_defaults() {
        let req: RecommendRequest = serde_json::from_str("{}").unwrap();

        assert!(req.validate().is_ok());
        assert!(req.excluded_ids.is_empty());
        assert!(req.limit.is_none());
    }
}
