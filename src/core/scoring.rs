use crate::models::{Cheese, PreferenceProfile, ScoringWeights};
use crate::core::filters::normalize_note;

/// Largest distance on the 1-5 attribute scale that still earns points
const INTENSITY_SCALE: i32 = 5;

/// Per-rule contributions to a cheese's raw score
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub category: f64,
    pub milk_source: f64,
    pub flavor_notes: f64,
    pub intensity: f64,
    pub domestic: f64,
    /// Favorite notes found in the composite text, as the caller wrote them
    pub matched_notes: Vec<String>,
}

impl ScoreBreakdown {
    /// Unnormalized total
    pub fn raw(&self) -> f64 {
        self.category + self.milk_source + self.flavor_notes + self.intensity + self.domestic
    }
}

/// Calculate the raw weighted score for a cheese
///
/// Scoring formula:
/// raw = (
///     category      # liked category, fires at most once
///   + milk_source   # preferred milk
///   + flavor_notes  # per favorite note found in the composite text
///   + intensity     # (5 - |intensity - target|) * step, floored at 0
///   + domestic      # origin == domestic
/// )
///
/// No rule subtracts points.
pub fn calculate_score(
    cheese: &Cheese,
    preferences: &PreferenceProfile,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    if preferences.liked_categories.contains(&cheese.category) {
        breakdown.category = weights.category;
    }

    if preferences.preferred_milk_sources.contains(&cheese.milk_source) {
        breakdown.milk_source = weights.milk_source;
    }

    let composite = composite_text(cheese);
    for note in &preferences.favorite_notes {
        if let Some(needle) = normalize_note(note) {
            if composite.contains(&needle) {
                breakdown.flavor_notes += weights.flavor_note;
                breakdown.matched_notes.push(note.clone());
            }
        }
    }

    if let Some(target) = preferences.preferred_intensity {
        breakdown.intensity = intensity_score(cheese.intensity, target, weights.intensity_step);
    }

    if cheese.is_domestic() {
        breakdown.domestic = weights.domestic;
    }

    breakdown
}

/// Scale a raw score to the public 0-100 range
///
/// `round(raw * 100 / normalization)`, clamped. A non-positive
/// normalization leaves the raw score unscaled.
#[inline]
pub fn normalize_score(raw: f64, weights: &ScoringWeights) -> u8 {
    let scaled = if weights.normalization > 0.0 {
        raw * 100.0 / weights.normalization
    } else {
        raw
    };

    // NaN casts to 0
    scaled.round().clamp(0.0, 100.0) as u8
}

/// Lowercased text the favorite-note rule searches
#[inline]
fn composite_text(cheese: &Cheese) -> String {
    format!(
        "{} {} {} {} {}",
        cheese.flavor_notes,
        cheese.pairing_suggestion,
        cheese.region,
        cheese.category.as_str(),
        cheese.milk_source.as_str(),
    )
    .to_lowercase()
}

/// Closeness on the intensity scale
#[inline]
fn intensity_score(intensity: i32, target: i32, step: f64) -> f64 {
    let distance = intensity.saturating_sub(target).saturating_abs();
    let factor = INTENSITY_SCALE.saturating_sub(distance).max(0);
    factor as f64 * step
}
