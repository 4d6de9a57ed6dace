use std::collections::HashSet;
use crate::models::{Cheese, PreferenceProfile};

/// Lowercase and trim a preference tag, dropping blank ones
#[inline]
pub fn normalize_note(note: &str) -> Option<String> {
    let trimmed = note.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive substring test of a tag against free text
///
/// Blank tags never match.
#[inline]
pub fn contains_note(text: &str, note: &str) -> bool {
    match normalize_note(note) {
        Some(needle) => text.to_lowercase().contains(&needle),
        None => false,
    }
}

/// Check whether a cheese survives the hard exclusion rules
///
/// This is stage 1 of the recommendation pipeline. Any single rule
/// rejects the cheese regardless of how well it would score.
#[inline]
pub fn is_candidate(
    cheese: &Cheese,
    preferences: &PreferenceProfile,
    excluded_ids: &HashSet<&str>,
) -> bool {
    // Already shown or explicitly rejected
    if excluded_ids.contains(cheese.id.as_str()) {
        return false;
    }

    if preferences.disliked_categories.contains(&cheese.category) {
        return false;
    }

    if preferences.disliked_milk_sources.contains(&cheese.milk_source) {
        return false;
    }

    let flavor = cheese.flavor_notes.to_lowercase();
    let has_disliked_note = preferences
        .disliked_notes
        .iter()
        .filter_map(|note| normalize_note(note))
        .any(|note| flavor.contains(&note));
    if has_disliked_note {
        return false;
    }

    if let Some(max_price) = preferences.max_price {
        if cheese.price_per_unit > max_price {
            return false;
        }
    }

    if preferences.min_aging > 0 && cheese.aging_months < preferences.min_aging {
        return false;
    }

    true
}

/// Reduce the catalog to eligible cheeses, preserving catalog order
pub fn filter_candidates<'a>(
    catalog: &'a [Cheese],
    preferences: &PreferenceProfile,
    excluded_ids: &[String],
) -> Vec<&'a Cheese> {
    let excluded: HashSet<&str> = excluded_ids.iter().map(String::as_str).collect();

    catalog
        .iter()
        .filter(|cheese| is_candidate(cheese, preferences, &excluded))
        .collect()
}
