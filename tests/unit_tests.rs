// Unit tests for Fromager

use fromager::core::{
    explanation::{category_adjective, explain, milk_adjective},
    filters::{contains_note, filter_candidates},
    ranking::{rank, ScoredCandidate},
    scoring::{calculate_score, normalize_score, ScoreBreakdown},
    ToggleState,
};
use fromager::models::{Cheese, CheeseType, MilkSource, Origin, PreferenceProfile, ScoringWeights};

fn create_cheese(id: &str, category: CheeseType, milk_source: MilkSource) -> Cheese {
    Cheese {
        id: id.to_string(),
        name: format!("Cheese {}", id),
        category,
        milk_source,
        origin: Origin::Imported,
        region: "Alps".to_string(),
        aging_months: 6,
        intensity: 3,
        texture: 3,
        saltiness: 3,
        pungency: 3,
        flavor_notes: "Buttery, mild".to_string(),
        pairing_suggestion: "Pear slices".to_string(),
        price_per_unit: 50.0,
    }
}

#[test]
fn test_contains_note_is_case_insensitive() {
    assert!(contains_note("Nutty, Caramel", "nutty"));
    assert!(contains_note("nutty, caramel", "  CARAMEL "));
    assert!(!contains_note("nutty, caramel", "smoky"));
}

#[test]
fn test_blank_note_never_matches() {
    assert!(!contains_note("anything at all", ""));
    assert!(!contains_note("anything at all", "   "));
}

#[test]
fn test_filter_disliked_category_and_milk() {
    let catalog = vec![
        create_cheese("blue", CheeseType::Blue, MilkSource::Cow),
        create_cheese("goat", CheeseType::Fresh, MilkSource::Goat),
        create_cheese("keep", CheeseType::Hard, MilkSource::Sheep),
    ];
    let preferences = PreferenceProfile {
        disliked_categories: vec![CheeseType::Blue],
        disliked_milk_sources: vec![MilkSource::Goat],
        ..Default::default()
    };

    let eligible = filter_candidates(&catalog, &preferences, &[]);
    let ids: Vec<&str> = eligible.iter().map(|c| c.id.as_str()).collect();

    assert_eq!(ids, vec!["keep"]);
}

#[test]
fn test_filter_disliked_note_substring() {
    let mut smoky = create_cheese("smoky", CheeseType::Hard, MilkSource::Cow);
    smoky.flavor_notes = "Deeply SMOKED, woody".to_string();
    let catalog = vec![smoky, create_cheese("plain", CheeseType::Hard, MilkSource::Cow)];

    let preferences = PreferenceProfile {
        disliked_notes: vec!["smoke".to_string()],
        ..Default::default()
    };

    let eligible = filter_candidates(&catalog, &preferences, &[]);
    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].id, "plain");
}

#[test]
fn test_filter_price_boundary_is_inclusive() {
    let mut at_limit = create_cheese("at", CheeseType::Hard, MilkSource::Cow);
    at_limit.price_per_unit = 100.0;
    let mut over_limit = create_cheese("over", CheeseType::Hard, MilkSource::Cow);
    over_limit.price_per_unit = 100.01;

    let catalog = vec![at_limit, over_limit];
    let preferences = PreferenceProfile {
        max_price: Some(100.0),
        ..Default::default()
    };

    let eligible = filter_candidates(&catalog, &preferences, &[]);
    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].id, "at");
}

#[test]
fn test_filter_min_aging_zero_disables_rule() {
    let mut young = create_cheese("young", CheeseType::Fresh, MilkSource::Cow);
    young.aging_months = 0;
    let catalog = vec![young];

    let no_floor = PreferenceProfile::default();
    assert_eq!(filter_candidates(&catalog, &no_floor, &[]).len(), 1);

    let floor = PreferenceProfile {
        min_aging: 1,
        ..Default::default()
    };
    assert!(filter_candidates(&catalog, &floor, &[]).is_empty());
}

#[test]
fn test_filter_preserves_catalog_order() {
    let catalog: Vec<Cheese> = (0..10)
        .map(|i| create_cheese(&i.to_string(), CheeseType::Hard, MilkSource::Cow))
        .collect();
    let excluded = vec!["3".to_string(), "7".to_string()];

    let eligible = filter_candidates(&catalog, &PreferenceProfile::default(), &excluded);
    let ids: Vec<&str> = eligible.iter().map(|c| c.id.as_str()).collect();

    assert_eq!(ids, vec!["0", "1", "2", "4", "5", "6", "8", "9"]);
}

#[test]
fn test_score_breakdown_components() {
    let mut cheese = create_cheese("a", CheeseType::Hard, MilkSource::Cow);
    cheese.origin = Origin::Domestic;
    cheese.intensity = 4;
    cheese.flavor_notes = "nutty, caramel".to_string();

    let preferences = PreferenceProfile {
        liked_categories: vec![CheeseType::Hard],
        preferred_milk_sources: vec![MilkSource::Cow],
        favorite_notes: vec!["nutty".to_string(), "caramel".to_string()],
        preferred_intensity: Some(2),
        ..Default::default()
    };

    let breakdown = calculate_score(&cheese, &preferences, &ScoringWeights::default());

    assert_eq!(breakdown.category, 40.0);
    assert_eq!(breakdown.milk_source, 35.0);
    assert_eq!(breakdown.flavor_notes, 50.0);
    assert_eq!(breakdown.intensity, 30.0);
    assert_eq!(breakdown.domestic, 15.0);
    assert_eq!(breakdown.raw(), 170.0);
}

#[test]
fn test_favorite_note_matches_composite_text() {
    // "goat" only appears through the milk source, "alps" through the region
    let cheese = create_cheese("c", CheeseType::Fresh, MilkSource::Goat);
    let preferences = PreferenceProfile {
        favorite_notes: vec!["goat".to_string(), "alps".to_string(), "pear".to_string()],
        ..Default::default()
    };

    let breakdown = calculate_score(&cheese, &preferences, &ScoringWeights::default());

    assert_eq!(breakdown.flavor_notes, 75.0);
    assert_eq!(breakdown.matched_notes.len(), 3);
}

#[test]
fn test_intensity_bonus_never_negative() {
    let mut cheese = create_cheese("x", CheeseType::Hard, MilkSource::Cow);
    cheese.intensity = 42;

    let preferences = PreferenceProfile {
        preferred_intensity: Some(1),
        ..Default::default()
    };

    let breakdown = calculate_score(&cheese, &preferences, &ScoringWeights::default());
    assert_eq!(breakdown.intensity, 0.0);
}

#[test]
fn test_normalize_score_bounds() {
    let weights = ScoringWeights::default();

    assert_eq!(normalize_score(0.0, &weights), 0);
    assert_eq!(normalize_score(165.0, &weights), 83);
    assert_eq!(normalize_score(200.0, &weights), 100);
    assert_eq!(normalize_score(10_000.0, &weights), 100);
    assert_eq!(normalize_score(-50.0, &weights), 0);
    assert_eq!(normalize_score(f64::NAN, &weights), 0);
}

#[test]
fn test_rank_descending_and_stable() {
    let catalog: Vec<Cheese> = ["first", "second", "third", "fourth"]
        .iter()
        .map(|id| create_cheese(id, CheeseType::Hard, MilkSource::Cow))
        .collect();
    let raw = [10.0, 50.0, 10.0, 50.0];

    let scored: Vec<ScoredCandidate> = catalog
        .iter()
        .zip(raw)
        .map(|(cheese, raw_score)| ScoredCandidate {
            cheese,
            breakdown: ScoreBreakdown::default(),
            raw_score,
            score: normalize_score(raw_score, &ScoringWeights::default()),
        })
        .collect();

    let ranked = rank(scored);
    let ids: Vec<&str> = ranked.iter().map(|s| s.cheese.id.as_str()).collect();

    assert_eq!(ids, vec!["second", "fourth", "first", "third"]);
}

#[test]
fn test_adjective_tables_have_fallbacks() {
    assert_eq!(category_adjective(CheeseType::Other), "distinctive");
    assert_eq!(milk_adjective(MilkSource::Other), "selected");

    for category in CheeseType::KNOWN {
        assert!(!category_adjective(category).is_empty());
    }
}

#[test]
fn test_explanation_with_matched_notes() {
    let mut cheese = create_cheese("a", CheeseType::Hard, MilkSource::Cow);
    cheese.origin = Origin::Domestic;
    cheese.region = "Carpathian".to_string();
    cheese.flavor_notes = "Nutty, caramel".to_string();
    cheese.pairing_suggestion = "Dark Ale".to_string();

    let preferences = PreferenceProfile {
        favorite_notes: vec!["nutty".to_string()],
        ..Default::default()
    };

    let text = explain(&cheese, &preferences);

    assert_eq!(
        text,
        "The engine selected this well-aged hard cheese made from cow's milk. \
         It satisfies your craving for nutty notes. \
         Recommended pairing: dark ale. \
         A quality product from the Carpathian region."
    );
}

#[test]
fn test_explanation_without_matched_notes() {
    let cheese = create_cheese("b", CheeseType::Fresh, MilkSource::Goat);
    let text = explain(&cheese, &PreferenceProfile::default());

    assert!(text.contains("tender fresh"));
    assert!(text.contains("Its own profile (buttery, mild) offers something worth exploring."));
    assert!(text.ends_with("Recommended pairing: pear slices."));
    assert!(!text.contains("region"));
}

#[test]
fn test_unknown_labels_deserialize_to_other() {
    let json = r#"{
        "id": "odd",
        "category": "Processed",
        "milkSource": "Camel",
        "origin": "imported"
    }"#;

    let cheese: Cheese = serde_json::from_str(json).unwrap();
    assert_eq!(cheese.category, CheeseType::Other);
    assert_eq!(cheese.milk_source, MilkSource::Other);

    let text = explain(&cheese, &PreferenceProfile::default());
    assert!(text.starts_with("The engine selected this distinctive cheese made from selected milk."));
}

#[test]
fn test_toggle_cycle() {
    let profile = PreferenceProfile::default();

    let liked = profile.toggle_category(CheeseType::Blue);
    assert_eq!(liked.liked_categories, vec![CheeseType::Blue]);
    assert!(liked.disliked_categories.is_empty());

    let disliked = liked.toggle_category(CheeseType::Blue);
    assert!(disliked.liked_categories.is_empty());
    assert_eq!(disliked.disliked_categories, vec![CheeseType::Blue]);

    let neutral = disliked.toggle_category(CheeseType::Blue);
    assert_eq!(neutral, profile);

    // Original is untouched
    assert!(profile.liked_categories.is_empty());
}

#[test]
fn test_toggle_state_sequence() {
    assert_eq!(ToggleState::Neutral.next(), ToggleState::Liked);
    assert_eq!(ToggleState::Liked.next(), ToggleState::Disliked);
    assert_eq!(ToggleState::Disliked.next(), ToggleState::Neutral);
}
