use crate::core::filters::normalize_note;
use crate::models::{Cheese, CheeseType, MilkSource, PreferenceProfile};

/// Descriptor used in the intro for each category
pub fn category_adjective(category: CheeseType) -> &'static str {
    match category {
        CheeseType::Fresh => "tender fresh",
        CheeseType::SoftRipened => "delicate soft-ripened",
        CheeseType::SemiSoft => "supple semi-soft",
        CheeseType::Hard => "well-aged hard",
        CheeseType::Blue => "piquant blue",
        CheeseType::WashedRind => "aromatic washed-rind",
        CheeseType::Other => "distinctive",
    }
}

/// Descriptor used in the intro for each milk source
pub fn milk_adjective(milk: MilkSource) -> &'static str {
    match milk {
        MilkSource::Cow => "cow's",
        MilkSource::Goat => "goat's",
        MilkSource::Sheep => "sheep's",
        MilkSource::Buffalo => "buffalo",
        MilkSource::Mixed => "mixed",
        MilkSource::Other => "selected",
    }
}

/// Build the justification shown next to a recommendation
///
/// Three sentences: what was picked, how it meets the caller's favorite
/// notes (matched against `flavor_notes` only), and what to pair it with.
/// Pure function of its inputs.
pub fn explain(cheese: &Cheese, preferences: &PreferenceProfile) -> String {
    let intro = format!(
        "The engine selected this {} cheese made from {} milk. ",
        category_adjective(cheese.category),
        milk_adjective(cheese.milk_source),
    );

    let flavor = cheese.flavor_notes.to_lowercase();
    let matched: Vec<String> = preferences
        .favorite_notes
        .iter()
        .filter_map(|note| normalize_note(note))
        .filter(|note| flavor.contains(note.as_str()))
        .collect();

    let middle = if matched.is_empty() {
        format!(
            "Its own profile ({}) offers something worth exploring. ",
            flavor.trim()
        )
    } else {
        format!(
            "It satisfies your craving for {} notes. ",
            matched.join(", ")
        )
    };

    let mut conclusion = format!(
        "Recommended pairing: {}.",
        cheese.pairing_suggestion.trim().to_lowercase()
    );
    if cheese.is_domestic() {
        conclusion.push_str(&format!(
            " A quality product from the {} region.",
            cheese.region.trim()
        ));
    }

    intro + &middle + &conclusion
}
