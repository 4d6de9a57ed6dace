use crate::core::filters::normalize_note;
use crate::models::{CheeseType, MilkSource, PreferenceProfile};

/// Where a value sits in a liked/disliked pair of lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Neutral,
    Liked,
    Disliked,
}

impl ToggleState {
    /// Neutral -> Liked -> Disliked -> Neutral
    pub fn next(self) -> Self {
        match self {
            ToggleState::Neutral => ToggleState::Liked,
            ToggleState::Liked => ToggleState::Disliked,
            ToggleState::Disliked => ToggleState::Neutral,
        }
    }

    /// Current state of `item`; liked is reported first when a caller put
    /// the value in both lists
    pub fn of<T: PartialEq>(item: &T, liked: &[T], disliked: &[T]) -> Self {
        if liked.contains(item) {
            ToggleState::Liked
        } else if disliked.contains(item) {
            ToggleState::Disliked
        } else {
            ToggleState::Neutral
        }
    }
}

/// Advance `item` one step and return the new (liked, disliked) lists
fn cycle<T: PartialEq + Clone>(item: &T, liked: &[T], disliked: &[T]) -> (Vec<T>, Vec<T>) {
    let mut new_liked: Vec<T> = liked.iter().filter(|v| *v != item).cloned().collect();
    let mut new_disliked: Vec<T> = disliked.iter().filter(|v| *v != item).cloned().collect();

    match ToggleState::of(item, liked, disliked).next() {
        ToggleState::Liked => new_liked.push(item.clone()),
        ToggleState::Disliked => new_disliked.push(item.clone()),
        ToggleState::Neutral => {}
    }

    (new_liked, new_disliked)
}

impl PreferenceProfile {
    /// Cycle a category between liked, disliked and neutral
    pub fn toggle_category(&self, category: CheeseType) -> Self {
        let (liked, disliked) = cycle(&category, &self.liked_categories, &self.disliked_categories);
        Self {
            liked_categories: liked,
            disliked_categories: disliked,
            ..self.clone()
        }
    }

    /// Cycle a milk source between preferred, disliked and neutral
    pub fn toggle_milk_source(&self, milk: MilkSource) -> Self {
        let (liked, disliked) = cycle(&milk, &self.preferred_milk_sources, &self.disliked_milk_sources);
        Self {
            preferred_milk_sources: liked,
            disliked_milk_sources: disliked,
            ..self.clone()
        }
    }

    /// Cycle a flavor note between favorite, disliked and neutral
    ///
    /// Notes are compared trimmed and lowercased. A blank note leaves the
    /// profile unchanged.
    pub fn toggle_note(&self, note: &str) -> Self {
        let Some(note) = normalize_note(note) else {
            return self.clone();
        };
        let favorites = normalized_notes(&self.favorite_notes);
        let dislikes = normalized_notes(&self.disliked_notes);
        let (liked, disliked) = cycle(&note, &favorites, &dislikes);
        Self {
            favorite_notes: liked,
            disliked_notes: disliked,
            ..self.clone()
        }
    }
}

fn normalized_notes(notes: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(notes.len());
    for note in notes.iter().filter_map(|n| normalize_note(n)) {
        if !out.contains(&note) {
            out.push(note);
        }
    }
    out
}
