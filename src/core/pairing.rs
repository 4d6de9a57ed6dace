use serde::{Deserialize, Serialize};
use crate::models::CheeseType;

/// What a pairing suggestion is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingKind {
    Wine,
    Fruit,
    Nuts,
}

/// One accompaniment suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub kind: PairingKind,
    pub suggestion: String,
}

fn wine_for(category: CheeseType) -> &'static str {
    match category {
        CheeseType::Blue => "Port or Sauternes",
        CheeseType::Hard => "Aged Cabernet",
        _ => "Light Chardonnay",
    }
}

fn fruit_for(category: CheeseType) -> &'static str {
    match category {
        CheeseType::SoftRipened => "Fresh pear or fig",
        _ => "Green apple",
    }
}

const NUTS: &str = "Roasted hazelnuts or walnuts in honey";

/// Wine, fruit and nut suggestions for a cheese category, always in that order
pub fn pairings_for(category: CheeseType) -> Vec<Pairing> {
    vec![
        Pairing { kind: PairingKind::Wine, suggestion: wine_for(category).to_string() },
        Pairing { kind: PairingKind::Fruit, suggestion: fruit_for(category).to_string() },
        Pairing { kind: PairingKind::Nuts, suggestion: NUTS.to_string() },
    ]
}
