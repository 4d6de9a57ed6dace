use std::cmp::Ordering;
use crate::core::scoring::ScoreBreakdown;
use crate::models::Cheese;

/// A candidate with its computed score
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub cheese: &'a Cheese,
    pub breakdown: ScoreBreakdown,
    pub raw_score: f64,
    /// Normalized 0-100 score
    pub score: u8,
}

/// Sort candidates by score, descending
///
/// The sort is stable: candidates with equal raw scores keep their
/// filter-stage order. Ordering on the raw score keeps the public score
/// non-increasing while still separating candidates that only tie after
/// clamping.
pub fn rank<'a>(mut scored: Vec<ScoredCandidate<'a>>) -> Vec<ScoredCandidate<'a>> {
    scored.sort_by(|a, b| {
        b.raw_score
            .partial_cmp(&a.raw_score)
            .unwrap_or(Ordering::Equal)
    });
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheeseType, MilkSource, Origin};

    fn create_cheese(id: &str) -> Cheese {
        Cheese {
            id: id.to_string(),
            name: id.to_string(),
            category: CheeseType::Fresh,
            milk_source: MilkSource::Goat,
            origin: Origin::Imported,
            region: String::new(),
            aging_months: 0,
            intensity: 1,
            texture: 1,
            saltiness: 1,
            pungency: 1,
            flavor_notes: String::new(),
            pairing_suggestion: String::new(),
            price_per_unit: 10.0,
        }
    }

    fn scored(cheese: &Cheese, raw: f64) -> ScoredCandidate<'_> {
        ScoredCandidate {
            cheese,
            breakdown: ScoreBreakdown::default(),
            raw_score: raw,
            score: (raw / 2.0).round().min(100.0) as u8,
        }
    }

    #[test]
    fn test_rank_descending() {
        let (a, b, c) = (create_cheese("a"), create_cheese("b"), create_cheese("c"));
        let ranked = rank(vec![scored(&a, 10.0), scored(&b, 90.0), scored(&c, 50.0)]);

        let ids: Vec<&str> = ranked.iter().map(|s| s.cheese.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let (a, b, c, d) = (create_cheese("a"), create_cheese("b"), create_cheese("c"), create_cheese("d"));
        let ranked = rank(vec![
            scored(&a, 40.0),
            scored(&b, 80.0),
            scored(&c, 40.0),
            scored(&d, 80.0),
        ]);

        let ids: Vec<&str> = ranked.iter().map(|s| s.cheese.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_clamped_ties_keep_raw_order() {
        let (a, b) = (create_cheese("a"), create_cheese("b"));
        let ranked = rank(vec![scored(&a, 210.0), scored(&b, 260.0)]);

        assert_eq!(ranked[0].cheese.id, "b");
        assert_eq!(ranked[0].score, ranked[1].score);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
