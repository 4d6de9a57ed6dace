use crate::models::{Cheese, PreferenceProfile, Recommendation, ScoringWeights};
use crate::core::{
    explanation::explain,
    filters::filter_candidates,
    ranking::{rank, ScoredCandidate},
    scoring::{calculate_score, normalize_score},
};

/// Result of one recommendation run
#[derive(Debug)]
pub struct RecommendationResult {
    pub recommendations: Vec<Recommendation>,
    /// Size of the catalog that was evaluated
    pub total_candidates: usize,
    /// Cheeses left after the hard filters
    pub eligible_candidates: usize,
}

/// Main recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Hard exclusion filter
/// 2. Weighted scoring
/// 3. Stable ranking
/// 4. Top-K selection and explanation
///
/// Holds only its weight table, so one instance can serve concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
}

impl Recommender {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank the whole catalog against a preference profile
    ///
    /// Returns every eligible cheese, best first. Callers truncate to
    /// however many they display.
    pub fn get_recommendations(
        &self,
        catalog: &[Cheese],
        preferences: &PreferenceProfile,
        excluded_ids: &[String],
    ) -> Vec<Recommendation> {
        self.recommend(catalog, preferences, excluded_ids, None).recommendations
    }

    /// Run the pipeline, explaining only the top `limit` results
    ///
    /// # Arguments
    /// * `catalog` - Full catalog snapshot
    /// * `preferences` - The caller's preference profile
    /// * `excluded_ids` - Ids to drop before scoring (already shown or rejected)
    /// * `limit` - Maximum number of recommendations, `None` for all
    pub fn recommend(
        &self,
        catalog: &[Cheese],
        preferences: &PreferenceProfile,
        excluded_ids: &[String],
        limit: Option<usize>,
    ) -> RecommendationResult {
        let total_candidates = catalog.len();

        // Stage 1: Hard filters
        let candidates = filter_candidates(catalog, preferences, excluded_ids);
        let eligible_candidates = candidates.len();

        tracing::debug!(
            "{} of {} cheeses passed the hard filters ({} excluded ids)",
            eligible_candidates,
            total_candidates,
            excluded_ids.len()
        );

        // Stage 2: Scoring
        let scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|cheese| {
                let breakdown = calculate_score(cheese, preferences, &self.weights);
                let raw_score = breakdown.raw();
                ScoredCandidate {
                    cheese,
                    breakdown,
                    raw_score,
                    score: normalize_score(raw_score, &self.weights),
                }
            })
            .collect();

        // Stage 3: Ranking
        let mut ranked = rank(scored);

        // Stage 4: Top-K and explanation
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }

        let recommendations = ranked
            .into_iter()
            .map(|candidate| {
                tracing::trace!(
                    "Ranked {}: raw={} score={} notes={:?}",
                    candidate.cheese.id,
                    candidate.raw_score,
                    candidate.score,
                    candidate.breakdown.matched_notes
                );
                Recommendation {
                    item_id: candidate.cheese.id.clone(),
                    explanation: explain(candidate.cheese, preferences),
                    score: candidate.score,
                }
            })
            .collect();

        RecommendationResult {
            recommendations,
            total_candidates,
            eligible_candidates,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheeseType, MilkSource, Origin};

    #[allow(clippy::too_many_arguments)]
    fn create_cheese(
        id: &str,
        category: CheeseType,
        milk: MilkSource,
        origin: Origin,
        intensity: i32,
        aging_months: u32,
        flavor: &str,
        price: f64,
    ) -> Cheese {
        Cheese {
            id: id.to_string(),
            name: format!("Cheese {}", id),
            category,
            milk_source: milk,
            origin,
            region: "Region".to_string(),
            aging_months,
            intensity,
            texture: 3,
            saltiness: 3,
            pungency: 3,
            flavor_notes: flavor.to_string(),
            pairing_suggestion: "Bread".to_string(),
            price_per_unit: price,
        }
    }

    fn create_preferences() -> PreferenceProfile {
        PreferenceProfile {
            liked_categories: vec![CheeseType::Hard],
            preferred_milk_sources: vec![MilkSource::Cow],
            max_price: Some(500.0),
            favorite_notes: vec!["nutty".to_string()],
            preferred_intensity: Some(4),
            ..Default::default()
        }
    }

    #[test]
    fn test_recommend_basic() {
        let recommender = Recommender::with_default_weights();
        let catalog = vec![
            create_cheese("a", CheeseType::Hard, MilkSource::Cow, Origin::Domestic, 4, 12, "nutty, caramel", 80.0),
            create_cheese("b", CheeseType::Fresh, MilkSource::Goat, Origin::Imported, 1, 0, "milky, light", 40.0),
        ];

        let result = recommender.recommend(&catalog, &create_preferences(), &[], None);

        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.eligible_candidates, 2);
        assert_eq!(result.recommendations[0].item_id, "a");
        assert_eq!(result.recommendations[0].score, 83);
        assert_eq!(result.recommendations[1].item_id, "b");
        assert_eq!(result.recommendations[1].score, 10);
    }

    #[test]
    fn test_respects_limit() {
        let recommender = Recommender::with_default_weights();
        let catalog: Vec<Cheese> = (0..10)
            .map(|i| create_cheese(&i.to_string(), CheeseType::Hard, MilkSource::Cow, Origin::Imported, 1 + i % 5, 6, "nutty", 50.0))
            .collect();

        let result = recommender.recommend(&catalog, &create_preferences(), &[], Some(3));

        assert_eq!(result.recommendations.len(), 3);
        assert_eq!(result.eligible_candidates, 10);
    }

    #[test]
    fn test_exclusions_applied() {
        let recommender = Recommender::with_default_weights();
        let catalog = vec![
            create_cheese("a", CheeseType::Hard, MilkSource::Cow, Origin::Domestic, 4, 12, "nutty", 80.0),
            create_cheese("b", CheeseType::Hard, MilkSource::Cow, Origin::Domestic, 4, 12, "nutty", 80.0),
        ];

        let recs = recommender.get_recommendations(&catalog, &create_preferences(), &["a".to_string()]);

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].item_id, "b");
    }

    #[test]
    fn test_empty_catalog() {
        let recommender = Recommender::default();
        let result = recommender.recommend(&[], &create_preferences(), &[], Some(3));

        assert!(result.recommendations.is_empty());
        assert_eq!(result.total_candidates, 0);
    }

    #[test]
    fn test_everything_filtered_is_not_an_error() {
        let recommender = Recommender::default();
        let catalog = vec![
            create_cheese("a", CheeseType::Hard, MilkSource::Cow, Origin::Domestic, 4, 12, "nutty", 800.0),
        ];

        let recs = recommender.get_recommendations(&catalog, &create_preferences(), &[]);

        assert!(recs.is_empty());
    }
}
