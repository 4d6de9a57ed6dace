// Core algorithm exports
pub mod explanation;
pub mod filters;
pub mod pairing;
pub mod preferences;
pub mod ranking;
pub mod recommender;
pub mod scoring;

pub use explanation::{explain, category_adjective, milk_adjective};
pub use filters::{filter_candidates, is_candidate, contains_note};
pub use pairing::{pairings_for, Pairing, PairingKind};
pub use preferences::ToggleState;
pub use ranking::{rank, ScoredCandidate};
pub use recommender::{Recommender, RecommendationResult};
pub use scoring::{calculate_score, normalize_score, ScoreBreakdown};
