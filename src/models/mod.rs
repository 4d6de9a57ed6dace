// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Cheese, CheeseType, MilkSource, Origin, PreferenceProfile, Recommendation, ScoringWeights, UnknownLabel};
pub use requests::{CheeseRequest, PreferenceDimension, RecommendRequest, ReplaceRequest, SearchQuery, ToggleRequest};
pub use responses::{ErrorResponse, HealthResponse, MutationResponse, PairingsResponse, RecommendationsResponse, SeedResponse};
