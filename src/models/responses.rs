use serde::{Deserialize, Serialize};
use crate::core::{Pairing, RecommendationResult};
use crate::models::domain::Recommendation;

/// Response for the recommendation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "eligibleCandidates")]
    pub eligible_candidates: usize,
}

impl From<RecommendationResult> for RecommendationsResponse {
    fn from(result: RecommendationResult) -> Self {
        Self {
            recommendations: result.recommendations,
            total_candidates: result.total_candidates,
            eligible_candidates: result.eligible_candidates,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    #[serde(rename = "cheeseCount")]
    pub cheese_count: u64,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Accompaniments for one catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingsResponse {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub name: String,
    pub pairings: Vec<Pairing>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

/// Result of a catalog write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    pub id: String,
}

/// Result of a reseed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    pub success: bool,
    pub seeded: u64,
}
