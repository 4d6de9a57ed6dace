//! Fromager - deterministic cheese recommendation service
//!
//! This library provides the preference-matching engine behind the
//! Fromager catalog. A recommendation run is a fixed pipeline:
//! hard filters, weighted scoring, stable ranking, then top-K
//! selection with a generated explanation per pick.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Recommender, RecommendationResult, ToggleState};
pub use models::{
    Cheese, CheeseType, MilkSource, Origin, PreferenceProfile, Recommendation, ScoringWeights,
};
