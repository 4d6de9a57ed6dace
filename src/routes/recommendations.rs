use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    CheeseType, MilkSource, PreferenceDimension, PreferenceProfile, RecommendRequest,
    RecommendationsResponse, ReplaceRequest, ToggleRequest, ErrorResponse, UnknownLabel,
};
use crate::routes::{store_error_response, validation_error_response, AppState};

/// Configure recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/recommendations", web::post().to(recommend))
        .route("/recommendations/replace", web::post().to(replace))
        .route("/preferences/toggle", web::post().to(toggle_preference));
}

/// Rank the current catalog snapshot and build the response
async fn run_pipeline(
    state: &AppState,
    preferences: &PreferenceProfile,
    excluded_ids: &[String],
    limit: Option<u16>,
) -> HttpResponse {
    let start = std::time::Instant::now();

    let catalog = match state.cache.get_or_load(state.catalog.as_ref()).await {
        Ok(catalog) => catalog,
        Err(e) => return store_error_response("Failed to load catalog", &e),
    };

    let limit = state.resolve_limit(limit);
    let result = state
        .recommender
        .recommend(&catalog, preferences, excluded_ids, Some(limit));

    tracing::info!(
        "Recommended {} of {} eligible cheeses (catalog: {}) in {:?}",
        result.recommendations.len(),
        result.eligible_candidates,
        result.total_candidates,
        start.elapsed()
    );

    HttpResponse::Ok().json(RecommendationsResponse::from(result))
}

/// POST /api/v1/recommendations
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(&errors);
    }

    run_pipeline(&state, &req.preferences, &req.excluded_ids, req.limit).await
}

/// POST /api/v1/recommendations/replace
///
/// Re-runs the pipeline with the rejected id added to the exclusions.
async fn replace(
    state: web::Data<AppState>,
    req: web::Json<ReplaceRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(&errors);
    }

    tracing::debug!("Replacing rejected cheese {}", req.rejected_id);
    let excluded = req.exclusions();
    run_pipeline(&state, &req.preferences, &excluded, req.limit).await
}

/// POST /api/v1/preferences/toggle
///
/// Returns the profile with `value` advanced one step in its cycle.
async fn toggle_preference(req: web::Json<ToggleRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(&errors);
    }

    let updated = match req.dimension {
        PreferenceDimension::Category => match req.value.parse::<CheeseType>() {
            Ok(category) => req.preferences.toggle_category(category),
            Err(e) => return unknown_label_response(&e),
        },
        PreferenceDimension::MilkSource => match req.value.parse::<MilkSource>() {
            Ok(milk) => req.preferences.toggle_milk_source(milk),
            Err(e) => return unknown_label_response(&e),
        },
        PreferenceDimension::Note => req.preferences.toggle_note(&req.value),
    };

    HttpResponse::Ok().json(updated)
}

fn unknown_label_response(err: &UnknownLabel) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Unknown preference value".to_string(),
        message: err.to_string(),
        status_code: 400,
    })
}
