// Route exports
pub mod cheeses;
pub mod recommendations;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use std::path::PathBuf;
use std::sync::Arc;
use crate::config::RecommendationSettings;
use crate::core::Recommender;
use crate::models::ErrorResponse;
use crate::services::{CatalogCache, CatalogStore, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogStore>,
    pub cache: Arc<CatalogCache>,
    pub recommender: Recommender,
    pub limits: RecommendationSettings,
    pub seed_path: Option<PathBuf>,
}

impl AppState {
    /// Requested limit, defaulted and capped by configuration
    pub fn resolve_limit(&self, requested: Option<u16>) -> usize {
        requested
            .unwrap_or(self.limits.default_limit)
            .min(self.limits.max_limit)
            .max(1) as usize
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(cheeses::configure)
            .configure(recommendations::configure),
    );
}

/// JSON body for extractor errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// Extractor configuration returning JSON error bodies
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(handle_query_payload_error)
}

/// Map a store failure to an HTTP response
pub(crate) fn store_error_response(context: &str, err: &StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(_) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Cheese not found".to_string(),
            message: err.to_string(),
            status_code: 404,
        }),
        StoreError::Conflict(_) => HttpResponse::Conflict().json(ErrorResponse {
            error: "Cheese with this ID already exists".to_string(),
            message: err.to_string(),
            status_code: 409,
        }),
        _ => {
            tracing::error!("{}: {}", context, err);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: context.to_string(),
                message: err.to_string(),
                status_code: 500,
            })
        }
    }
}

pub(crate) fn validation_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}
