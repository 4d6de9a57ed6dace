use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::pairings_for;
use crate::models::{CheeseRequest, HealthResponse, MutationResponse, PairingsResponse, SearchQuery, SeedResponse, ErrorResponse};
use crate::routes::{store_error_response, validation_error_response, AppState};
use crate::services::seed_catalog;

/// Configure catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/cheeses", web::get().to(list_cheeses))
        .route("/cheeses", web::post().to(create_cheese))
        .route("/cheeses/{id}", web::get().to(get_cheese))
        .route("/cheeses/{id}", web::put().to(update_cheese))
        .route("/cheeses/{id}", web::delete().to(delete_cheese))
        .route("/cheeses/{id}/pairings", web::get().to(get_pairings))
        .route("/search", web::get().to(search_cheeses))
        .route("/seed", web::post().to(reseed));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = state.catalog.health_check().await.unwrap_or(false);
    let cheese_count = match state.catalog.count().await {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!("Health check could not count cheeses: {}", e);
            0
        }
    };

    tracing::debug!("Catalog cache: {:?}", state.cache.stats());

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        database: state.catalog.backend().to_string(),
        cheese_count,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    };

    if healthy {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// GET /api/v1/cheeses
async fn list_cheeses(state: web::Data<AppState>) -> impl Responder {
    match state.catalog.get_all().await {
        Ok(cheeses) => HttpResponse::Ok().json(cheeses),
        Err(e) => store_error_response("Failed to fetch cheeses", &e),
    }
}

/// GET /api/v1/cheeses/{id}
async fn get_cheese(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.catalog.get_by_id(&path).await {
        Ok(cheese) => HttpResponse::Ok().json(cheese),
        Err(e) => store_error_response("Failed to fetch cheese", &e),
    }
}

/// POST /api/v1/cheeses
///
/// A missing or blank `id` gets a generated UUID.
async fn create_cheese(
    state: web::Data<AppState>,
    req: web::Json<CheeseRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(&errors);
    }

    let req = req.into_inner();
    let id = req
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    match state.catalog.insert(req.into_cheese(id.clone())).await {
        Ok(()) => {
            state.cache.invalidate().await;
            tracing::info!("Added cheese {}", id);
            HttpResponse::Created().json(MutationResponse { success: true, id })
        }
        Err(e) => store_error_response("Failed to add cheese", &e),
    }
}

/// PUT /api/v1/cheeses/{id}
async fn update_cheese(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<CheeseRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(&errors);
    }

    let id = path.into_inner();
    match state.catalog.update(&id, req.into_inner().into_cheese(id.clone())).await {
        Ok(()) => {
            state.cache.invalidate().await;
            tracing::info!("Updated cheese {}", id);
            HttpResponse::Ok().json(MutationResponse { success: true, id })
        }
        Err(e) => store_error_response("Failed to update cheese", &e),
    }
}

/// DELETE /api/v1/cheeses/{id}
async fn delete_cheese(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.catalog.delete(&id).await {
        Ok(()) => {
            state.cache.invalidate().await;
            tracing::info!("Deleted cheese {}", id);
            HttpResponse::Ok().json(MutationResponse { success: true, id })
        }
        Err(e) => store_error_response("Failed to delete cheese", &e),
    }
}

/// GET /api/v1/cheeses/{id}/pairings
async fn get_pairings(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.catalog.get_by_id(&path).await {
        Ok(cheese) => HttpResponse::Ok().json(PairingsResponse {
            pairings: pairings_for(cheese.category),
            item_id: cheese.id,
            name: cheese.name,
        }),
        Err(e) => store_error_response("Failed to fetch pairings", &e),
    }
}

/// GET /api/v1/search?q={query}
async fn search_cheeses(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    match state.catalog.search(&query.q).await {
        Ok(cheeses) => {
            tracing::debug!("Search {:?} matched {} cheeses", query.q, cheeses.len());
            HttpResponse::Ok().json(cheeses)
        }
        Err(e) => store_error_response("Search failed", &e),
    }
}

/// POST /api/v1/seed
///
/// Upserts the configured seed file into the catalog.
async fn reseed(state: web::Data<AppState>) -> impl Responder {
    let Some(path) = state.seed_path.as_ref() else {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Seeding disabled".to_string(),
            message: "catalog.seed_path is not configured".to_string(),
            status_code: 400,
        });
    };

    match seed_catalog(state.catalog.as_ref(), path).await {
        Ok(seeded) => {
            state.cache.invalidate().await;
            tracing::info!("Re-seeded {} cheeses from {}", seeded, path.display());
            HttpResponse::Ok().json(SeedResponse { success: true, seeded })
        }
        Err(e) => store_error_response("Re-seeding failed", &e),
    }
}
