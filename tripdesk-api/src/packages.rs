use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;
use tripdesk_core::{validation, TravelPackage};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct PackagesResponse {
    pub packages: Vec<TravelPackage>,
}

#[derive(Debug, Serialize)]
pub struct PackageResponse {
    pub package: TravelPackage,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/packages", get(list_packages))
        .route("/packages/update-seats", post(update_seats))
        .route("/packages/{destination}", get(get_package_by_destination))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /packages
pub async fn list_packages(
    State(state): State<AppState>,
) -> Result<Json<PackagesResponse>, AppError> {
    let packages = state.repo.get_all_travel_packages().await?;
    if packages.is_empty() {
        return Err(AppError::NotFoundError(json!({
            "message": "No travel package found.",
        })));
    }

    Ok(Json(PackagesResponse { packages }))
}

/// GET /packages/{destination}
/// Destination match is exact and case-sensitive
pub async fn get_package_by_destination(
    State(state): State<AppState>,
    Path(destination): Path<String>,
) -> Result<Json<PackageResponse>, AppError> {
    let package = state
        .repo
        .get_package_by_destination(&destination)
        .await?
        .ok_or_else(|| {
            AppError::NotFoundError(json!({
                "message": "Travel package not found for destination: ",
                "destination": destination,
            }))
        })?;

    Ok(Json(PackageResponse { package }))
}

/// POST /packages/update-seats
pub async fn update_seats(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PackageResponse>, AppError> {
    let Json(body) = body?;
    let update = validation::validate_seat_update(&body)?;

    debug!(package_id = update.package_id, seats_booked = update.seats_booked, "Updating seats");
    let package = state.repo.update_package(update).await?;

    Ok(Json(PackageResponse { package }))
}
