use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tripdesk_core::{validation, Booking};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking: Booking,
}

#[derive(Debug, Serialize)]
pub struct BookingsResponse {
    pub bookings: Vec<Booking>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(create_booking))
        .route("/bookings/{package_id}", get(list_bookings_for_package))
}

/// POST /bookings
/// The package reference is not checked and no seats are taken off the package
pub async fn create_booking(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let Json(body) = body?;
    let new_booking = validation::validate_booking(&body)?;

    let booking = state.repo.add_booking(new_booking).await?;

    Ok((StatusCode::CREATED, Json(BookingResponse { booking })))
}

/// GET /bookings/{package_id}
/// Reads the leading digits of the segment; anything else matches no bookings
pub async fn list_bookings_for_package(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<BookingsResponse>, AppError> {
    let package_id = leading_package_id(&raw_id);

    let bookings = match package_id {
        Some(id) => state.repo.get_all_bookings_by_package_id(id).await?,
        None => Vec::new(),
    };
    if bookings.is_empty() {
        return Err(AppError::NotFoundError(json!({
            "message": "No booking found for package id: ",
            "packageId": package_id,
        })));
    }

    Ok(Json(BookingsResponse { bookings }))
}

/// `"12abc"` reads as 12; `"abc"`, `"-1"` and out-of-range ids read as `None`
fn leading_package_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}
