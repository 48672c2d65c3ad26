//! Appointment endpoints: book, list, cancel.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, CancelResponse};
use crate::models::{Appointment, BookingRequest};

/// `POST /api/appointments` — validate and store a booking.
pub async fn book(
    State(ctx): State<ApiContext>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<Appointment>, ApiError> {
    let appointment = ctx.bookings().book(req)?;
    tracing::info!(id = %appointment.id, doctor = %appointment.doctor_name, "appointment booked");
    Ok(Json(appointment))
}

/// `GET /api/appointments` — all bookings, newest first.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Appointment>>, ApiError> {
    Ok(Json(ctx.bookings().list()?))
}

/// `DELETE /api/appointments/:id` — mark a booking cancelled.
pub async fn cancel(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<CancelResponse>, ApiError> {
    let cancelled = ctx.bookings().cancel(id)?;
    if !cancelled {
        return Err(ApiError::NotFound(format!("Unknown appointment: {id}")));
    }
    Ok(Json(CancelResponse { cancelled }))
}
