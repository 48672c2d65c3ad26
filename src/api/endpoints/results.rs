//! `GET /api/results` — the persisted analysis snapshot.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::AnalysisSnapshot;

/// Read the single snapshot slot; 404 until a conversation completes.
pub async fn latest(State(ctx): State<ApiContext>) -> Result<Json<AnalysisSnapshot>, ApiError> {
    let snapshot = ctx
        .results()
        .load()?
        .ok_or_else(|| ApiError::NotFound("No completed analysis yet".into()))?;
    Ok(Json(snapshot))
}
