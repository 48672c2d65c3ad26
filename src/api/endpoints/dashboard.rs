//! Dashboard endpoints for the patient and doctor views.

use axum::extract::State;
use axum::Json;

use crate::api::types::ApiContext;
use crate::dashboard::{self, DoctorDashboard, PatientDashboard};

/// `GET /api/dashboard/patient`
pub async fn patient(State(ctx): State<ApiContext>) -> Json<PatientDashboard> {
    Json(dashboard::patient_dashboard(ctx.store.clone()))
}

/// `GET /api/dashboard/doctor`
pub async fn doctor(State(ctx): State<ApiContext>) -> Json<DoctorDashboard> {
    Json(dashboard::doctor_dashboard(ctx.store.clone()))
}
