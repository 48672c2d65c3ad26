//! Dashboard assembly — single-fetch data for the patient and doctor
//! views, built from whatever the store currently holds. Absent data
//! yields empty defaults, never an error surfaced to the client.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::appointment::AppointmentBook;
use crate::models::enums::{AppointmentStatus, Severity};
use crate::models::Appointment;
use crate::store::{KvStore, ResultStore};

/// Condensed view of the latest completed analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub date: String,
    pub overall_severity: Severity,
    pub condition_count: usize,
    pub symptoms: Vec<String>,
}

/// Patient dashboard — latest assessment plus upcoming appointments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDashboard {
    pub latest_analysis: Option<AnalysisSummary>,
    pub upcoming_appointments: Vec<Appointment>,
}

/// Doctor dashboard — the appointment roster with aggregate counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDashboard {
    pub appointments: Vec<Appointment>,
    pub total_upcoming: usize,
    pub total_completed: usize,
    pub total_cancelled: usize,
}

/// Assemble the patient view from the store.
pub fn patient_dashboard(store: Arc<dyn KvStore>) -> PatientDashboard {
    let latest_analysis = ResultStore::new(store.clone())
        .load()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not load analysis snapshot for dashboard");
            None
        })
        .map(|snapshot| AnalysisSummary {
            date: snapshot.date.clone(),
            overall_severity: snapshot.analysis.overall_severity,
            condition_count: snapshot.analysis.conditions.len(),
            symptoms: snapshot.symptoms,
        });

    let upcoming_appointments = AppointmentBook::new(store)
        .list()
        .unwrap_or_default()
        .into_iter()
        .filter(|a| a.status == AppointmentStatus::Upcoming)
        .collect();

    PatientDashboard {
        latest_analysis,
        upcoming_appointments,
    }
}

/// Assemble the doctor view from the store.
pub fn doctor_dashboard(store: Arc<dyn KvStore>) -> DoctorDashboard {
    let appointments = AppointmentBook::new(store).list().unwrap_or_default();

    let count = |status: AppointmentStatus| {
        appointments.iter().filter(|a| a.status == status).count()
    };

    DoctorDashboard {
        total_upcoming: count(AppointmentStatus::Upcoming),
        total_completed: count(AppointmentStatus::Completed),
        total_cancelled: count(AppointmentStatus::Cancelled),
        appointments,
    }
}
