use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::AppointmentStatus;

/// A booked consultation slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub patient_name: String,
    pub doctor_name: String,
    pub specialty: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub reason: Option<String>,
    pub status: AppointmentStatus,
    pub booked_at: NaiveDateTime,
}

/// Incoming booking request, before an id and status are assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub patient_name: String,
    pub doctor_name: String,
    pub specialty: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_serializes_camel_case() {
        let appointment = Appointment {
            id: Uuid::new_v4(),
            patient_name: "Ana Silva".into(),
            doctor_name: "Dr. Chen".into(),
            specialty: "General practice".into(),
            date: NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
            time_slot: "10:30".into(),
            reason: None,
            status: AppointmentStatus::Upcoming,
            booked_at: chrono::Local::now().naive_local(),
        };
        let json = serde_json::to_string(&appointment).unwrap();
        assert!(json.contains("patientName"));
        assert!(json.contains("timeSlot"));
        assert!(json.contains("\"upcoming\""));
    }
}
