//! Appointment booking — create, list, and cancel consultation slots.
//!
//! Bookings live as one JSON array under a dedicated store key, separate
//! from the analysis slot. Missing or corrupt data degrades to an empty
//! list rather than failing the caller.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::enums::AppointmentStatus;
use crate::models::{Appointment, BookingRequest};
use crate::store::{KvStore, StoreError, APPOINTMENTS_KEY};

/// Errors from booking operations.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Patient name is required")]
    MissingPatientName,

    #[error("Doctor name is required")]
    MissingDoctorName,

    #[error("Cannot book an appointment in the past ({0})")]
    DateInPast(NaiveDate),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Booking CRUD over the injected key-value store.
#[derive(Clone)]
pub struct AppointmentBook {
    store: Arc<dyn KvStore>,
}

impl AppointmentBook {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Validate and store a new booking. Returns the created appointment.
    pub fn book(&self, request: BookingRequest) -> Result<Appointment, BookingError> {
        if request.patient_name.trim().is_empty() {
            return Err(BookingError::MissingPatientName);
        }
        if request.doctor_name.trim().is_empty() {
            return Err(BookingError::MissingDoctorName);
        }
        let today = chrono::Local::now().date_naive();
        if request.date < today {
            return Err(BookingError::DateInPast(request.date));
        }

        let appointment = Appointment {
            id: Uuid::new_v4(),
            patient_name: request.patient_name.trim().to_string(),
            doctor_name: request.doctor_name.trim().to_string(),
            specialty: request.specialty,
            date: request.date,
            time_slot: request.time_slot,
            reason: request.reason,
            status: AppointmentStatus::Upcoming,
            booked_at: chrono::Local::now().naive_local(),
        };

        let mut all = self.list()?;
        all.push(appointment.clone());
        self.save(&all)?;
        Ok(appointment)
    }

    /// All bookings, newest first.
    pub fn list(&self) -> Result<Vec<Appointment>, BookingError> {
        let Some(json) = self.store.get(APPOINTMENTS_KEY)? else {
            return Ok(Vec::new());
        };
        let mut all: Vec<Appointment> = serde_json::from_str(&json).unwrap_or_default();
        all.sort_by(|a, b| b.booked_at.cmp(&a.booked_at));
        Ok(all)
    }

    /// Mark a booking cancelled. Returns whether the id was found.
    pub fn cancel(&self, id: Uuid) -> Result<bool, BookingError> {
        let mut all = self.list()?;
        let Some(appointment) = all.iter_mut().find(|a| a.id == id) else {
            return Ok(false);
        };
        appointment.status = AppointmentStatus::Cancelled;
        self.save(&all)?;
        Ok(true)
    }

    fn save(&self, all: &[Appointment]) -> Result<(), BookingError> {
        let json = serde_json::to_string(all).map_err(StoreError::from)?;
        self.store.set(APPOINTMENTS_KEY, &json)?;
        Ok(())
    }
}
