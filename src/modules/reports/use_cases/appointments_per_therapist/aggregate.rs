// Count a day's appointments per therapist.
//
// Purpose
// - One row per therapist with at least one live appointment that day, plus the overall total.
//
// Responsibilities
// - Skip soft-deleted appointments and appointments without a therapist.
// - Order rows by therapist id so the output is deterministic.

use crate::modules::reports::core::appointment::{AppointmentRecord, PersonRef};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TherapistAppointmentCount {
    pub id: i64,
    pub therapist: String,
    pub name: Option<String>,
    pub paternal_lastname: Option<String>,
    pub maternal_lastname: Option<String>,
    pub appointments_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TherapistAppointmentCounts {
    pub therapists_appointments: Vec<TherapistAppointmentCount>,
    pub total_appointments_count: u64,
}

pub fn count_by_therapist(date: NaiveDate, records: &[AppointmentRecord]) -> TherapistAppointmentCounts {
    let mut counts: BTreeMap<i64, (&PersonRef, u64)> = BTreeMap::new();
    for record in records.iter().filter(|r| r.is_active_on(date)) {
        if let Some(therapist) = &record.therapist {
            counts.entry(therapist.id).or_insert((therapist, 0)).1 += 1;
        }
    }

    let therapists_appointments: Vec<TherapistAppointmentCount> = counts
        .into_values()
        .map(|(therapist, appointments_count)| TherapistAppointmentCount {
            id: therapist.id,
            therapist: therapist.display_name(),
            name: therapist.name.clone(),
            paternal_lastname: therapist.paternal_lastname.clone(),
            maternal_lastname: therapist.maternal_lastname.clone(),
            appointments_count,
        })
        .collect();
    let total_appointments_count = therapists_appointments
        .iter()
        .map(|row| row.appointments_count)
        .sum();

    TherapistAppointmentCounts {
        therapists_appointments,
        total_appointments_count,
    }
}
