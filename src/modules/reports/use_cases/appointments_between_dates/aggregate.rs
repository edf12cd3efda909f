// Flat appointment listing for an inclusive date range.
//
// Purpose
// - Render every live appointment in range as a display row, earliest first.
//
// Responsibilities
// - Order by date, then hour, then id. Missing hours lead the day and unreadable ones trail it.
// - Substitute placeholders for missing therapist, patient and payment type.

use crate::modules::reports::core::appointment::AppointmentRecord;
use crate::modules::reports::core::date_filter::ISO_DATE_FORMAT;
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

pub const MISSING_THERAPIST: &str = "no therapist assigned";
pub const MISSING_PATIENT: &str = "unknown patient";
pub const MISSING_PAYMENT_TYPE: &str = "not defined";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentListing {
    pub appointment_id: i64,
    pub appointment_date: String,
    pub appointment_hour: String,
    pub therapist: String,
    pub patient: String,
    pub payment: f64,
    pub payment_type: String,
}

impl From<&AppointmentRecord> for AppointmentListing {
    fn from(record: &AppointmentRecord) -> Self {
        Self {
            appointment_id: record.id,
            appointment_date: record.date.format(ISO_DATE_FORMAT).to_string(),
            appointment_hour: record
                .time
                .as_ref()
                .map(|time| time.render())
                .unwrap_or_default(),
            therapist: record
                .therapist
                .as_ref()
                .map(|t| t.display_name())
                .unwrap_or_else(|| MISSING_THERAPIST.to_string()),
            patient: record
                .patient
                .as_ref()
                .map(|p| p.display_name())
                .unwrap_or_else(|| MISSING_PATIENT.to_string()),
            payment: record
                .payment
                .and_then(|amount| amount.to_f64())
                .unwrap_or(0.0),
            payment_type: record
                .payment_type
                .clone()
                .unwrap_or_else(|| MISSING_PAYMENT_TYPE.to_string()),
        }
    }
}

pub fn appointments_between(
    start: NaiveDate,
    end: NaiveDate,
    records: &[AppointmentRecord],
) -> Vec<AppointmentListing> {
    let mut in_range: Vec<&AppointmentRecord> = records
        .iter()
        .filter(|r| r.is_active_between(start, end))
        .collect();
    in_range.sort_by(|a, b| {
        (a.date, a.hour_order(), a.id).cmp(&(b.date, b.hour_order(), b.id))
    });
    in_range.into_iter().map(AppointmentListing::from).collect()
}
