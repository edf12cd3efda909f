// Appointment snapshot rows consumed by every report.
//
// Purpose
// - Describe the read-only shape of an appointment as the persistence layer hands it over.
//
// Responsibilities
// - Build display names for therapists and patients.
// - Render and order appointment hours, which may arrive as a clock time or as raw text.
//
// Boundaries
// - Records are never mutated by the reports; booking and cancellation live elsewhere.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A therapist or a patient as referenced by an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: i64,
    #[serde(default)]
    pub paternal_lastname: Option<String>,
    #[serde(default)]
    pub maternal_lastname: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl PersonRef {
    /// Paternal surname, maternal surname and given name, skipping blank parts.
    pub fn display_name(&self) -> String {
        [
            self.paternal_lastname.as_deref(),
            self.maternal_lastname.as_deref(),
            self.name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Appointment hour as stored: a proper clock time, or text kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppointmentTime {
    Clock(NaiveTime),
    Raw(String),
}

impl AppointmentTime {
    pub fn render(&self) -> String {
        match self {
            AppointmentTime::Clock(time) => time.format("%H:%M").to_string(),
            AppointmentTime::Raw(text) => text.clone(),
        }
    }

    /// Clock value used for ordering. Raw text that reads as a time orders like one.
    pub fn clock(&self) -> Option<NaiveTime> {
        match self {
            AppointmentTime::Clock(time) => Some(*time),
            AppointmentTime::Raw(text) => NaiveTime::parse_from_str(text.trim(), "%H:%M:%S")
                .or_else(|_| NaiveTime::parse_from_str(text.trim(), "%H:%M"))
                .ok(),
        }
    }

    pub fn order(&self) -> HourOrder<'_> {
        match self {
            AppointmentTime::Clock(time) => HourOrder::Clock(*time),
            AppointmentTime::Raw(text) => self
                .clock()
                .map_or(HourOrder::Text(text.trim()), HourOrder::Clock),
        }
    }
}

/// Position of an appointment within its day: no hour first, then clock times, then unreadable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HourOrder<'a> {
    Missing,
    Clock(NaiveTime),
    Text(&'a str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<AppointmentTime>,
    #[serde(default)]
    pub therapist: Option<PersonRef>,
    #[serde(default)]
    pub patient: Option<PersonRef>,
    #[serde(default)]
    pub payment: Option<Decimal>,
    #[serde(default)]
    pub payment_type: Option<String>,
    #[serde(default)]
    pub appointment_kind: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl AppointmentRecord {
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.is_active() && self.date == date
    }

    pub fn is_active_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.is_active() && start <= self.date && self.date <= end
    }

    pub fn hour_order(&self) -> HourOrder<'_> {
        self.time
            .as_ref()
            .map_or(HourOrder::Missing, AppointmentTime::order)
    }

    /// Payment amount paired with its type label, when both are present.
    pub fn labelled_payment(&self) -> Option<(&str, Decimal)> {
        match (self.payment_type.as_deref(), self.payment) {
            (Some(label), Some(amount)) => Some((label, amount)),
            _ => None,
        }
    }
}
