// Dashboard statistics over an inclusive date range.
//
// Purpose
// - Headline metrics, payment-type usage, therapist performance, weekday revenue and
//   sessions, and the split between "C" and "CC" appointment kinds.
//
// Responsibilities
// - Every figure only counts live appointments inside the range.
// - Revenue stays a `Decimal` until it is handed out as a float, except the headline
//   total which keeps its exact value and is `None` when nothing was paid.

use crate::modules::reports::core::appointment::AppointmentRecord;
use crate::modules::reports::core::weekday::WeekdayTotals;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrincipalMetrics {
    pub ttlpacientes: u64,
    pub ttlsesiones: u64,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub ttlganancias: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TherapistPerformance {
    pub id: i64,
    pub terapeuta: String,
    pub sesiones: u64,
    pub ingresos: f64,
    #[serde(rename = "raiting")]
    pub rating: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PatientKinds {
    pub c: u64,
    pub cc: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub metricas: PrincipalMetrics,
    pub tipos_pago: BTreeMap<String, u64>,
    pub terapeutas: Vec<TherapistPerformance>,
    pub ingresos: WeekdayTotals<f64>,
    pub sesiones: WeekdayTotals<u64>,
    pub tipos_pacientes: PatientKinds,
}

fn in_range(
    start: NaiveDate,
    end: NaiveDate,
    records: &[AppointmentRecord],
) -> impl Iterator<Item = &AppointmentRecord> {
    records.iter().filter(move |r| r.is_active_between(start, end))
}

fn to_float(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

pub fn principal_metrics(
    start: NaiveDate,
    end: NaiveDate,
    records: &[AppointmentRecord],
) -> PrincipalMetrics {
    let mut patients = HashSet::new();
    let mut sessions = 0;
    let mut revenue: Option<Decimal> = None;
    for record in in_range(start, end, records) {
        sessions += 1;
        if let Some(patient) = &record.patient {
            patients.insert(patient.id);
        }
        if let Some(amount) = record.payment {
            revenue = Some(revenue.unwrap_or_default() + amount);
        }
    }
    PrincipalMetrics {
        ttlpacientes: patients.len() as u64,
        ttlsesiones: sessions,
        ttlganancias: revenue,
    }
}

pub fn payment_type_counts(
    start: NaiveDate,
    end: NaiveDate,
    records: &[AppointmentRecord],
) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for label in in_range(start, end, records).filter_map(|r| r.payment_type.as_deref()) {
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    counts
}

pub fn therapist_performance(
    start: NaiveDate,
    end: NaiveDate,
    records: &[AppointmentRecord],
) -> Vec<TherapistPerformance> {
    struct Tally {
        name: String,
        sessions: u64,
        revenue: Decimal,
        rating_sum: f64,
        ratings: u32,
    }

    let mut tallies: HashMap<i64, Tally> = HashMap::new();
    for record in in_range(start, end, records) {
        let Some(therapist) = &record.therapist else {
            continue;
        };
        let tally = tallies.entry(therapist.id).or_insert_with(|| Tally {
            name: therapist.display_name(),
            sessions: 0,
            revenue: Decimal::ZERO,
            rating_sum: 0.0,
            ratings: 0,
        });
        tally.sessions += 1;
        tally.revenue += record.payment.unwrap_or_default();
        if let Some(rating) = record.rating {
            tally.rating_sum += rating;
            tally.ratings += 1;
        }
    }

    let mut performance: Vec<TherapistPerformance> = tallies
        .into_iter()
        .map(|(id, tally)| TherapistPerformance {
            id,
            terapeuta: tally.name,
            sesiones: tally.sessions,
            ingresos: to_float(tally.revenue),
            rating: if tally.ratings == 0 {
                0.0
            } else {
                (tally.rating_sum / f64::from(tally.ratings) * 10.0).round() / 10.0
            },
        })
        .collect();
    performance.sort_by(|a, b| b.sesiones.cmp(&a.sesiones).then(a.id.cmp(&b.id)));
    performance
}

pub fn revenue_by_weekday(
    start: NaiveDate,
    end: NaiveDate,
    records: &[AppointmentRecord],
) -> WeekdayTotals<f64> {
    let mut revenue: WeekdayTotals<Decimal> = WeekdayTotals::new();
    for record in in_range(start, end, records) {
        if let Some(amount) = record.payment {
            revenue.add(record.date.weekday(), amount);
        }
    }

    revenue.map(to_float)
}

pub fn sessions_by_weekday(
    start: NaiveDate,
    end: NaiveDate,
    records: &[AppointmentRecord],
) -> WeekdayTotals<u64> {
    let mut sessions = WeekdayTotals::new();
    for record in in_range(start, end, records) {
        sessions.add(record.date.weekday(), 1);
    }
    sessions
}

/// Only the exact codes "C" and "CC" are tallied.
pub fn patient_kinds(start: NaiveDate, end: NaiveDate, records: &[AppointmentRecord]) -> PatientKinds {
    let mut kinds = PatientKinds::default();
    for record in in_range(start, end, records) {
        match record.appointment_kind.as_deref() {
            Some("C") => kinds.c += 1,
            Some("CC") => kinds.cc += 1,
            _ => {}
        }
    }
    kinds
}

pub fn statistics(start: NaiveDate, end: NaiveDate, records: &[AppointmentRecord]) -> StatisticsReport {
    StatisticsReport {
        metricas: principal_metrics(start, end, records),
        tipos_pago: payment_type_counts(start, end, records),
        terapeutas: therapist_performance(start, end, records),
        ingresos: revenue_by_weekday(start, end, records),
        sesiones: sessions_by_weekday(start, end, records),
        tipos_pacientes: patient_kinds(start, end, records),
    }
}
