// Shared test fixture for appointment snapshot rows.

use crate::modules::reports::core::appointment::{AppointmentRecord, AppointmentTime, PersonRef};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn money(amount: &str) -> Decimal {
    Decimal::from_str(amount).unwrap()
}

pub fn person(id: i64, paternal: &str, maternal: &str, name: &str) -> PersonRef {
    PersonRef {
        id,
        paternal_lastname: Some(paternal.to_string()),
        maternal_lastname: Some(maternal.to_string()),
        name: Some(name.to_string()),
    }
}

pub fn therapist_juan() -> PersonRef {
    person(1, "Perez", "Lopez", "Juan")
}

pub fn therapist_ana() -> PersonRef {
    person(2, "Garcia", "Lopez", "Ana")
}

pub fn patient_rosa() -> PersonRef {
    person(10, "Gomez", "Diaz", "Rosa")
}

pub fn patient_luis() -> PersonRef {
    person(11, "Quispe", "Mamani", "Luis")
}

pub struct AppointmentRecordBuilder {
    inner: AppointmentRecord,
}

impl Default for AppointmentRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AppointmentRecordBuilder {
    /// A live, unpaid appointment on 2024-01-15 (a Monday) at 10:00 with no people attached.
    pub fn new() -> Self {
        Self {
            inner: AppointmentRecord {
                id: 1,
                date: day(2024, 1, 15),
                time: Some(AppointmentTime::Clock(
                    NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                )),
                therapist: None,
                patient: None,
                payment: None,
                payment_type: None,
                appointment_kind: None,
                rating: None,
                is_deleted: false,
            },
        }
    }

    pub fn id(mut self, v: i64) -> Self {
        self.inner.id = v;
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn at(mut self, hour: u32, minute: u32) -> Self {
        self.inner.time = Some(AppointmentTime::Clock(
            NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
        ));
        self
    }

    pub fn raw_time(mut self, v: impl Into<String>) -> Self {
        self.inner.time = Some(AppointmentTime::Raw(v.into()));
        self
    }

    pub fn without_time(mut self) -> Self {
        self.inner.time = None;
        self
    }

    pub fn therapist(mut self, v: PersonRef) -> Self {
        self.inner.therapist = Some(v);
        self
    }

    pub fn patient(mut self, v: PersonRef) -> Self {
        self.inner.patient = Some(v);
        self
    }

    pub fn payment(mut self, v: &str) -> Self {
        self.inner.payment = Some(money(v));
        self
    }

    pub fn payment_type(mut self, v: impl Into<String>) -> Self {
        self.inner.payment_type = Some(v.into());
        self
    }

    pub fn paid(self, amount: &str, label: impl Into<String>) -> Self {
        self.payment(amount).payment_type(label)
    }

    pub fn kind(mut self, v: impl Into<String>) -> Self {
        self.inner.appointment_kind = Some(v.into());
        self
    }

    pub fn rating(mut self, v: f64) -> Self {
        self.inner.rating = Some(v);
        self
    }

    pub fn deleted(mut self) -> Self {
        self.inner.is_deleted = true;
        self
    }

    pub fn build(self) -> AppointmentRecord {
        self.inner
    }
}

#[cfg(test)]
mod appointment_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = AppointmentRecordBuilder::default().build();
        assert_eq!(built.id, 1);
        assert_eq!(built.date, day(2024, 1, 15));
        assert!(!built.is_deleted);
        assert_eq!(built.payment, None);
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let built = AppointmentRecordBuilder::new()
            .id(42)
            .date(day(2024, 2, 1))
            .at(15, 30)
            .therapist(therapist_juan())
            .patient(patient_rosa())
            .paid("80.50", "Yape")
            .kind("CC")
            .rating(4.0)
            .deleted()
            .build();

        assert_eq!(built.id, 42);
        assert_eq!(built.date, day(2024, 2, 1));
        assert_eq!(built.time.as_ref().map(|t| t.render()), Some("15:30".to_string()));
        assert_eq!(built.therapist, Some(therapist_juan()));
        assert_eq!(built.patient, Some(patient_rosa()));
        assert_eq!(built.payment, Some(money("80.50")));
        assert_eq!(built.payment_type.as_deref(), Some("Yape"));
        assert_eq!(built.appointment_kind.as_deref(), Some("CC"));
        assert_eq!(built.rating, Some(4.0));
        assert!(built.is_deleted);
    }
}
