use async_graphql::{Context, Json, Object, Result as GqlResult, SimpleObject};

use crate::modules::reports::use_cases::appointments_between_dates::aggregate::AppointmentListing;
use crate::modules::reports::use_cases::appointments_per_therapist::aggregate::{
    TherapistAppointmentCount, TherapistAppointmentCounts,
};
use crate::modules::reports::use_cases::daily_cash::aggregate::CashTotal;
use crate::modules::reports::use_cases::patients_by_therapist::aggregate::{
    PatientAppointments, TherapistPatients,
};
use crate::modules::reports::use_cases::statistics::aggregate::StatisticsReport;
use crate::modules::reports::use_cases::{
    appointments_between_dates, appointments_per_therapist, daily_cash, patients_by_therapist,
    statistics,
};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTherapistAppointmentCount {
    pub id: i64,
    pub therapist: String,
    pub appointments_count: u64,
}

impl From<TherapistAppointmentCount> for GqlTherapistAppointmentCount {
    fn from(v: TherapistAppointmentCount) -> Self {
        Self {
            id: v.id,
            therapist: v.therapist,
            appointments_count: v.appointments_count,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTherapistAppointmentCounts {
    pub therapists_appointments: Vec<GqlTherapistAppointmentCount>,
    pub total_appointments_count: u64,
}

impl From<TherapistAppointmentCounts> for GqlTherapistAppointmentCounts {
    fn from(v: TherapistAppointmentCounts) -> Self {
        Self {
            therapists_appointments: v
                .therapists_appointments
                .into_iter()
                .map(Into::into)
                .collect(),
            total_appointments_count: v.total_appointments_count,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlPatientAppointments {
    pub patient_id: i64,
    pub patient: String,
    pub appointments: u64,
}

impl From<PatientAppointments> for GqlPatientAppointments {
    fn from(v: PatientAppointments) -> Self {
        Self {
            patient_id: v.patient_id,
            patient: v.patient,
            appointments: v.appointments,
        }
    }
}

/// `therapist_id` is empty for the unassigned group.
#[derive(SimpleObject, Clone)]
pub struct GqlTherapistPatients {
    pub therapist_id: String,
    pub therapist: String,
    pub patients: Vec<GqlPatientAppointments>,
}

impl From<TherapistPatients> for GqlTherapistPatients {
    fn from(v: TherapistPatients) -> Self {
        Self {
            therapist_id: v.therapist_id.to_string(),
            therapist: v.therapist,
            patients: v.patients.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlCashTotal {
    pub payment_type: String,
    pub total_payment: f64,
}

impl From<CashTotal> for GqlCashTotal {
    fn from(v: CashTotal) -> Self {
        Self {
            payment_type: v.payment_type,
            total_payment: v.total_payment,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlAppointmentListing {
    pub appointment_id: i64,
    pub appointment_date: String,
    pub appointment_hour: String,
    pub therapist: String,
    pub patient: String,
    pub payment: f64,
    pub payment_type: String,
}

impl From<AppointmentListing> for GqlAppointmentListing {
    fn from(v: AppointmentListing) -> Self {
        Self {
            appointment_id: v.appointment_id,
            appointment_date: v.appointment_date,
            appointment_hour: v.appointment_hour,
            therapist: v.therapist,
            patient: v.patient,
            payment: v.payment,
            payment_type: v.payment_type,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn appointments_per_therapist(
        &self,
        context: &Context<'_>,
        date: Option<String>,
    ) -> GqlResult<GqlTherapistAppointmentCounts> {
        let state = context.data_unchecked::<AppState>();
        let report =
            appointments_per_therapist::handler::handle(&*state.appointments, date.as_deref())
                .await?;
        Ok(report.into())
    }

    async fn patients_by_therapist(
        &self,
        context: &Context<'_>,
        date: Option<String>,
    ) -> GqlResult<Vec<GqlTherapistPatients>> {
        let state = context.data_unchecked::<AppState>();
        let groups =
            patients_by_therapist::handler::handle(&*state.appointments, date.as_deref()).await?;
        Ok(groups.into_iter().map(Into::into).collect())
    }

    async fn daily_cash(
        &self,
        context: &Context<'_>,
        date: Option<String>,
    ) -> GqlResult<Vec<GqlCashTotal>> {
        let state = context.data_unchecked::<AppState>();
        let totals = daily_cash::handler::handle(&*state.appointments, date.as_deref()).await?;
        Ok(totals.into_iter().map(Into::into).collect())
    }

    async fn appointments_between_dates(
        &self,
        context: &Context<'_>,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> GqlResult<Vec<GqlAppointmentListing>> {
        let state = context.data_unchecked::<AppState>();
        let listing = appointments_between_dates::handler::handle(
            &*state.appointments,
            start_date.as_deref(),
            end_date.as_deref(),
        )
        .await?;
        Ok(listing.into_iter().map(Into::into).collect())
    }

    /// Dashboard figures, shaped exactly like the HTTP statistics response.
    async fn statistics(
        &self,
        context: &Context<'_>,
        start: Option<String>,
        end: Option<String>,
    ) -> GqlResult<Json<StatisticsReport>> {
        let state = context.data_unchecked::<AppState>();
        let report =
            statistics::handler::handle(&*state.appointments, start.as_deref(), end.as_deref())
                .await?;
        Ok(Json(report))
    }
}
