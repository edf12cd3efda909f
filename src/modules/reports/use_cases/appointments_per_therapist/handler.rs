// Appointments-per-therapist query handler.
//
// Responsibilities
// - Resolve the report date, defaulting to today.
// - Fetch the day's snapshot and count it per therapist.

use crate::modules::reports::application::errors::ApplicationError;
use crate::modules::reports::application::queries_port::AppointmentQueries;
use crate::modules::reports::core::date_filter::{DateFilter, date_or_today, today_local};
use crate::modules::reports::use_cases::appointments_per_therapist::aggregate::{
    TherapistAppointmentCounts, count_by_therapist,
};

pub async fn handle<TQueries>(
    queries: &TQueries,
    date: Option<&str>,
) -> Result<TherapistAppointmentCounts, ApplicationError>
where
    TQueries: AppointmentQueries + ?Sized,
{
    let date = date_or_today("date", date, today_local())?;
    let records = queries
        .fetch(&DateFilter::On(date))
        .await
        .map_err(ApplicationError::snapshot)?;

    let report = count_by_therapist(date, &records);
    tracing::debug!(
        %date,
        therapists = report.therapists_appointments.len(),
        total = report.total_appointments_count,
        "appointments per therapist computed"
    );
    Ok(report)
}
