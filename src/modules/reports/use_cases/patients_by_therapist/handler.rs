use crate::modules::reports::application::errors::ApplicationError;
use crate::modules::reports::application::queries_port::AppointmentQueries;
use crate::modules::reports::core::date_filter::{DateFilter, date_or_today, today_local};
use crate::modules::reports::use_cases::patients_by_therapist::aggregate::{
    TherapistPatients, patients_by_therapist,
};

pub async fn handle<TQueries>(
    queries: &TQueries,
    date: Option<&str>,
) -> Result<Vec<TherapistPatients>, ApplicationError>
where
    TQueries: AppointmentQueries + ?Sized,
{
    let date = date_or_today("date", date, today_local())?;
    let records = queries
        .fetch(&DateFilter::On(date))
        .await
        .map_err(ApplicationError::snapshot)?;

    let groups = patients_by_therapist(date, &records);
    tracing::debug!(%date, groups = groups.len(), "patients by therapist computed");
    Ok(groups)
}
