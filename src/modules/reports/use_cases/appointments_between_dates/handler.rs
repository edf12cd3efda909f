// Appointments-between-dates query handler.
//
// Responsibilities
// - Require both ends of the range before touching the store.
// - An end date before the start date simply yields no rows.

use crate::modules::reports::application::errors::ApplicationError;
use crate::modules::reports::application::queries_port::AppointmentQueries;
use crate::modules::reports::core::date_filter::{DateFilter, required_range};
use crate::modules::reports::use_cases::appointments_between_dates::aggregate::{
    AppointmentListing, appointments_between,
};

pub async fn handle<TQueries>(
    queries: &TQueries,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<Vec<AppointmentListing>, ApplicationError>
where
    TQueries: AppointmentQueries + ?Sized,
{
    let (start, end) = required_range(("start_date", start_date), ("end_date", end_date))?;
    if end < start {
        tracing::debug!(%start, %end, "empty appointment range requested");
        return Ok(Vec::new());
    }

    let records = queries
        .fetch(&DateFilter::Between { start, end })
        .await
        .map_err(ApplicationError::snapshot)?;

    let listing = appointments_between(start, end, &records);
    tracing::debug!(%start, %end, appointments = listing.len(), "appointments between dates listed");
    Ok(listing)
}
