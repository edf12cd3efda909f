// Statistics query handler.
//
// Responsibilities
// - Validate the whole range, including its ordering, before touching the store.
// - Fetch the range once and compute every dashboard section from that snapshot.

use crate::modules::reports::application::errors::ApplicationError;
use crate::modules::reports::application::queries_port::AppointmentQueries;
use crate::modules::reports::core::date_filter::{DateFilter, required_ordered_range};
use crate::modules::reports::use_cases::statistics::aggregate::{StatisticsReport, statistics};

pub async fn handle<TQueries>(
    queries: &TQueries,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<StatisticsReport, ApplicationError>
where
    TQueries: AppointmentQueries + ?Sized,
{
    let (start, end) = required_ordered_range(("start", start), ("end", end))?;
    let records = queries
        .fetch(&DateFilter::Between { start, end })
        .await
        .map_err(ApplicationError::snapshot)?;

    let report = statistics(start, end, &records);
    tracing::info!(
        %start,
        %end,
        sessions = report.metricas.ttlsesiones,
        patients = report.metricas.ttlpacientes,
        "statistics computed"
    );
    Ok(report)
}
