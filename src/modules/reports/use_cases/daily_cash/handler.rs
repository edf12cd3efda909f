use crate::modules::reports::application::errors::ApplicationError;
use crate::modules::reports::application::queries_port::AppointmentQueries;
use crate::modules::reports::core::date_filter::{DateFilter, date_or_today, today_local};
use crate::modules::reports::use_cases::daily_cash::aggregate::{CashTotal, daily_cash};

pub async fn handle<TQueries>(
    queries: &TQueries,
    date: Option<&str>,
) -> Result<Vec<CashTotal>, ApplicationError>
where
    TQueries: AppointmentQueries + ?Sized,
{
    let date = date_or_today("date", date, today_local())?;
    let records = queries
        .fetch(&DateFilter::On(date))
        .await
        .map_err(ApplicationError::snapshot)?;

    let totals = daily_cash(date, &records);
    tracing::debug!(%date, payment_types = totals.len(), "daily cash computed");
    Ok(totals)
}
