use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::reports::adapters::inbound::http_error::error_response;
use crate::modules::reports::use_cases::appointments_between_dates::handler;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AppointmentsBetweenDatesParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<AppointmentsBetweenDatesParams>,
) -> impl IntoResponse {
    match handler::handle(
        &*state.appointments,
        params.start_date.as_deref(),
        params.end_date.as_deref(),
    )
    .await
    {
        Ok(listing) => Json(listing).into_response(),
        Err(error) => error_response(error),
    }
}
