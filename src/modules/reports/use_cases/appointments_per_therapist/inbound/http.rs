use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::reports::adapters::inbound::http_error::error_response;
use crate::modules::reports::use_cases::appointments_per_therapist::handler;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AppointmentsPerTherapistParams {
    pub date: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<AppointmentsPerTherapistParams>,
) -> impl IntoResponse {
    match handler::handle(&*state.appointments, params.date.as_deref()).await {
        Ok(report) => Json(report).into_response(),
        Err(error) => error_response(error),
    }
}
