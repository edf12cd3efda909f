use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::reports::adapters::inbound::http_error::error_response;
use crate::modules::reports::use_cases::patients_by_therapist::handler;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PatientsByTherapistParams {
    pub date: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<PatientsByTherapistParams>,
) -> impl IntoResponse {
    match handler::handle(&*state.appointments, params.date.as_deref()).await {
        Ok(groups) => Json(groups).into_response(),
        Err(error) => error_response(error),
    }
}
