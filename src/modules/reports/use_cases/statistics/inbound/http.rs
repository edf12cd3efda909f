use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::reports::adapters::inbound::http_error::error_response;
use crate::modules::reports::use_cases::statistics::handler;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StatisticsParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<StatisticsParams>,
) -> impl IntoResponse {
    match handler::handle(
        &*state.appointments,
        params.start.as_deref(),
        params.end.as_deref(),
    )
    .await
    {
        Ok(report) => Json(report).into_response(),
        Err(error) => error_response(error),
    }
}
