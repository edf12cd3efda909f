use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::reports::adapters::inbound::http_error::error_response;
use crate::modules::reports::use_cases::daily_cash::handler;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DailyCashParams {
    pub date: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<DailyCashParams>,
) -> impl IntoResponse {
    match handler::handle(&*state.appointments, params.date.as_deref()).await {
        Ok(totals) => Json(totals).into_response(),
        Err(error) => error_response(error),
    }
}
