use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Json, Router,
    response::{Html, IntoResponse},
    routing::get,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::reports::use_cases::appointments_between_dates::inbound::http as between_http;
use crate::modules::reports::use_cases::appointments_per_therapist::inbound::http as per_therapist_http;
use crate::modules::reports::use_cases::daily_cash::inbound::http as daily_cash_http;
use crate::modules::reports::use_cases::patients_by_therapist::inbound::http as patients_http;
use crate::modules::reports::use_cases::statistics::inbound::http as statistics_http;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route(
            "/reports/appointments-per-therapist",
            get(per_therapist_http::handle),
        )
        .route("/reports/patients-by-therapist", get(patients_http::handle))
        .route("/reports/daily-cash", get(daily_cash_http::handle))
        .route(
            "/reports/appointments-between-dates",
            get(between_http::handle),
        )
        .route("/statistics/get-statistics", get(statistics_http::handle))
        .route("/health", get(health))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

#[cfg(test)]
mod shell_http_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use super::router;
    use crate::tests::fixtures::appointments::{
        AppointmentRecordBuilder, patient_rosa, therapist_juan,
    };
    use crate::tests::fixtures::queries::{make_offline_state, make_test_state};

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_report_health() {
        let response = router(make_test_state(vec![]))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "status": "ok" }));
    }

    #[rstest]
    #[case("/reports/appointments-per-therapist?date=2024-01-15")]
    #[case("/reports/patients-by-therapist?date=2024-01-15")]
    #[case("/reports/daily-cash?date=2024-01-15")]
    #[case("/reports/appointments-between-dates?start_date=2024-01-01&end_date=2024-01-31")]
    #[case("/statistics/get-statistics?start=2024-01-01&end=2024-01-31")]
    #[tokio::test]
    async fn it_should_route_every_report(#[case] uri: &str) {
        let state = make_test_state(vec![
            AppointmentRecordBuilder::new()
                .therapist(therapist_juan())
                .patient(patient_rosa())
                .paid("80.00", "Yape")
                .build(),
        ]);

        let response = router(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[rstest]
    #[case("/reports/appointments-per-therapist?date=2024-01-15")]
    #[case("/reports/patients-by-therapist")]
    #[case("/reports/daily-cash?date=2024-01-15")]
    #[case("/reports/appointments-between-dates?start_date=2024-01-01&end_date=2024-01-31")]
    #[case("/statistics/get-statistics?start=2024-01-01&end=2024-01-31")]
    #[tokio::test]
    async fn it_should_answer_500_when_the_store_is_offline(#[case] uri: &str) {
        let response = router(make_offline_state())
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn it_should_serve_graphql_queries() {
        let state = make_test_state(vec![
            AppointmentRecordBuilder::new()
                .therapist(therapist_juan())
                .patient(patient_rosa())
                .build(),
        ]);
        let body = serde_json::json!({
            "query": r#"{ appointmentsPerTherapist(date: "2024-01-15") { totalAppointmentsCount } }"#
        });

        let response = router(state)
            .oneshot(
                Request::post("/gql")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["data"]["appointmentsPerTherapist"]["totalAppointmentsCount"],
            1
        );
    }
}
