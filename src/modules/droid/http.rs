use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

// Pure configuration echo, no logic.
pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.droid.as_ref().clone())
}

#[cfg(test)]
mod droid_http_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::coffees::adapters::outbound::in_memory::InMemoryCoffees;
    use crate::test_support::state_with;

    use super::handle;

    #[tokio::test]
    async fn it_should_echo_the_configured_droid() {
        let app = Router::new()
            .route("/droid", get(handle))
            .with_state(state_with(InMemoryCoffees::new()));

        let response = app
            .oneshot(Request::get("/droid").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "BB-8", "description": "Small, rolling android"})
        );
    }
}
