use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::coffees::core::coffee::Coffee;
use crate::modules::coffees::core::ports::UpsertOutcome;
use crate::shell::state::AppState;

// The status code is the only create-vs-update signal callers get: 200 when
// the path id already existed, 201 when the upsert fell through to create.
pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Coffee>, JsonRejection>,
) -> impl IntoResponse {
    let Json(coffee) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()).into_response();
        }
    };

    if coffee.name.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            "coffee name must not be blank",
        )
            .into_response();
    }

    match state.coffees.upsert(&id, coffee).await {
        Ok(UpsertOutcome::Updated(updated)) => (StatusCode::OK, Json(updated)).into_response(),
        Ok(UpsertOutcome::Created(created)) => {
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
