use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::coffees::core::coffee::Coffee;
use crate::modules::coffees::core::ports::StorageError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
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

    match state.coffees.create(coffee).await {
        Ok(stored) => (StatusCode::CREATED, Json(stored)).into_response(),
        Err(StorageError::DuplicateId(id)) => (
            StatusCode::CONFLICT,
            format!("a coffee with id {id} already exists"),
        )
            .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
