use axum::{extract::State, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    state.greeting.name.clone()
}

pub async fn handle_coffee(State(state): State<AppState>) -> impl IntoResponse {
    state.greeting.coffee.clone()
}
