use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

// Idempotent: deleting an id that was never there is still a 204.
pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.coffees.delete_by_id(&id).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod delete_coffee_http_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::delete,
    };
    use tower::ServiceExt;

    use crate::modules::coffees::adapters::outbound::in_memory::InMemoryCoffees;
    use crate::modules::coffees::core::coffee::Coffee;
    use crate::modules::coffees::core::ports::CoffeeRepository;
    use crate::shell::state::AppState;
    use crate::test_support::{offline_state, state_with};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/coffees/{id}", delete(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_204_and_remove_the_record() {
        let repository = InMemoryCoffees::new();
        repository
            .create(Coffee::with_id("A", "Cafe Cereza"))
            .await
            .unwrap();
        let state = state_with(repository);

        let response = app(state.clone())
            .oneshot(Request::delete("/coffees/A").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(state.coffees.find_by_id("A").await.unwrap(), None);
    }

    #[tokio::test]
    async fn it_should_return_204_for_an_absent_id_and_leave_the_store_unchanged() {
        let repository = InMemoryCoffees::new();
        repository
            .create(Coffee::with_id("A", "Cafe Cereza"))
            .await
            .unwrap();
        let state = state_with(repository);

        let response = app(state.clone())
            .oneshot(Request::delete("/coffees/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(state.coffees.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_repository_is_offline() {
        let response = app(offline_state())
            .oneshot(Request::delete("/coffees/A").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
