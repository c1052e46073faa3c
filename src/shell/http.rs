use axum::{Router, routing::get};

use crate::modules::coffees::use_cases::create_coffee::http as create_http;
use crate::modules::coffees::use_cases::delete_coffee::http as delete_http;
use crate::modules::coffees::use_cases::get_coffee::http as get_http;
use crate::modules::coffees::use_cases::list_coffees::http as list_http;
use crate::modules::coffees::use_cases::replace_coffee::http as replace_http;
use crate::modules::droid::http as droid_http;
use crate::modules::greeting::http as greeting_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/coffees", get(list_http::handle).post(create_http::handle))
        .route(
            "/coffees/{id}",
            get(get_http::handle)
                .put(replace_http::handle)
                .delete(delete_http::handle),
        )
        .route("/droid", get(droid_http::handle))
        .route("/greeting", get(greeting_http::handle))
        .route("/greeting/coffee", get(greeting_http::handle_coffee))
        .with_state(state)
}
