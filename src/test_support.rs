// Shared fixtures for handler tests.

use std::sync::Arc;

use crate::config::{DroidConfig, GreetingConfig};
use crate::modules::coffees::adapters::outbound::in_memory::InMemoryCoffees;
use crate::shell::state::AppState;

pub fn state_with(repository: InMemoryCoffees) -> AppState {
    AppState {
        coffees: Arc::new(repository),
        droid: Arc::new(DroidConfig {
            id: "BB-8".into(),
            description: "Small, rolling android".into(),
        }),
        greeting: Arc::new(GreetingConfig {
            name: "Dakota".into(),
            coffee: "Dakota is drinking Cafe Cereza".into(),
        }),
    }
}

pub fn offline_state() -> AppState {
    let mut repository = InMemoryCoffees::new();
    repository.toggle_offline();
    state_with(repository)
}
