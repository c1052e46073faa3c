use std::sync::Arc;

use crate::config::{DroidConfig, GreetingConfig};
use crate::modules::coffees::core::ports::CoffeeRepository;

#[derive(Clone)]
pub struct AppState {
    pub coffees: Arc<dyn CoffeeRepository>,
    pub droid: Arc<DroidConfig>,
    pub greeting: Arc<GreetingConfig>,
}
