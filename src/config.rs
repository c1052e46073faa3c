// Explicit configuration, read once at startup.
//
// Replaces framework-managed property binding: every value comes from an
// environment variable with a sensible local default, and the resulting
// structs are passed to the composition root by hand.

use serde::Serialize;
use std::env;

#[derive(Debug, Clone, Serialize)]
pub struct DroidConfig {
    pub id: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct GreetingConfig {
    pub name: String,
    pub coffee: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: String,
    pub seed_demo_data: bool,
    pub droid: DroidConfig,
    pub greeting: GreetingConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            listen_addr: env_or("LISTEN_ADDR", "0.0.0.0:8080"),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            droid: DroidConfig {
                id: env_or("DROID_ID", "BB-8"),
                description: env_or("DROID_DESCRIPTION", "Small, rolling android"),
            },
            greeting: GreetingConfig {
                name: env_or("GREETING_NAME", "Dakota"),
                coffee: env_or("GREETING_COFFEE", "Dakota is drinking Cafe Cereza"),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
