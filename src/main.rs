use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, fmt};

use coffee_catalog::config::AppConfig;
use coffee_catalog::modules::coffees::adapters::outbound::in_memory::InMemoryCoffees;
use coffee_catalog::modules::coffees::core::ports::CoffeeRepository;
use coffee_catalog::modules::coffees::seed::seed_demo_coffees;
use coffee_catalog::shell::{http, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env();

    let coffees: Arc<dyn CoffeeRepository> = Arc::new(InMemoryCoffees::new());
    if config.seed_demo_data {
        seed_demo_coffees(coffees.as_ref()).await?;
    }

    let state = AppState {
        coffees,
        droid: Arc::new(config.droid),
        greeting: Arc::new(config.greeting),
    };

    let app = http::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = config.listen_addr.parse()?;
    tracing::info!("coffee catalog listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
