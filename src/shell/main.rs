use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use timesheets::modules::timesheets::adapters::outbound::punch_store_in_memory::InMemoryPunchStore;
use timesheets::shared::core::clock::SystemClock;
use timesheets::shared::infrastructure::user_directory::in_memory::InMemoryUserDirectory;
use timesheets::shell::config::Config;
use timesheets::shell::graphql::{graphiql, graphql, schema};
use timesheets::shell::http::router;
use timesheets::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let seed = config.load_directory_seed()?;
    tracing::info!(employees = seed.len(), "directory seeded");

    // In-memory deps for now
    let store = Arc::new(InMemoryPunchStore::new());
    let directory = Arc::new(InMemoryUserDirectory::with_entries(seed));
    let state = AppState::new(store, directory, Arc::new(SystemClock), config.utc_offset);

    let gql = Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state.clone())));

    let app = router(state)
        .merge(gql)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on http://{}, GraphQL at /gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
