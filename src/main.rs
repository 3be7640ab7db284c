use anyhow::Context;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, routing::get};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use meal_checkins::shared::infrastructure::document_store::DocumentStore;
use meal_checkins::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use meal_checkins::shared::infrastructure::document_store::json_file::JsonFileDocumentStore;
use meal_checkins::shell::config::Config;
use meal_checkins::shell::graphql::{AppSchema, schema};
use meal_checkins::shell::http::router;
use meal_checkins::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let store: Arc<dyn DocumentStore> = match &config.data_dir {
        Some(dir) => open_file_store(dir).await?,
        None => {
            tracing::warn!("no data directory configured, records live in memory only");
            Arc::new(InMemoryDocumentStore::new())
        }
    };
    let mirror = match &config.mirror_dir {
        Some(dir) => Some(open_file_store(dir).await?),
        None => None,
    };

    let state = AppState::new(store, mirror, config.locale);
    let schema = schema(state.clone());

    let app = Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .merge(router(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("HTTP API: http://{}/rooms", config.addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn open_file_store(dir: &Path) -> anyhow::Result<Arc<dyn DocumentStore>> {
    let store = JsonFileDocumentStore::open(dir)
        .await
        .with_context(|| format!("opening document store at {}", dir.display()))?;
    tracing::info!(root = %store.root().display(), "document store opened");
    Ok(Arc::new(store))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
