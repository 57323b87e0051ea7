use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension,
    response::{Html, IntoResponse},
    routing::get,
};
use hackathon_judging::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use hackathon_judging::shared::infrastructure::snapshot_store::file::FileSnapshotStore;
use hackathon_judging::shell::config::Config;
use hackathon_judging::shell::graphql::{AppSchema, build_schema};
use hackathon_judging::shell::http::router;
use hackathon_judging::shell::state::AppState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

async fn graphql(Extension(schema): Extension<AppSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load();

    // In-memory document store for now; snapshots survive restarts on disk.
    let store = Arc::new(InMemoryDocumentStore::new());
    let snapshot_store = Arc::new(FileSnapshotStore::new(config.snapshot_dir.clone()));
    let state = AppState::new(store, snapshot_store);
    let schema = build_schema(state.clone());

    let app = router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, snapshot_dir = %config.snapshot_dir.display(), "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
