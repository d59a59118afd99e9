//! HTTP front of the API: a GraphQL endpoint, GraphiQL, and a health probe.

use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Json;
use axum::Router;
use axum::extract::{ConnectInfo, State};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use sw_graphql::{ApiSchema, ClientAddr};
use tokio::net::TcpListener;
use tracing::{debug, error, info};

/// Build the router serving the schema.
///
/// `POST /graphql` executes documents, `GET /graphql` serves GraphiQL, and
/// `GET /health` answers liveness probes. Handlers rely on the listener
/// being set up with connect info, as [`serve`] does.
pub fn router(schema: ApiSchema) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql))
        .route("/health", get(health))
        .with_state(schema)
}

/// Bind the address and serve the schema until ctrl-c.
pub async fn serve(schema: ApiSchema, addr: SocketAddr) -> Result<(), String> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("failed to bind {addr}: {e}"))?;
    let addr = listener
        .local_addr()
        .map_err(|e| format!("failed to read the bound address: {e}"))?;
    info!("listening on http://{addr}/graphql");

    axum::serve(
        listener,
        router(schema).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| format!("server error: {e}"))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for ctrl-c: {e}");
    }
    info!("shutting down");
}

async fn graphql(
    State(schema): State<ApiSchema>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    debug!(client = %addr.ip(), "graphql request");
    let request = req.into_inner().data(ClientAddr(addr.ip()));
    schema.execute(request).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
