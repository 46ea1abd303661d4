mod account;
mod health;
mod index;
mod middlewares;
mod swagger;
use crate::database;
use health::health_checker_handler;
use index::index_handler;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{AppState, Config};

use axum::{middleware, routing::get, Router};
use std::error::Error;
use std::sync::Arc;

/// Connects to the database, creates the schema when it is missing and
/// assembles the service router around the resulting state.
pub async fn make_app(config: Config) -> Result<Router, Box<dyn Error>> {
    info!("Connecting to PostgreSQL...");
    let sqlx_db_connection = database::connect_sqlx(&config.db_url).await;
    info!("Connected to PostgreSQL!");
    database::init_db(&sqlx_db_connection).await?;

    let db = database::PostgreDatabase::new(sqlx_db_connection);
    let state = Arc::new(AppState { db, config });
    Ok(build_router(state))
}

/// Builds the router from an already-connected application state
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_checker_handler))
        .nest("/accounts", account::account_routes())
        .merge(swagger::build_documentation())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            middlewares::enforce_https,
        ))
        .layer(middleware::from_fn(middlewares::security_headers))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
