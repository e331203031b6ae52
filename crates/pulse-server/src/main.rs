use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use pulse_api::middleware::attach_session;
use pulse_api::{AppState, AppStateInner, boards, posts, votes};
use pulse_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulse=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let mongo_uri = std::env::var("PULSE_MONGO_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".into());
    let mongo_db = std::env::var("PULSE_MONGO_DB").unwrap_or_else(|_| "pulse".into());
    let host = std::env::var("PULSE_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PULSE_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    // A dead database endpoint aborts startup here, with the cause, instead
    // of every request failing later with a driver error.
    let db = Database::connect(&mongo_uri, &mongo_db).await?;

    let state: AppState = Arc::new(AppStateInner { db });

    // Routes
    let api_routes = Router::new()
        .route("/api/post", post(posts::create_post).delete(posts::delete_post))
        .route("/api/vote", post(votes::upvote).delete(votes::unvote))
        .layer(middleware::from_fn(attach_session))
        .with_state(state.clone());

    let page_routes = Router::new()
        .route("/", get(boards::home_page))
        .route("/b/{board_id}", get(boards::board_page))
        .with_state(state);

    let app = Router::new()
        .merge(api_routes)
        .merge(page_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Pulse server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
