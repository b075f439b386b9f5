//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use auth::JwtIdentityVerifier;
use blog::{BlogConfig, MongoRepository, blog_router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,blog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Database connection
    let repo = MongoRepository::connect(&config.mongodb_uri, &config.storage).await?;

    // Index creation failures should not prevent server startup
    if let Err(e) = repo.ensure_indexes().await {
        tracing::warn!(error = %e, "Index creation failed, continuing anyway");
    }

    let verifier = JwtIdentityVerifier::new(&config.auth)?;

    // Build router
    let app = blog_router(repo, verifier, BlogConfig::default())
        .layer(TraceLayer::new_for_http())
        .layer(platform::cors::cors_layer(config.frontend_origins.as_deref()));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
