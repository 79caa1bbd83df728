// src/main.rs
use axum::{routing::get, Router};
use tracing_subscriber::fmt::init as tracing_init;
use tokio::net::TcpListener;
use dotenvy::dotenv;
use http::{header, HeaderValue, Method};
use std::net::{SocketAddr, IpAddr};
use tower_http::cors::{Any, CorsLayer};

use bhada_backend::config::AppConfig;
use bhada_backend::routes;
use bhada_backend::routing::resolver::RouteResolver;
use bhada_backend::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    // Read configuration once; the credential decides live vs degraded routing
    let config = AppConfig::from_env();
    if config.distance_api.api_key.is_none() {
        tracing::warn!("GOOGLE_MAPS_API_KEY not set; every quote will use the degraded fallback route");
    }

    // Create application state
    let app_state = AppState::new(RouteResolver::new(config.distance_api.clone()));

    // CORS for the separate front-end
    let cors = match config.allowed_origin.as_deref() {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .expect("ALLOWED_ORIGIN must be a valid origin");
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
        }
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    // Build application
    let api = routes::create_router()
        .route("/", get(|| async { "Bhada Calculator API" }))
        .route("/health", get(health_check));

    let app = Router::new().merge(api).layer(cors).with_state(app_state);

    // Start server (axum 0.8 style) with HOST/PORT env and graceful port selection
    let host_str = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let host: IpAddr = host_str.parse().unwrap_or_else(|_| "127.0.0.1".parse().unwrap());
    let base_port = std::env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()).unwrap_or(3000);

    // Try base_port..base_port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = base_port.saturating_add(offset);
            let addr = SocketAddr::from((host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => { bound = Some((l, addr)); break; }
                Err(e) => {
                    if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on {}", addr);
                l
            }
            None => {
                tracing::error!("Failed to bind to any port starting at {} on {}", base_port, host);
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}

async fn health_check() -> &'static str {
    "OK"
}
