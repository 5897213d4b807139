use axum::Router;
use mimalloc::MiMalloc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use runboard_rs::{config, routes, state};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "runboard_rs=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env();
    let cache_ttl = config.cache_ttl;
    let state = state::AppState::new(config);

    // Start cache eviction task
    let eviction_state = state.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(tokio::time::Duration::from_secs(300)).await; // Every 5 minutes
            eviction_state.evict_expired(cache_ttl);
        }
    });

    // Build router
    let serve_dir = ServeDir::new("assets/web")
        .not_found_service(ServeFile::new("assets/web/index.html"));

    let addr = format!("0.0.0.0:{}", state.config().port);

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::activities::router())
        .merge(routes::dashboard::router())
        .merge(routes::charts::router())
        .merge(routes::goals::router())
        .merge(routes::weight::router())
        .fallback_service(serve_dir)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Runboard-RS listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Dashboard: GET http://{}/api/dashboard", addr);
    tracing::info!("Weekly chart: GET http://{}/api/charts/weekly", addr);

    axum::serve(listener, app).await.unwrap();
}
