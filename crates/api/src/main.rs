use axum::{
    extract::rejection::JsonRejection,
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{any, post},
    Json, Router,
};
use chrono::Utc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use safarigo_core::domain::plan::{Plan, PlanRequest};

const MAX_BODY_BYTES: usize = 1 << 20;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = safarigo_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let app = Router::new()
        .route("/healthz", any(healthz))
        .route("/plans", post(create_plan))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http());

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], settings.port));

    tracing::info!(%addr, "safarigo listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

async fn create_plan(
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Plan>), (StatusCode, String)> {
    let Json(req) =
        payload.map_err(|e| (StatusCode::BAD_REQUEST, format!("invalid JSON: {e}")))?;

    // Wall-clock id at nanosecond resolution; unique only as far as the
    // clock resolves under concurrent requests.
    let id = Utc::now().format("%Y%m%dT%H%M%S%.9f").to_string();

    let plan = safarigo_core::planner::build_plan(&id, req)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok((StatusCode::CREATED, Json(plan)))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &safarigo_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
