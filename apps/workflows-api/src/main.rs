use axum::http::{header, HeaderName, Method, StatusCode};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use secrets::{SecretsClient, SecretsConfig};
use workflows_lib::end_user_service::EndUserService;
use workflows_lib::repository::traits::EndUserRepositoryTrait;
use workflows_lib::repository::{EndUserRepository, UserRepository};
use workflows_lib::user_service::{UserLookup, UserService};
use workflows_lib::util::connect_with_retry;

use workflows_api::auth::JwtStrategy;
use workflows_api::config::{AuthConfig, MiddlewareConfig};
use workflows_api::constants::{
    DATABASE_URL, DEFAULT_PORT, ENV, JWT_SECRET_KEY, LOCAL_ENV, SERVICE, WORKFLOWS_API_PORT,
};
use workflows_api::router::app_router;
use workflows_api::shutdown::{drain_with_deadline, shutdown_signal};
use workflows_api::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing subscriber
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let env = std::env::var(ENV)
        .map_err(|_| format!("{} environment variable must be set", ENV))?;

    let registry = tracing_subscriber::registry().with(filter);

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true);

    if env == LOCAL_ENV {
        let pretty_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .pretty();
        registry.with(json_layer).with(pretty_layer).init();
    } else {
        registry.with(json_layer).init();
    }

    tracing::info!(service = SERVICE, env = %env, "tracing initialized");

    // Load middleware configuration from environment
    let middleware_config = MiddlewareConfig::from_env();
    tracing::info!(
        rate_limit_per_minute = middleware_config.rate_limit_per_minute,
        rate_limit_burst = middleware_config.rate_limit_burst,
        request_timeout_secs = middleware_config.request_timeout.as_secs(),
        max_body_size = middleware_config.max_body_size,
        cors_origins = ?middleware_config.cors_allowed_origins,
        "middleware configuration loaded"
    );

    let auth_config = AuthConfig::from_env();
    let secrets = SecretsClient::new(SecretsConfig::from_env());
    let jwt_secret = secrets.require_secret(JWT_SECRET_KEY).await?;
    tracing::info!(leeway_secs = auth_config.leeway_secs, "token verification configured");

    // Setup database pool
    let database_url = std::env::var(DATABASE_URL)
        .map_err(|_| format!("{} environment variable must be set", DATABASE_URL))?;

    let pool = connect_with_retry(&database_url, 10).await?;

    let end_user_repo: Arc<dyn EndUserRepositoryTrait> = Arc::new(EndUserRepository::new(pool.clone()));
    let user_lookup: Arc<dyn UserLookup> = Arc::new(UserService::new(UserRepository::new(pool)));

    let app_state = AppState {
        end_user_service: Arc::new(EndUserService::with_repo(end_user_repo)),
        auth: Arc::new(JwtStrategy::new(user_lookup, &jwt_secret, &auth_config)),
        env: env.clone(),
    };

    let mut app = app_router(app_state);

    // ============================================
    // Middleware stack (applied inner to outer)
    // Order: Request → Rate Limit → Timeout → CORS → Body Limit → Request ID → Trace → Handler
    // ============================================

    // 1. Trace layer (innermost - closest to handler)
    app = app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(tracing::Level::DEBUG))
            .on_response(DefaultOnResponse::new().level(tracing::Level::DEBUG)),
    );

    // 2. Request ID layers
    let x_request_id = HeaderName::from_static("x-request-id");
    app = app
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid));

    // 3. Body limit layer
    app = app.layer(RequestBodyLimitLayer::new(middleware_config.max_body_size));

    // 4. CORS layer
    let methods = [Method::GET, Method::POST, Method::PATCH, Method::OPTIONS];
    let headers = [header::CONTENT_TYPE, header::AUTHORIZATION, x_request_id];
    let cors_layer = if middleware_config.allows_any_origin() {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<_> = middleware_config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(origins)
    };
    app = app.layer(cors_layer.allow_methods(methods).allow_headers(headers));

    // 5. Timeout layer (returns 408 Request Timeout)
    app = app.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        middleware_config.request_timeout,
    ));

    // 6. Rate limiting layer (outermost)
    // Calculate milliseconds between requests: 60000ms / requests_per_minute
    let replenish_interval_ms = 60_000 / middleware_config.rate_limit_per_minute as u64;
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(replenish_interval_ms.max(1))
        .burst_size(middleware_config.rate_limit_burst)
        .finish()
        .ok_or("invalid rate limit configuration")?;
    app = app.layer(GovernorLayer {
        config: Arc::new(governor_conf),
    });

    let port: u16 = std::env::var(WORKFLOWS_API_PORT)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = format!("0.0.0.0:{}", port);
    let public_url = format!("http://127.0.0.1:{}", port);

    let listener = TcpListener::bind(&addr).await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("workflows-api is ready to accept requests at: {}", public_url);
    tracing::info!("API v1 endpoints available at: {}/v1", public_url);

    // Serve with graceful shutdown, bounded by the drain deadline
    let (drain_tx, mut drain_rx) = watch::channel(());
    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        let _ = drain_rx.changed().await;
    })
    .into_future();
    let signal = async move {
        shutdown_signal().await;
        let _ = drain_tx.send(());
    };

    if let Some(result) =
        drain_with_deadline(server, signal, middleware_config.shutdown_timeout).await
    {
        result.map_err(|e| format!("Server error: {}", e))?;
    }

    Ok(())
}
