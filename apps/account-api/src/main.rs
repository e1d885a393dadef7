use axum::{
    http::{header, HeaderName, Method},
    middleware::from_fn,
    Extension,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
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
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use account_lib::account_service::AccountService;
use account_lib::repository::role_repository::RoleRepository;
use account_lib::repository::user_repository::UserRepository;
use account_lib::repository::user_role_repository::UserRoleRepository;
use account_lib::util::connect;

use account_api::config::MiddlewareConfig;
use account_api::constants::{
    ACCOUNT_API_PORT, DATABASE_URL, DEFAULT_DATABASE_URL, ENV, LOCAL_ENV, SERVICE,
};
use account_api::methods::create_role::__path_create_role;
use account_api::methods::create_user::__path_create_user;
use account_api::methods::delete_role::__path_delete_role;
use account_api::methods::delete_user::__path_delete_user;
use account_api::methods::entities::{
    RolePayload, RoleRefPayload, RoleResponse, RoleUpdatePayload, UserPayload, UserResponse,
    UserSummaryResponse,
};
use account_api::methods::get_role_by_id::__path_get_role_by_id;
use account_api::methods::get_roles::__path_get_roles;
use account_api::methods::get_user_by_login::__path_get_user_by_login;
use account_api::methods::get_users::__path_get_users;
use account_api::methods::routes::SERVICE_DOCS_PATH;
use account_api::methods::update_role::__path_update_role;
use account_api::methods::update_user::__path_update_user;
use account_api::middleware::ip_filter::{ip_filter_middleware, IpFilterConfig};
use account_api::router::api_router;
use account_api::shutdown::shutdown_signal;
use account_api::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        create_user, get_user_by_login, get_users, update_user, delete_user,
        create_role, get_role_by_id, get_roles, update_role, delete_role
    ),
    components(schemas(
        UserPayload, RoleRefPayload, UserResponse, UserSummaryResponse,
        RolePayload, RoleUpdatePayload, RoleResponse
    )),
    tags(
        (name = "users", description = "User management endpoints"),
        (name = "roles", description = "Role management endpoints")
    )
)]
struct ApiDoc;

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

    let env = std::env::var(ENV).unwrap_or_else(|_| LOCAL_ENV.to_string());

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
        ip_filter_enabled = middleware_config.has_ip_filter(),
        "middleware configuration loaded"
    );

    // Setup database pool; migrations run on connect
    let database_url =
        std::env::var(DATABASE_URL).unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let pool = connect(&database_url).await?;

    // Create shared service
    let account_service = AccountService::new(
        UserRepository::new(pool.clone()),
        RoleRepository::new(pool.clone()),
        UserRoleRepository::new(pool.clone()),
    );

    let app_state = AppState {
        account_service: Arc::new(account_service),
        env: env.clone(),
    };

    let mut app = api_router(app_state).merge(
        SwaggerUi::new(SERVICE_DOCS_PATH).url("/api-doc/openapi.json", ApiDoc::openapi()),
    );

    // ============================================
    // Middleware stack (layers added later run first)
    // Order: Request → Rate Limit → IP Filter → Timeout → CORS → Body Limit → Request ID → Trace → Handler
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
        .layer(SetRequestIdLayer::new(
            x_request_id.clone(),
            MakeRequestUuid,
        ));

    // 3. Body limit layer
    app = app.layer(RequestBodyLimitLayer::new(middleware_config.max_body_size));

    // 4. CORS layer
    let cors_layer = if middleware_config.cors_allowed_origins.contains(&"*".to_string()) {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, x_request_id])
    } else {
        let origins: Vec<_> = middleware_config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                HeaderName::from_static("x-request-id"),
            ])
    };
    app = app.layer(cors_layer);

    // 5. Timeout layer (responds 408 Request Timeout when elapsed)
    app = app.layer(TimeoutLayer::new(middleware_config.request_timeout));

    // 6. IP filter middleware (only if configured). The Extension goes on
    // after the filter so it sits outside it and the config is present by
    // the time the filter runs.
    if middleware_config.has_ip_filter() {
        let ip_config = IpFilterConfig::new(
            middleware_config.ip_allowlist.clone(),
            middleware_config.ip_blocklist.clone(),
        );
        app = app
            .layer(from_fn(ip_filter_middleware))
            .layer(Extension(ip_config));
        tracing::info!("IP filter middleware enabled");
    }

    // 7. Rate limiting layer (outermost)
    // Calculate milliseconds between requests: 60000ms / requests_per_minute
    let replenish_interval_ms = 60_000 / middleware_config.rate_limit_per_minute as u64;
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_interval_ms)
            .burst_size(middleware_config.rate_limit_burst)
            .finish()
            .expect("failed to build governor config"),
    );
    app = app.layer(GovernorLayer {
        config: governor_conf,
    });

    // Read port from env (default to 8080)
    let port: u16 = std::env::var(ACCOUNT_API_PORT)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080);

    let addr = format!("0.0.0.0:{}", port);
    let public_url = format!("http://127.0.0.1:{}", port);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("account-api is ready to accept requests at: {}", public_url);
    tracing::info!("API docs available at: {}{}", public_url, SERVICE_DOCS_PATH);

    // Serve with graceful shutdown
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal(middleware_config.shutdown_timeout))
    .await
    .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}
