#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod api;
mod auth;
mod config;

use api::{comments::*, contents::*, grants::*, reports::*, share::*, spaces::*, users::*};
use axum::{
    Router,
    http::{HeaderName, Method, header},
    middleware,
    routing::{get, post, put},
};
use braincache_core::{AppCore, paths};
use config::ServerConfig;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(serde::Serialize)]
struct Health {
    status: String,
}

async fn health() -> axum::Json<Health> {
    axum::Json(Health {
        status: "braincache is working!".to_string(),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing logger
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,braincache_server=debug".into()),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting BrainCache API server");

    let config = ServerConfig::load().expect("Failed to load server configuration");

    let db_path = paths::ensure_database_path_string()
        .expect("Failed to determine BrainCache database path");
    let core = Arc::new(
        AppCore::new(&db_path, config.app.clone())
            .await
            .expect("Failed to initialize app core"),
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
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
            HeaderName::from_static(auth::USER_HEADER),
        ]);

    // Anonymous surface: health, signup, share-link resolution
    let public = Router::new()
        .route("/health", get(health))
        .route("/api/users", post(register_user))
        .route("/api/share/{token}", get(resolve_share_link));

    // Everything else requires a resolved identity
    let protected = Router::new()
        // Profile and user directory
        .route("/api/users/me", get(get_me).put(update_me))
        .route("/api/users/search", get(search_users))
        .route("/api/users/{id}/plan", put(set_plan))
        // Space management (RESTful)
        .route("/api/spaces", get(list_spaces).post(create_space))
        .route(
            "/api/spaces/{id}",
            get(get_space).put(update_space).delete(delete_space),
        )
        .route("/api/spaces/{id}/contents", get(list_space_contents))
        .route(
            "/api/spaces/{id}/comments",
            get(list_comments).post(add_comment),
        )
        .route(
            "/api/comments/{id}",
            put(edit_comment).delete(delete_comment),
        )
        // Content management
        .route("/api/contents", get(list_contents).post(create_content))
        .route(
            "/api/contents/{id}",
            get(get_content).put(update_content).delete(delete_content),
        )
        .route("/api/contents/{id}/reports", post(file_report))
        // Direct user-to-user sharing
        .route(
            "/api/grants",
            post(create_grant).put(update_grant).delete(revoke_grant),
        )
        .route(
            "/api/grants/resource/{kind}/{id}",
            get(list_resource_grants),
        )
        .route("/api/grants/shared-with-me/{kind}", get(list_shared_with_me))
        // Anonymous share link management (owner side)
        .route("/api/share/brain/enable", post(enable_brain_share))
        .route("/api/share/brain/disable", post(disable_brain_share))
        .route("/api/share/contents/{id}/enable", post(enable_content_share))
        .route(
            "/api/share/contents/{id}/disable",
            post(disable_content_share),
        )
        // Abuse reports
        .route("/api/reports", get(list_reports))
        .route("/api/reports/{id}/status", put(set_report_status))
        .route_layer(middleware::from_fn_with_state(
            core.clone(),
            auth::identity_middleware,
        ));

    let app = public.merge(protected).layer(cors).with_state(core);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|_| panic!("Failed to bind to {addr}"));

    tracing::info!("BrainCache running on http://{addr}");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
