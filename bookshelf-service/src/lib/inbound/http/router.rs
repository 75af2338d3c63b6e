use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_book::create_book;
use super::handlers::create_category::create_category;
use super::handlers::delete_book::delete_book;
use super::handlers::delete_category::delete_category;
use super::handlers::get_book::get_book;
use super::handlers::get_category::get_category;
use super::handlers::get_profile::get_profile;
use super::handlers::list_books::list_books;
use super::handlers::list_books_by_category::list_books_by_category;
use super::handlers::list_categories::list_categories;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_book::update_book;
use super::handlers::update_category::update_category;
use crate::book::ports::BookServicePort;
use crate::category::ports::CategoryServicePort;
use crate::inbound::http::middleware as auth_middleware;
use crate::user::ports::AuthServicePort;

/// Unified application state for all HTTP handlers.
///
/// Services are held as trait objects so tests can substitute in-memory
/// implementations behind the same router.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub book_service: Arc<dyn BookServicePort>,
    pub category_service: Arc<dyn CategoryServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    book_service: Arc<dyn BookServicePort>,
    category_service: Arc<dyn CategoryServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        auth_service,
        book_service,
        category_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/categories", get(list_categories))
        .route("/api/categories/:id", get(get_category))
        .route("/api/categories/:id/books", get(list_books_by_category));

    let protected_routes = Router::new()
        .route("/api/profile", get(get_profile))
        .route("/api/books", post(create_book).get(list_books))
        .route(
            "/api/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::authenticate,
        ));

    // Admin gate runs after token validation, so the layers stack with
    // `authenticate` outermost.
    let admin_routes = Router::new()
        .route("/api/admin/categories", post(create_category))
        .route(
            "/api/admin/categories/:id",
            put(update_category).delete(delete_category),
        )
        .route_layer(middleware::from_fn(auth_middleware::require_admin))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::authenticate,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}
