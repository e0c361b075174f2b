use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_food::create_food;
use super::handlers::create_user::create_user;
use super::handlers::delete_food::delete_food;
use super::handlers::get_current_user::get_current_user;
use super::handlers::list_categories::list_categories;
use super::handlers::list_foods::list_foods;
use super::handlers::not_found;
use super::handlers::sign_in::sign_in;
use super::handlers::update_food::update_food;
use super::handlers::ApiError;
use super::middleware::authorize;
use crate::domain::authentication::service::Authenticator;
use crate::domain::category::service::CategoryService;
use crate::domain::food::service::FoodService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::SqliteCategoryRepository;
use crate::outbound::repositories::SqliteFoodRepository;
use crate::outbound::repositories::SqliteUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<SqliteUserRepository>>,
    pub authenticator: Arc<Authenticator<SqliteUserRepository>>,
    pub category_service: Arc<CategoryService<SqliteCategoryRepository>>,
    pub food_service: Arc<FoodService<SqliteFoodRepository>>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/signin", post(sign_in))
        .route("/users", post(create_user))
        .route("/categories", get(list_categories))
        .route("/foods", get(list_foods));

    let protected_routes = Router::new()
        .route("/users/me", get(get_current_user))
        .route("/foods", post(create_food))
        .route("/foods/:id", put(update_food).delete(delete_food))
        .route_layer(middleware::from_fn_with_state(state.clone(), authorize));

    // Headers are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
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
            |response: &Response<_>, latency: Duration, _span: &Span| {
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
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::InternalServerError(format!("handler panicked: {}", detail)).into_response()
}
