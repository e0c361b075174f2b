use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::ports::AuthenticatorPort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Middleware that gates a route behind a valid session token.
///
/// On success the resolved `Principal` is stored in the request extensions
/// for handlers to pick up.
pub async fn authorize(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match state.authenticator.authorize(authorization) {
        Ok(principal) => {
            req.extensions_mut().insert(principal);
            next.run(req).await
        }
        Err(e) => {
            if let AuthError::Unauthenticated(ref reason) = e {
                tracing::debug!(reason = %reason, "Request rejected");
            }
            ApiError::from(e).into_response()
        }
    }
}
