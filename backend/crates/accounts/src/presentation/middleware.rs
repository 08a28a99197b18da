//! Bearer Token Middleware
//!
//! Stateless authorization for protected routes. Per-request state machine:
//! no header → 401; header present → strip the literal `"Bearer "` prefix →
//! verify → attach the caller's user id and continue, or 401. The 401 body
//! is always `{"error":"Unauthorized"}`.
//!
//! The prefix strip is an exact literal match (no case folding, no
//! whitespace trimming); a header without the prefix is treated as the raw
//! token, which keeps previously issued clients working.

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::id::UserId;
use platform::token::TokenService;
use std::sync::Arc;

/// Middleware state
#[derive(Clone)]
pub struct AuthLayerState {
    pub tokens: Arc<TokenService>,
}

/// Caller identity resolved by the middleware, available to handlers via
/// request extensions
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub UserId);

/// Middleware that requires a valid bearer token
pub async fn require_auth(
    State(state): State<AuthLayerState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let Some(auth_header) = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    else {
        return Err(unauthorized());
    };

    let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

    match state.tokens.verify(token) {
        Ok(user_id) => {
            req.extensions_mut()
                .insert(AuthenticatedUser(UserId::from_uuid(user_id)));
            Ok(next.run(req).await)
        }
        Err(_) => Err(unauthorized()),
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "error": "Unauthorized" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::extract::Extension;
    use axum::middleware;
    use axum::routing::get;
    use chrono::Duration;
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    const SECRET: &[u8] = b"middleware-test-secret";

    fn app(tokens: Arc<TokenService>) -> Router {
        let state = AuthLayerState { tokens };

        Router::new()
            .route(
                "/whoami",
                get(|Extension(caller): Extension<AuthenticatedUser>| async move {
                    caller.0.to_string()
                }),
            )
            .route_layer(middleware::from_fn_with_state(state, require_auth))
    }

    fn request(auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_header_is_401() {
        let tokens = Arc::new(TokenService::new(SECRET, Duration::hours(1)));
        let response = app(tokens).oneshot(request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn test_garbage_token_is_401() {
        let tokens = Arc::new(TokenService::new(SECRET, Duration::hours(1)));
        let response = app(tokens)
            .oneshot(request(Some("Bearer not-a-token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let tokens = Arc::new(TokenService::new(SECRET, Duration::hours(1)));
        let user_id = Uuid::new_v4();
        let token = tokens.issue(user_id).unwrap();

        let response = app(tokens)
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(bytes, user_id.to_string().as_bytes());
    }

    #[tokio::test]
    async fn test_prefixless_token_still_accepted() {
        // Header without "Bearer " is treated as the raw token
        let tokens = Arc::new(TokenService::new(SECRET, Duration::hours(1)));
        let token = tokens.issue(Uuid::new_v4()).unwrap();

        let response = app(tokens).oneshot(request(Some(&token))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_expired_token_is_401() {
        let tokens = Arc::new(TokenService::new(SECRET, Duration::seconds(-5)));
        let token = tokens.issue(Uuid::new_v4()).unwrap();

        let response = app(tokens)
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
