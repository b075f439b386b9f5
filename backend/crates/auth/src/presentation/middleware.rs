//! Auth Middleware
//!
//! Middleware for requiring a verified bearer token on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::AuthenticateUseCase;
use crate::domain::verifier::IdentityVerifier;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<V>
where
    V: IdentityVerifier + Clone + Send + Sync + 'static,
{
    pub verifier: Arc<V>,
}

impl<V> AuthMiddlewareState<V>
where
    V: IdentityVerifier + Clone + Send + Sync + 'static,
{
    pub fn new(verifier: Arc<V>) -> Self {
        Self { verifier }
    }
}

/// Middleware that requires a valid bearer token
///
/// On success the verified [`Principal`](crate::Principal) is stored in
/// the request extensions for the [`Authenticated`](crate::Authenticated)
/// extractor.
pub async fn require_bearer_auth<V>(
    State(state): State<AuthMiddlewareState<V>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    V: IdentityVerifier + Clone + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(state.verifier.clone());

    let principal = use_case.execute(req.headers()).await?;

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Authenticated;
    use crate::domain::principal::Principal;
    use crate::error::AuthResult;
    use axum::Router;
    use axum::http::{StatusCode, header};
    use axum::routing::get;
    use kernel::email::Email;
    use tower::ServiceExt;

    /// Accepts exactly one token
    #[derive(Clone)]
    struct StaticVerifier;

    impl IdentityVerifier for StaticVerifier {
        async fn verify(&self, token: &str) -> AuthResult<Principal> {
            if token == "good-token" {
                Ok(Principal::new(
                    "uid-1",
                    Email::new("reader@example.com").unwrap(),
                ))
            } else {
                Err(AuthError::InvalidToken("unknown token".into()))
            }
        }
    }

    async fn whoami(Authenticated(principal): Authenticated) -> String {
        principal.email.to_string()
    }

    fn app() -> Router {
        let state = AuthMiddlewareState::new(Arc::new(StaticVerifier));
        Router::new()
            .route("/me", get(whoami))
            .route_layer(axum::middleware::from_fn_with_state(
                state,
                require_bearer_auth::<StaticVerifier>,
            ))
    }

    async fn status_for(authorization: Option<&'static str>) -> StatusCode {
        let mut builder = Request::builder().uri("/me");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let response = app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_valid_token_passes() {
        assert_eq!(status_for(Some("Bearer good-token")).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        assert_eq!(status_for(None).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_scheme_is_unauthorized() {
        assert_eq!(
            status_for(Some("Token good-token")).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn test_rejected_token_is_unauthorized() {
        assert_eq!(
            status_for(Some("Bearer bad-token")).await,
            StatusCode::UNAUTHORIZED
        );
    }
}
