//! Blog Router
//!
//! Protected routes live on their own sub-router behind
//! `require_bearer_auth`; everything else is public.

use auth::{AuthMiddlewareState, IdentityVerifier, JwtIdentityVerifier, require_bearer_auth};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::BlogConfig;
use crate::domain::repository::{BlogRepository, CommentRepository, WishlistRepository};
use crate::infra::mongo::MongoRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Create the blog router with the MongoDB repository and JWT verification
pub fn blog_router(
    repo: MongoRepository,
    verifier: JwtIdentityVerifier,
    config: BlogConfig,
) -> Router {
    blog_router_generic(repo, verifier, config)
}

/// Create a generic blog router for any repository and verifier
pub fn blog_router_generic<R, V>(repo: R, verifier: V, config: BlogConfig) -> Router
where
    R: BlogRepository + CommentRepository + WishlistRepository + Clone + Send + Sync + 'static,
    V: IdentityVerifier + Clone + Send + Sync + 'static,
{
    let state = BlogAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };
    let auth_state = AuthMiddlewareState::new(Arc::new(verifier));

    let public = Router::new()
        .route("/", get(handlers::welcome))
        .route("/blogs", get(handlers::list_blogs::<R>))
        .route("/latest-blogs", get(handlers::latest_blogs::<R>))
        .route("/single-blog/{blog_id}", get(handlers::single_blog::<R>))
        .route("/featured-blogs", get(handlers::featured_blogs::<R>))
        .route("/comments", post(handlers::add_comment::<R>))
        .route("/comments/{blog_id}", get(handlers::list_comments::<R>))
        .route("/wishlist", post(handlers::toggle_wishlist::<R>));

    let protected = Router::new()
        .route("/add-blog", post(handlers::add_blog::<R>))
        .route("/update-blog/{id}", put(handlers::update_blog::<R>))
        .route("/wishlist/{user_email}", get(handlers::list_wishlist::<R>))
        .route_layer(middleware::from_fn_with_state(
            auth_state,
            require_bearer_auth::<V>,
        ));

    public
        .merge(protected)
        .fallback(handlers::not_found)
        .with_state(state)
}
