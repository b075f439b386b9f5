//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use auth::Authenticated;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use std::sync::Arc;

use crate::application::config::BlogConfig;
use crate::application::{
    AddBlogUseCase, AddCommentInput, AddCommentUseCase, FeaturedBlogsUseCase, GetBlogUseCase,
    LatestBlogsUseCase, ListBlogsUseCase, ListCommentsUseCase, ListWishlistUseCase,
    ToggleWishlistUseCase, UpdateBlogUseCase,
};
use crate::domain::entities::{Comment, InsertReceipt, JsonDocument, UpdateReceipt};
use crate::domain::repository::{BlogRepository, CommentRepository, WishlistRepository};
use crate::error::BlogResult;
use crate::presentation::dto::{
    AddCommentRequest, ListBlogsParams, ToggleWishlistRequest, ToggleWishlistResponse,
};

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogAppState<R>
where
    R: BlogRepository + CommentRepository + WishlistRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<BlogConfig>,
}

/// GET /
pub async fn welcome() -> &'static str {
    "welcome to the CascadeBlog server......."
}

// ============================================================================
// Blogs
// ============================================================================

/// GET /blogs?search=&category=
pub async fn list_blogs<R>(
    State(state): State<BlogAppState<R>>,
    Query(params): Query<ListBlogsParams>,
) -> BlogResult<Json<Vec<JsonDocument>>>
where
    R: BlogRepository + CommentRepository + WishlistRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListBlogsUseCase::new(state.repo.clone(), state.config.clone());
    let blogs = use_case
        .execute(params.search.as_deref(), params.category.as_deref())
        .await?;
    Ok(Json(blogs))
}

/// GET /latest-blogs
pub async fn latest_blogs<R>(
    State(state): State<BlogAppState<R>>,
) -> BlogResult<Json<Vec<JsonDocument>>>
where
    R: BlogRepository + CommentRepository + WishlistRepository + Clone + Send + Sync + 'static,
{
    let use_case = LatestBlogsUseCase::new(state.repo.clone(), state.config.clone());
    Ok(Json(use_case.execute().await?))
}

/// GET /single-blog/{blog_id}
///
/// Responds `null` when the blog does not exist.
pub async fn single_blog<R>(
    State(state): State<BlogAppState<R>>,
    Path(blog_id): Path<String>,
) -> BlogResult<Json<Option<JsonDocument>>>
where
    R: BlogRepository + CommentRepository + WishlistRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetBlogUseCase::new(state.repo.clone());
    Ok(Json(use_case.execute(&blog_id).await?))
}

/// POST /add-blog (authenticated)
pub async fn add_blog<R>(
    State(state): State<BlogAppState<R>>,
    Authenticated(principal): Authenticated,
    Json(body): Json<JsonDocument>,
) -> BlogResult<(StatusCode, Json<InsertReceipt>)>
where
    R: BlogRepository + CommentRepository + WishlistRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddBlogUseCase::new(state.repo.clone());
    let receipt = use_case.execute(body, principal.email.as_str()).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// PUT /update-blog/{id} (authenticated)
pub async fn update_blog<R>(
    State(state): State<BlogAppState<R>>,
    Authenticated(principal): Authenticated,
    Path(id): Path<String>,
    Json(body): Json<JsonDocument>,
) -> BlogResult<Json<UpdateReceipt>>
where
    R: BlogRepository + CommentRepository + WishlistRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateBlogUseCase::new(state.repo.clone());
    let receipt = use_case
        .execute(&id, body, principal.email.as_str())
        .await?;
    Ok(Json(receipt))
}

/// GET /featured-blogs
pub async fn featured_blogs<R>(
    State(state): State<BlogAppState<R>>,
) -> BlogResult<Json<Vec<JsonDocument>>>
where
    R: BlogRepository + CommentRepository + WishlistRepository + Clone + Send + Sync + 'static,
{
    let use_case = FeaturedBlogsUseCase::new(state.repo.clone(), state.config.clone());
    Ok(Json(use_case.execute().await?))
}

// ============================================================================
// Comments
// ============================================================================

/// POST /comments
pub async fn add_comment<R>(
    State(state): State<BlogAppState<R>>,
    Json(req): Json<AddCommentRequest>,
) -> BlogResult<(StatusCode, Json<InsertReceipt>)>
where
    R: BlogRepository + CommentRepository + WishlistRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddCommentUseCase::new(state.repo.clone());

    let input = AddCommentInput {
        blog_id: req.blog_id,
        user_name: req.user_name,
        user_photo: req.user_photo,
        user_email: req.user_email,
        comment: req.comment,
    };

    let receipt = use_case.execute(input).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// GET /comments/{blog_id}
pub async fn list_comments<R>(
    State(state): State<BlogAppState<R>>,
    Path(blog_id): Path<String>,
) -> BlogResult<Json<Vec<Comment>>>
where
    R: BlogRepository + CommentRepository + WishlistRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCommentsUseCase::new(state.repo.clone());
    Ok(Json(use_case.execute(&blog_id).await?))
}

// ============================================================================
// Wishlist
// ============================================================================

/// POST /wishlist
pub async fn toggle_wishlist<R>(
    State(state): State<BlogAppState<R>>,
    Json(req): Json<ToggleWishlistRequest>,
) -> BlogResult<Json<ToggleWishlistResponse>>
where
    R: BlogRepository + CommentRepository + WishlistRepository + Clone + Send + Sync + 'static,
{
    let use_case = ToggleWishlistUseCase::new(state.repo.clone());
    let wished = use_case.execute(&req.blog_id, &req.user_email).await?;
    Ok(Json(ToggleWishlistResponse { wished }))
}

/// GET /wishlist/{user_email} (authenticated, owner only)
pub async fn list_wishlist<R>(
    State(state): State<BlogAppState<R>>,
    Authenticated(principal): Authenticated,
    Path(user_email): Path<String>,
) -> BlogResult<Json<Vec<JsonDocument>>>
where
    R: BlogRepository + CommentRepository + WishlistRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListWishlistUseCase::new(state.repo.clone(), state.repo.clone());
    Ok(Json(use_case.execute(&principal, &user_email).await?))
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::new(ErrorKind::NotFound, "Route not found")
}
