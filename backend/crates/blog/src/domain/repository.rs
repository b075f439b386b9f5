//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the
//! infrastructure layer.

use crate::domain::entities::{
    BlogPatch, Comment, InsertReceipt, JsonDocument, NewBlog, NewComment, UpdateReceipt,
    WishlistEntry,
};
use crate::domain::value_objects::{BlogId, BlogListQuery};
use crate::error::BlogResult;

/// Blog repository trait
#[trait_variant::make(BlogRepository: Send)]
pub trait LocalBlogRepository {
    /// Blogs matching a search/category query, relevance- or recency-ordered
    async fn search(&self, query: &BlogListQuery) -> BlogResult<Vec<JsonDocument>>;

    /// Newest blogs first, at most `limit`
    async fn latest(&self, limit: i64) -> BlogResult<Vec<JsonDocument>>;

    /// Find blog by ID
    async fn find_by_id(&self, id: &BlogId) -> BlogResult<Option<JsonDocument>>;

    /// Blogs whose ID is in `ids`; unknown IDs are skipped
    async fn find_by_ids(&self, ids: &[BlogId]) -> BlogResult<Vec<JsonDocument>>;

    /// Every blog, unordered
    async fn find_all(&self) -> BlogResult<Vec<JsonDocument>>;

    /// Insert a new blog
    async fn insert(&self, blog: &NewBlog) -> BlogResult<InsertReceipt>;

    /// Set the patch fields on a blog, creating it if absent
    async fn upsert(&self, id: &BlogId, patch: &BlogPatch) -> BlogResult<UpdateReceipt>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Insert a new comment
    async fn create(&self, comment: &NewComment) -> BlogResult<InsertReceipt>;

    /// Comments on a blog, newest first
    async fn find_by_blog(&self, blog_id: &BlogId) -> BlogResult<Vec<Comment>>;
}

/// Wishlist repository trait
#[trait_variant::make(WishlistRepository: Send)]
pub trait LocalWishlistRepository {
    /// Delete the entry; returns true if it existed
    async fn remove(&self, entry: &WishlistEntry) -> BlogResult<bool>;

    /// Insert the entry; returns false if it already existed
    async fn add(&self, entry: &WishlistEntry) -> BlogResult<bool>;

    /// Every entry owned by the user
    async fn find_by_user(&self, email: &str) -> BlogResult<Vec<WishlistEntry>>;
}
