//! Wishlist Use Cases
//!
//! The toggle is a delete followed, on a miss, by an insert. A unique
//! index on the pair keeps concurrent toggles from duplicating entries.

use auth::Principal;
use std::sync::Arc;

use crate::domain::entities::{JsonDocument, WishlistEntry};
use crate::domain::repository::{BlogRepository, WishlistRepository};
use crate::domain::value_objects::{BlogId, parse_blog_id};
use crate::error::{BlogError, BlogResult};

/// Toggle wishlist use case
pub struct ToggleWishlistUseCase<W>
where
    W: WishlistRepository,
{
    wishlist_repo: Arc<W>,
}

impl<W> ToggleWishlistUseCase<W>
where
    W: WishlistRepository,
{
    pub fn new(wishlist_repo: Arc<W>) -> Self {
        Self { wishlist_repo }
    }

    /// Flip the (blog, user) entry; returns whether it is now wished
    ///
    /// `user_email` is an opaque key, stored and matched as sent.
    pub async fn execute(&self, raw_blog_id: &str, user_email: &str) -> BlogResult<bool> {
        let entry = WishlistEntry {
            blog_id: parse_blog_id(raw_blog_id)?,
            user_email: user_email.to_string(),
        };

        if self.wishlist_repo.remove(&entry).await? {
            tracing::info!(blog_id = %entry.blog_id, "Wishlist entry removed");
            return Ok(false);
        }

        // A concurrent toggle may have inserted it first; still wished
        let inserted = self.wishlist_repo.add(&entry).await?;
        tracing::info!(blog_id = %entry.blog_id, inserted, "Wishlist entry added");

        Ok(true)
    }
}

/// List wishlist use case
pub struct ListWishlistUseCase<W, B>
where
    W: WishlistRepository,
    B: BlogRepository,
{
    wishlist_repo: Arc<W>,
    blog_repo: Arc<B>,
}

impl<W, B> ListWishlistUseCase<W, B>
where
    W: WishlistRepository,
    B: BlogRepository,
{
    pub fn new(wishlist_repo: Arc<W>, blog_repo: Arc<B>) -> Self {
        Self {
            wishlist_repo,
            blog_repo,
        }
    }

    /// Blogs on the requested user's wishlist
    ///
    /// Only the owner may read a wishlist. Entries pointing at deleted
    /// blogs are skipped.
    pub async fn execute(
        &self,
        principal: &Principal,
        requested_email: &str,
    ) -> BlogResult<Vec<JsonDocument>> {
        if !principal.owns_email(requested_email) {
            return Err(BlogError::Forbidden);
        }

        let entries = self.wishlist_repo.find_by_user(requested_email).await?;
        let ids: Vec<BlogId> = entries.into_iter().map(|entry| entry.blog_id).collect();

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.blog_repo.find_by_ids(&ids).await
    }
}
