//! Update Blog Use Case

use std::sync::Arc;

use crate::domain::entities::{BlogPatch, JsonDocument, UpdateReceipt};
use crate::domain::repository::BlogRepository;
use crate::domain::value_objects::parse_blog_id;
use crate::error::{BlogError, BlogResult};

/// Update (or upsert) blog use case
pub struct UpdateBlogUseCase<R>
where
    R: BlogRepository,
{
    blog_repo: Arc<R>,
}

impl<R> UpdateBlogUseCase<R>
where
    R: BlogRepository,
{
    pub fn new(blog_repo: Arc<R>) -> Self {
        Self { blog_repo }
    }

    /// Set the supplied fields on the blog, creating it when absent
    ///
    /// Fields missing from the body are left untouched. `_id` and
    /// `createdAt` are never writable here.
    pub async fn execute(
        &self,
        raw_id: &str,
        fields: JsonDocument,
        author: &str,
    ) -> BlogResult<UpdateReceipt> {
        let id = parse_blog_id(raw_id)?;
        let patch = BlogPatch::new(fields).ok_or_else(|| {
            BlogError::InvalidInput("Update body must contain at least one field".to_string())
        })?;

        let receipt = self.blog_repo.upsert(&id, &patch).await?;

        tracing::info!(
            blog_id = %id,
            author = %author,
            upserted = receipt.upserted_count > 0,
            "Blog updated"
        );

        Ok(receipt)
    }
}
