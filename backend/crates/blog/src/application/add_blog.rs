//! Add Blog Use Case

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::{InsertReceipt, JsonDocument, NewBlog};
use crate::domain::repository::BlogRepository;
use crate::error::BlogResult;

/// Add blog use case
pub struct AddBlogUseCase<R>
where
    R: BlogRepository,
{
    blog_repo: Arc<R>,
}

impl<R> AddBlogUseCase<R>
where
    R: BlogRepository,
{
    pub fn new(blog_repo: Arc<R>) -> Self {
        Self { blog_repo }
    }

    /// Insert the blog with a server-side `createdAt`
    pub async fn execute(&self, fields: JsonDocument, author: &str) -> BlogResult<InsertReceipt> {
        let blog = NewBlog::new(fields, Utc::now());
        let receipt = self.blog_repo.insert(&blog).await?;

        tracing::info!(
            blog_id = %receipt.inserted_id,
            author = %author,
            "Blog created"
        );

        Ok(receipt)
    }
}
