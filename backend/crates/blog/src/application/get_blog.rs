//! Get Blog Use Case

use std::sync::Arc;

use crate::domain::entities::JsonDocument;
use crate::domain::repository::BlogRepository;
use crate::domain::value_objects::parse_blog_id;
use crate::error::BlogResult;

/// Single blog lookup use case
pub struct GetBlogUseCase<R>
where
    R: BlogRepository,
{
    blog_repo: Arc<R>,
}

impl<R> GetBlogUseCase<R>
where
    R: BlogRepository,
{
    pub fn new(blog_repo: Arc<R>) -> Self {
        Self { blog_repo }
    }

    /// `Ok(None)` when no blog has this ID
    pub async fn execute(&self, raw_id: &str) -> BlogResult<Option<JsonDocument>> {
        let id = parse_blog_id(raw_id)?;
        self.blog_repo.find_by_id(&id).await
    }
}
