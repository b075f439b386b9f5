//! Featured Blogs Use Case
//!
//! Ranks the whole collection in process by body word count.

use std::sync::Arc;

use crate::application::config::BlogConfig;
use crate::domain::entities::JsonDocument;
use crate::domain::repository::BlogRepository;
use crate::domain::services::rank_by_word_count;
use crate::error::BlogResult;

/// Featured blogs use case
pub struct FeaturedBlogsUseCase<R>
where
    R: BlogRepository,
{
    blog_repo: Arc<R>,
    config: Arc<BlogConfig>,
}

impl<R> FeaturedBlogsUseCase<R>
where
    R: BlogRepository,
{
    pub fn new(blog_repo: Arc<R>, config: Arc<BlogConfig>) -> Self {
        Self { blog_repo, config }
    }

    pub async fn execute(&self) -> BlogResult<Vec<JsonDocument>> {
        let blogs = self.blog_repo.find_all().await?;
        Ok(rank_by_word_count(blogs, self.config.featured_limit))
    }
}
