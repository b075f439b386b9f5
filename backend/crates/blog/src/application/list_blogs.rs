//! List Blogs Use Cases
//!
//! Search/category listing and the latest-blogs feed.

use std::sync::Arc;

use crate::application::config::BlogConfig;
use crate::domain::entities::JsonDocument;
use crate::domain::repository::BlogRepository;
use crate::domain::value_objects::{BlogListQuery, CategoryFilter};
use crate::error::BlogResult;

/// List blogs use case
pub struct ListBlogsUseCase<R>
where
    R: BlogRepository,
{
    blog_repo: Arc<R>,
    config: Arc<BlogConfig>,
}

impl<R> ListBlogsUseCase<R>
where
    R: BlogRepository,
{
    pub fn new(blog_repo: Arc<R>, config: Arc<BlogConfig>) -> Self {
        Self { blog_repo, config }
    }

    /// Blogs matching the optional search term and category
    ///
    /// Relevance-ordered when searching, newest first otherwise.
    pub async fn execute(
        &self,
        search: Option<&str>,
        category: Option<&str>,
    ) -> BlogResult<Vec<JsonDocument>> {
        let category = CategoryFilter::from_param(category, &self.config.all_categories);
        let query = BlogListQuery::new(search, category);

        let blogs = self.blog_repo.search(&query).await?;

        tracing::debug!(
            text_search = query.is_text_search(),
            count = blogs.len(),
            "Blogs listed"
        );

        Ok(blogs)
    }
}

/// Latest blogs use case
pub struct LatestBlogsUseCase<R>
where
    R: BlogRepository,
{
    blog_repo: Arc<R>,
    config: Arc<BlogConfig>,
}

impl<R> LatestBlogsUseCase<R>
where
    R: BlogRepository,
{
    pub fn new(blog_repo: Arc<R>, config: Arc<BlogConfig>) -> Self {
        Self { blog_repo, config }
    }

    pub async fn execute(&self) -> BlogResult<Vec<JsonDocument>> {
        self.blog_repo.latest(self.config.latest_limit).await
    }
}
