//! Comment Use Cases

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::{Comment, InsertReceipt, NewComment};
use crate::domain::repository::CommentRepository;
use crate::domain::value_objects::parse_blog_id;
use crate::error::BlogResult;

/// Raw comment fields as received
#[derive(Debug, Clone)]
pub struct AddCommentInput {
    pub blog_id: String,
    pub user_name: String,
    pub user_photo: Option<String>,
    pub user_email: String,
    pub comment: String,
}

/// Add comment use case
pub struct AddCommentUseCase<C>
where
    C: CommentRepository,
{
    comment_repo: Arc<C>,
}

impl<C> AddCommentUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(comment_repo: Arc<C>) -> Self {
        Self { comment_repo }
    }

    /// Insert a comment; the referenced blog is not checked for existence
    pub async fn execute(&self, input: AddCommentInput) -> BlogResult<InsertReceipt> {
        let blog_id = parse_blog_id(&input.blog_id)?;

        let comment = NewComment {
            blog_id,
            user_name: input.user_name,
            user_photo: input.user_photo,
            user_email: input.user_email,
            comment: input.comment,
            created_at: Utc::now(),
        };

        let receipt = self.comment_repo.create(&comment).await?;

        tracing::info!(
            blog_id = %blog_id,
            comment_id = %receipt.inserted_id,
            "Comment added"
        );

        Ok(receipt)
    }
}

/// List comments use case
pub struct ListCommentsUseCase<C>
where
    C: CommentRepository,
{
    comment_repo: Arc<C>,
}

impl<C> ListCommentsUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(comment_repo: Arc<C>) -> Self {
        Self { comment_repo }
    }

    /// Comments on a blog, newest first
    pub async fn execute(&self, raw_blog_id: &str) -> BlogResult<Vec<Comment>> {
        let blog_id = parse_blog_id(raw_blog_id)?;
        self.comment_repo.find_by_blog(&blog_id).await
    }
}
