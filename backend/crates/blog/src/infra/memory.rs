//! In-Memory Repository Implementations
//!
//! Same contracts as the MongoDB backend, held in process. Text search
//! scores a blog by how often the search terms occur in its title, body
//! and tags.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{
    BlogPatch, Comment, InsertReceipt, JsonDocument, NewBlog, NewComment, UpdateReceipt,
    WishlistEntry, format_timestamp,
};
use crate::domain::repository::{BlogRepository, CommentRepository, WishlistRepository};
use crate::domain::value_objects::{BlogId, BlogListQuery, CategoryFilter, CommentId, fields};
use crate::error::BlogResult;

#[derive(Debug, Clone)]
struct StoredBlog {
    id: BlogId,
    /// Absent on blogs created by an upsert
    created_at: Option<DateTime<Utc>>,
    fields: JsonDocument,
}

impl StoredBlog {
    fn to_json(&self) -> JsonDocument {
        let mut document = self.fields.clone();
        document.insert(fields::ID.to_string(), Value::String(self.id.to_hex()));
        if let Some(created_at) = &self.created_at {
            document.insert(
                fields::CREATED_AT.to_string(),
                Value::String(format_timestamp(created_at)),
            );
        }
        document
    }

    fn in_category(&self, category: &CategoryFilter) -> bool {
        match category {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => {
                self.fields.get(fields::CATEGORY).and_then(Value::as_str) == Some(wanted.as_str())
            }
        }
    }

    /// Occurrences of any search term in the text-indexed fields
    fn text_score(&self, terms: &[String]) -> usize {
        let mut words = Vec::new();
        for field in fields::TEXT_SEARCH {
            match self.fields.get(field) {
                Some(Value::String(text)) => words.extend(tokenize(text)),
                Some(Value::Array(items)) => {
                    for item in items.iter().filter_map(Value::as_str) {
                        words.extend(tokenize(item));
                    }
                }
                _ => {}
            }
        }
        words.iter().filter(|word| terms.contains(word)).count()
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

/// Newest first; blogs without `createdAt` last
fn by_recency(a: &StoredBlog, b: &StoredBlog) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

#[derive(Debug, Default)]
struct State {
    blogs: Vec<StoredBlog>,
    comments: Vec<Comment>,
    wishlist: Vec<WishlistEntry>,
}

impl State {
    /// Blogs newest first, later insertions winning ties
    fn blogs_by_recency(&self) -> Vec<&StoredBlog> {
        let mut blogs: Vec<&StoredBlog> = self.blogs.iter().rev().collect();
        blogs.sort_by(|a, b| by_recency(a, b));
        blogs
    }
}

/// In-process repository for blogs, comments and wishlists
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlogRepository for InMemoryRepository {
    async fn search(&self, query: &BlogListQuery) -> BlogResult<Vec<JsonDocument>> {
        let state = self.state.lock().await;

        let Some(search) = &query.search else {
            return Ok(state
                .blogs_by_recency()
                .into_iter()
                .filter(|blog| blog.in_category(&query.category))
                .map(StoredBlog::to_json)
                .collect());
        };

        let terms: Vec<String> = tokenize(search).collect();
        let mut scored: Vec<(usize, &StoredBlog)> = state
            .blogs
            .iter()
            .filter(|blog| blog.in_category(&query.category))
            .map(|blog| (blog.text_score(&terms), blog))
            .filter(|(score, _)| *score > 0)
            .collect();
        scored.sort_by(|(a, _), (b, _)| b.cmp(a));

        Ok(scored
            .into_iter()
            .map(|(score, blog)| {
                let mut document = blog.to_json();
                document.insert(fields::SCORE.to_string(), Value::from(score as f64));
                document
            })
            .collect())
    }

    async fn latest(&self, limit: i64) -> BlogResult<Vec<JsonDocument>> {
        let state = self.state.lock().await;
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(state
            .blogs_by_recency()
            .into_iter()
            .take(limit)
            .map(StoredBlog::to_json)
            .collect())
    }

    async fn find_by_id(&self, id: &BlogId) -> BlogResult<Option<JsonDocument>> {
        let state = self.state.lock().await;
        Ok(state
            .blogs
            .iter()
            .find(|blog| blog.id == *id)
            .map(StoredBlog::to_json))
    }

    async fn find_by_ids(&self, ids: &[BlogId]) -> BlogResult<Vec<JsonDocument>> {
        let state = self.state.lock().await;
        Ok(state
            .blogs
            .iter()
            .filter(|blog| ids.contains(&blog.id))
            .map(StoredBlog::to_json)
            .collect())
    }

    async fn find_all(&self) -> BlogResult<Vec<JsonDocument>> {
        let state = self.state.lock().await;
        Ok(state.blogs.iter().map(StoredBlog::to_json).collect())
    }

    async fn insert(&self, blog: &NewBlog) -> BlogResult<InsertReceipt> {
        let id = BlogId::new();
        self.state.lock().await.blogs.push(StoredBlog {
            id,
            created_at: Some(blog.created_at),
            fields: blog.fields.clone(),
        });
        Ok(InsertReceipt::acknowledged(id.to_hex()))
    }

    async fn upsert(&self, id: &BlogId, patch: &BlogPatch) -> BlogResult<UpdateReceipt> {
        let mut state = self.state.lock().await;

        if let Some(blog) = state.blogs.iter_mut().find(|blog| blog.id == *id) {
            let mut modified = false;
            for (key, value) in patch.fields() {
                if blog.fields.get(key) != Some(value) {
                    blog.fields.insert(key.clone(), value.clone());
                    modified = true;
                }
            }
            return Ok(UpdateReceipt::matched(modified));
        }

        state.blogs.push(StoredBlog {
            id: *id,
            created_at: None,
            fields: patch.fields().clone(),
        });
        Ok(UpdateReceipt::upserted(id.to_hex()))
    }
}

impl CommentRepository for InMemoryRepository {
    async fn create(&self, comment: &NewComment) -> BlogResult<InsertReceipt> {
        let id = CommentId::new();
        self.state
            .lock()
            .await
            .comments
            .push(Comment::from_new(id, comment.clone()));
        Ok(InsertReceipt::acknowledged(id.to_hex()))
    }

    async fn find_by_blog(&self, blog_id: &BlogId) -> BlogResult<Vec<Comment>> {
        let state = self.state.lock().await;
        let mut comments: Vec<Comment> = state
            .comments
            .iter()
            .rev()
            .filter(|comment| comment.blog_id == *blog_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }
}

impl WishlistRepository for InMemoryRepository {
    async fn remove(&self, entry: &WishlistEntry) -> BlogResult<bool> {
        let mut state = self.state.lock().await;
        match state.wishlist.iter().position(|existing| existing == entry) {
            Some(index) => {
                state.wishlist.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn add(&self, entry: &WishlistEntry) -> BlogResult<bool> {
        let mut state = self.state.lock().await;
        if state.wishlist.contains(entry) {
            return Ok(false);
        }
        state.wishlist.push(entry.clone());
        Ok(true)
    }

    async fn find_by_user(&self, email: &str) -> BlogResult<Vec<WishlistEntry>> {
        let state = self.state.lock().await;
        Ok(state
            .wishlist
            .iter()
            .filter(|entry| entry.user_email == email)
            .cloned()
            .collect())
    }
}
