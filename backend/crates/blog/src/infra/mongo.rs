//! MongoDB Repository Implementations

use bson::oid::ObjectId;
use bson::{Bson, Document, doc};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use kernel::error::app_error::AppResult;
use kernel::error::conversions::is_duplicate_key;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};

use crate::application::config::StorageConfig;
use crate::domain::entities::{
    BlogPatch, Comment, InsertReceipt, JsonDocument, NewBlog, NewComment, UpdateReceipt,
    WishlistEntry,
};
use crate::domain::repository::{BlogRepository, CommentRepository, WishlistRepository};
use crate::domain::value_objects::{BlogId, BlogListQuery, CommentId};
use crate::error::BlogResult;
use crate::infra::convert::{document_to_json, json_to_document, receipt_id};
use crate::infra::query::{self, FindSpec};

/// MongoDB-backed repository for blogs, comments and wishlists
#[derive(Clone)]
pub struct MongoRepository {
    blogs: Collection<Document>,
    comments: Collection<CommentRecord>,
    wishlists: Collection<WishlistRecord>,
}

impl MongoRepository {
    pub fn new(database: &Database, storage: &StorageConfig) -> Self {
        Self {
            blogs: database.collection(&storage.blogs),
            comments: database.collection(&storage.comments),
            wishlists: database.collection(&storage.wishlists),
        }
    }

    /// Connect and ping the configured database
    pub async fn connect(uri: &str, storage: &StorageConfig) -> AppResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(&storage.database);
        database.run_command(doc! { "ping": 1 }).await?;

        tracing::info!(database = %storage.database, "Connected to MongoDB");

        Ok(Self::new(&database, storage))
    }

    /// Create the indexes search, comment listing and wishlist toggling rely on
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        self.blogs
            .create_index(
                IndexModel::builder()
                    .keys(query::blog_text_index_keys())
                    .build(),
            )
            .await?;

        self.comments
            .create_index(
                IndexModel::builder()
                    .keys(query::comment_blog_index_keys())
                    .build(),
            )
            .await?;

        self.wishlists
            .create_index(
                IndexModel::builder()
                    .keys(query::wishlist_pair_index_keys())
                    .options(IndexOptions::builder().unique(true).build())
                    .build(),
            )
            .await?;

        tracing::info!("MongoDB indexes ensured");
        Ok(())
    }

    async fn find_blogs(&self, spec: FindSpec) -> BlogResult<Vec<JsonDocument>> {
        let mut find = self.blogs.find(spec.filter);
        if let Some(sort) = spec.sort {
            find = find.sort(sort);
        }
        if let Some(projection) = spec.projection {
            find = find.projection(projection);
        }
        if let Some(limit) = spec.limit {
            find = find.limit(limit);
        }

        let documents: Vec<Document> = find.await?.try_collect().await?;
        Ok(documents.into_iter().map(document_to_json).collect())
    }
}

impl BlogRepository for MongoRepository {
    async fn search(&self, query: &BlogListQuery) -> BlogResult<Vec<JsonDocument>> {
        self.find_blogs(FindSpec::blog_list(query)).await
    }

    async fn latest(&self, limit: i64) -> BlogResult<Vec<JsonDocument>> {
        self.find_blogs(FindSpec::latest_blogs(limit)).await
    }

    async fn find_by_id(&self, id: &BlogId) -> BlogResult<Option<JsonDocument>> {
        let document = self.blogs.find_one(query::by_id(id)).await?;
        Ok(document.map(document_to_json))
    }

    async fn find_by_ids(&self, ids: &[BlogId]) -> BlogResult<Vec<JsonDocument>> {
        self.find_blogs(FindSpec::blogs_by_ids(ids)).await
    }

    async fn find_all(&self) -> BlogResult<Vec<JsonDocument>> {
        self.find_blogs(FindSpec::all_blogs()).await
    }

    async fn insert(&self, blog: &NewBlog) -> BlogResult<InsertReceipt> {
        let mut document = json_to_document(&blog.fields)?;
        document.insert("createdAt", bson::DateTime::from_chrono(blog.created_at));

        let result = self.blogs.insert_one(document).await?;
        Ok(InsertReceipt::acknowledged(receipt_id(&result.inserted_id)?))
    }

    async fn upsert(&self, id: &BlogId, patch: &BlogPatch) -> BlogResult<UpdateReceipt> {
        let result = self
            .blogs
            .update_one(query::by_id(id), query::set_fields(patch)?)
            .upsert(true)
            .await?;

        let upserted_id = result.upserted_id.as_ref().map(receipt_id).transpose()?;

        Ok(UpdateReceipt {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(upserted_id.is_some()),
            upserted_id,
        })
    }
}

/// Stored comment shape
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentRecord {
    #[serde(rename = "_id")]
    id: ObjectId,
    blog_id: ObjectId,
    user_name: String,
    #[serde(default)]
    user_photo: Option<String>,
    user_email: String,
    comment: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
}

impl CommentRecord {
    fn from_new(id: ObjectId, comment: &NewComment) -> Self {
        Self {
            id,
            blog_id: comment.blog_id.into_object_id(),
            user_name: comment.user_name.clone(),
            user_photo: comment.user_photo.clone(),
            user_email: comment.user_email.clone(),
            comment: comment.comment.clone(),
            created_at: comment.created_at,
        }
    }

    fn into_comment(self) -> Comment {
        Comment {
            id: CommentId::from_object_id(self.id),
            blog_id: BlogId::from_object_id(self.blog_id),
            user_name: self.user_name,
            user_photo: self.user_photo,
            user_email: self.user_email,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}

/// Decode stored comments, dropping rows that do not fit `CommentRecord`
fn read_comments(documents: Vec<Document>) -> Vec<Comment> {
    let total = documents.len();
    let comments: Vec<Comment> = documents
        .into_iter()
        .filter_map(|document| bson::from_document::<CommentRecord>(document).ok())
        .map(CommentRecord::into_comment)
        .collect();

    if comments.len() < total {
        tracing::warn!(
            skipped = total - comments.len(),
            "Comments with unreadable fields skipped"
        );
    }

    comments
}

impl CommentRepository for MongoRepository {
    async fn create(&self, comment: &NewComment) -> BlogResult<InsertReceipt> {
        let record = CommentRecord::from_new(ObjectId::new(), comment);
        let result = self.comments.insert_one(&record).await?;
        Ok(InsertReceipt::acknowledged(receipt_id(&result.inserted_id)?))
    }

    async fn find_by_blog(&self, blog_id: &BlogId) -> BlogResult<Vec<Comment>> {
        let spec = FindSpec::comments_for_blog(blog_id);
        let raw = self.comments.clone_with_type::<Document>();
        let mut find = raw.find(spec.filter);
        if let Some(sort) = spec.sort {
            find = find.sort(sort);
        }

        let documents: Vec<Document> = find.await?.try_collect().await?;
        Ok(read_comments(documents))
    }
}

/// Stored wishlist shape
///
/// `blogId` is written as an ObjectId; older rows hold a hex string.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WishlistRecord {
    blog_id: Bson,
    user_email: String,
}

impl WishlistRecord {
    fn from_entry(entry: &WishlistEntry) -> Self {
        Self {
            blog_id: Bson::ObjectId(entry.blog_id.into_object_id()),
            user_email: entry.user_email.clone(),
        }
    }

    fn into_entry(self) -> Option<WishlistEntry> {
        let blog_id = match &self.blog_id {
            Bson::ObjectId(oid) => BlogId::from_object_id(*oid),
            Bson::String(hex) => BlogId::parse_str(hex).ok()?,
            _ => return None,
        };

        Some(WishlistEntry {
            blog_id,
            user_email: self.user_email,
        })
    }
}

impl WishlistRepository for MongoRepository {
    async fn remove(&self, entry: &WishlistEntry) -> BlogResult<bool> {
        let result = self.wishlists.delete_one(query::wishlist_pair(entry)).await?;
        Ok(result.deleted_count > 0)
    }

    async fn add(&self, entry: &WishlistEntry) -> BlogResult<bool> {
        match self
            .wishlists
            .insert_one(WishlistRecord::from_entry(entry))
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if is_duplicate_key(&e) => {
                tracing::debug!(blog_id = %entry.blog_id, "Wishlist entry already present");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_user(&self, email: &str) -> BlogResult<Vec<WishlistEntry>> {
        let spec = FindSpec::wishlist_for_user(email);
        let records: Vec<WishlistRecord> = self.wishlists.find(spec.filter).await?.try_collect().await?;

        let total = records.len();
        let entries: Vec<WishlistEntry> = records
            .into_iter()
            .filter_map(WishlistRecord::into_entry)
            .collect();

        if entries.len() < total {
            tracing::warn!(
                skipped = total - entries.len(),
                "Wishlist entries with unreadable blog IDs skipped"
            );
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "65a1f0c2b4d3e2a1f0c2b4d3";

    #[test]
    fn test_wishlist_record_reads_both_id_forms() {
        let oid = ObjectId::parse_str(ID).unwrap();

        let modern = WishlistRecord {
            blog_id: Bson::ObjectId(oid),
            user_email: "reader@example.com".into(),
        };
        let legacy = WishlistRecord {
            blog_id: Bson::String(ID.into()),
            user_email: "reader@example.com".into(),
        };
        let broken = WishlistRecord {
            blog_id: Bson::String("nope".into()),
            user_email: "reader@example.com".into(),
        };

        assert_eq!(modern.into_entry().unwrap().blog_id.to_hex(), ID);
        assert_eq!(legacy.into_entry().unwrap().blog_id.to_hex(), ID);
        assert!(broken.into_entry().is_none());
    }

    #[test]
    fn test_comment_record_bson_shape() {
        let new = NewComment {
            blog_id: BlogId::parse_str(ID).unwrap(),
            user_name: "Ada".into(),
            user_photo: None,
            user_email: "ada@example.com".into(),
            comment: "Hi".into(),
            created_at: Utc::now(),
        };
        let record = CommentRecord::from_new(ObjectId::new(), &new);
        let document = bson::to_document(&record).unwrap();

        assert!(matches!(document.get("blogId"), Some(Bson::ObjectId(_))));
        assert!(matches!(document.get("createdAt"), Some(Bson::DateTime(_))));
        assert!(document.contains_key("_id"));
        assert_eq!(document.get_str("userName").unwrap(), "Ada");

        let comment: CommentRecord = bson::from_document(document).unwrap();
        assert_eq!(comment.into_comment().blog_id.to_hex(), ID);
    }

    #[test]
    fn test_read_comments_skips_malformed_rows() {
        let good = doc! {
            "_id": ObjectId::new(),
            "blogId": ObjectId::parse_str(ID).unwrap(),
            "userName": "Ada",
            "userEmail": "ada@example.com",
            "comment": "Hi",
            "createdAt": bson::DateTime::now(),
        };
        let missing_email = doc! {
            "_id": ObjectId::new(),
            "blogId": ObjectId::parse_str(ID).unwrap(),
            "userName": "Bob",
            "comment": "Hey",
            "createdAt": bson::DateTime::now(),
        };
        let string_blog_id = doc! {
            "_id": ObjectId::new(),
            "blogId": ID,
            "userName": "Cy",
            "userEmail": "cy@example.com",
            "comment": "Yo",
            "createdAt": bson::DateTime::now(),
        };

        let comments = read_comments(vec![good, missing_email, string_blog_id]);
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].user_name, "Ada");
    }
}
