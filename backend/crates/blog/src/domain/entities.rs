//! Domain Entities
//!
//! Blog posts are open documents: apart from a few server-owned fields
//! (`_id`, `createdAt`) their shape is whatever the author sends.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::domain::value_objects::{BlogId, CommentId, fields};

/// A JSON object as stored and returned
pub type JsonDocument = serde_json::Map<String, Value>;

/// Render a timestamp the way every API response carries it
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(timestamp))
}

/// Remove fields only the server may set
fn strip_server_fields(mut document: JsonDocument) -> JsonDocument {
    document.remove(fields::ID);
    document.remove(fields::CREATED_AT);
    document
}

/// Blog about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlog {
    pub fields: JsonDocument,
    pub created_at: DateTime<Utc>,
}

impl NewBlog {
    /// Client fields plus a server-side creation time
    ///
    /// Any client-supplied `_id` or `createdAt` is discarded.
    pub fn new(fields: JsonDocument, created_at: DateTime<Utc>) -> Self {
        Self {
            fields: strip_server_fields(fields),
            created_at,
        }
    }
}

/// Partial update for an existing (or upserted) blog
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPatch {
    fields: JsonDocument,
}

impl BlogPatch {
    /// `None` when nothing settable remains after stripping server fields
    pub fn new(fields: JsonDocument) -> Option<Self> {
        let fields = strip_server_fields(fields);
        if fields.is_empty() {
            None
        } else {
            Some(Self { fields })
        }
    }

    pub fn fields(&self) -> &JsonDocument {
        &self.fields
    }
}

/// Comment about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub blog_id: BlogId,
    pub user_name: String,
    pub user_photo: Option<String>,
    pub user_email: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Stored comment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: CommentId,
    pub blog_id: BlogId,
    pub user_name: String,
    pub user_photo: Option<String>,
    pub user_email: String,
    pub comment: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_new(id: CommentId, new: NewComment) -> Self {
        Self {
            id,
            blog_id: new.blog_id,
            user_name: new.user_name,
            user_photo: new.user_photo,
            user_email: new.user_email,
            comment: new.comment,
            created_at: new.created_at,
        }
    }
}

/// (blog, user) pair; existence is the whole signal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WishlistEntry {
    pub blog_id: BlogId,
    pub user_email: String,
}

/// Acknowledgment of an insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertReceipt {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl InsertReceipt {
    pub fn acknowledged(inserted_id: impl Into<String>) -> Self {
        Self {
            acknowledged: true,
            inserted_id: inserted_id.into(),
        }
    }
}

/// Acknowledgment of an update/upsert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReceipt {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<String>,
}

impl UpdateReceipt {
    /// Receipt for an update that matched an existing document
    pub fn matched(modified: bool) -> Self {
        Self {
            acknowledged: true,
            matched_count: 1,
            modified_count: u64::from(modified),
            upserted_count: 0,
            upserted_id: None,
        }
    }

    /// Receipt for an update that created the document
    pub fn upserted(id: impl Into<String>) -> Self {
        Self {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_count: 1,
            upserted_id: Some(id.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonDocument {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_new_blog_discards_server_fields() {
        let now = Utc::now();
        let blog = NewBlog::new(
            object(json!({
                "_id": "abc",
                "title": "A",
                "createdAt": "1999-01-01T00:00:00Z"
            })),
            now,
        );
        assert_eq!(blog.fields, object(json!({ "title": "A" })));
        assert_eq!(blog.created_at, now);
    }

    #[test]
    fn test_patch_requires_settable_fields() {
        assert!(BlogPatch::new(JsonDocument::new()).is_none());
        assert!(BlogPatch::new(object(json!({ "createdAt": "x", "_id": "y" }))).is_none());

        let patch = BlogPatch::new(object(json!({ "title": "B", "createdAt": "x" }))).unwrap();
        assert_eq!(patch.fields(), &object(json!({ "title": "B" })));
    }

    #[test]
    fn test_comment_serialization() {
        let created_at = DateTime::parse_from_rfc3339("2024-05-01T10:00:00.250Z")
            .unwrap()
            .with_timezone(&Utc);
        let comment = Comment {
            id: CommentId::parse_str("65a1f0c2b4d3e2a1f0c2b4d4").unwrap(),
            blog_id: BlogId::parse_str("65a1f0c2b4d3e2a1f0c2b4d3").unwrap(),
            user_name: "Ada".to_string(),
            user_photo: None,
            user_email: "ada@example.com".to_string(),
            comment: "Nice post".to_string(),
            created_at,
        };

        let value = serde_json::to_value(&comment).unwrap();
        assert_eq!(value["_id"], "65a1f0c2b4d3e2a1f0c2b4d4");
        assert_eq!(value["blogId"], "65a1f0c2b4d3e2a1f0c2b4d3");
        assert_eq!(value["userName"], "Ada");
        assert_eq!(value["userPhoto"], Value::Null);
        assert_eq!(value["createdAt"], "2024-05-01T10:00:00.250Z");
    }

    #[test]
    fn test_update_receipt_shapes() {
        let value = serde_json::to_value(UpdateReceipt::upserted("65a1f0c2b4d3e2a1f0c2b4d3")).unwrap();
        assert_eq!(
            value,
            json!({
                "acknowledged": true,
                "matchedCount": 0,
                "modifiedCount": 0,
                "upsertedCount": 1,
                "upsertedId": "65a1f0c2b4d3e2a1f0c2b4d3"
            })
        );

        let matched = UpdateReceipt::matched(false);
        assert_eq!(matched.matched_count, 1);
        assert_eq!(matched.modified_count, 0);
        assert!(matched.upserted_id.is_none());
    }
}
