//! Query Construction
//!
//! Builds the filter / sort / projection / update documents for every
//! storage call. Pure functions, no I/O.

use bson::{Bson, Document, doc};

use crate::domain::entities::{BlogPatch, WishlistEntry};
use crate::domain::value_objects::{BlogId, BlogListQuery, CategoryFilter};
use crate::error::BlogResult;
use crate::infra::convert::json_to_document;

/// Everything a `find` needs besides the collection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FindSpec {
    pub filter: Document,
    pub sort: Option<Document>,
    pub projection: Option<Document>,
    pub limit: Option<i64>,
}

fn newest_first() -> Document {
    doc! { "createdAt": -1 }
}

fn text_score() -> Document {
    doc! { "score": { "$meta": "textScore" } }
}

impl FindSpec {
    /// Search/category listing
    ///
    /// A search term switches to `$text` matching ordered by relevance;
    /// otherwise blogs come newest first. The category filter applies in
    /// both cases.
    pub fn blog_list(query: &BlogListQuery) -> Self {
        let mut filter = Document::new();
        let (sort, projection) = match &query.search {
            Some(term) => {
                filter.insert("$text", doc! { "$search": term.as_str() });
                (text_score(), Some(text_score()))
            }
            None => (newest_first(), None),
        };

        if let CategoryFilter::Only(category) = &query.category {
            filter.insert("category", category.as_str());
        }

        Self {
            filter,
            sort: Some(sort),
            projection,
            limit: None,
        }
    }

    pub fn latest_blogs(limit: i64) -> Self {
        Self {
            sort: Some(newest_first()),
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn all_blogs() -> Self {
        Self::default()
    }

    pub fn blogs_by_ids(ids: &[BlogId]) -> Self {
        let ids: Vec<Bson> = ids
            .iter()
            .map(|id| Bson::ObjectId(id.into_object_id()))
            .collect();
        Self {
            filter: doc! { "_id": { "$in": ids } },
            ..Self::default()
        }
    }

    pub fn comments_for_blog(blog_id: &BlogId) -> Self {
        Self {
            filter: doc! { "blogId": blog_id.into_object_id() },
            sort: Some(newest_first()),
            ..Self::default()
        }
    }

    pub fn wishlist_for_user(email: &str) -> Self {
        Self {
            filter: doc! { "userEmail": email },
            ..Self::default()
        }
    }
}

/// Filter matching a single document by `_id`
pub fn by_id(id: &BlogId) -> Document {
    doc! { "_id": id.into_object_id() }
}

/// `$set` update for a blog patch
pub fn set_fields(patch: &BlogPatch) -> BlogResult<Document> {
    Ok(doc! { "$set": json_to_document(patch.fields())? })
}

/// Filter matching a wishlist pair
///
/// Older entries stored `blogId` as a hex string; both forms match.
pub fn wishlist_pair(entry: &WishlistEntry) -> Document {
    doc! {
        "blogId": { "$in": [entry.blog_id.into_object_id(), entry.blog_id.to_hex()] },
        "userEmail": entry.user_email.as_str(),
    }
}

/// Text index backing blog search
pub fn blog_text_index_keys() -> Document {
    doc! { "title": "text", "blogDetails": "text", "tags": "text" }
}

pub fn comment_blog_index_keys() -> Document {
    doc! { "blogId": 1 }
}

/// Unique per (blog, user)
pub fn wishlist_pair_index_keys() -> Document {
    doc! { "blogId": 1, "userEmail": 1 }
}
