//! Domain Value Objects
//!
//! Identifiers, field names and the blog listing query.

pub use kernel::id::{BlogId, CommentId};

use crate::error::{BlogError, BlogResult};

/// Document field names shared by every storage backend
pub mod fields {
    pub const ID: &str = "_id";
    pub const TITLE: &str = "title";
    /// Blog body text
    pub const BODY: &str = "blogDetails";
    pub const CATEGORY: &str = "category";
    pub const TAGS: &str = "tags";
    pub const CREATED_AT: &str = "createdAt";
    /// Text search relevance, only present on search results
    pub const SCORE: &str = "score";
    /// Derived on featured results
    pub const WORD_COUNT: &str = "wordCount";
    pub const BLOG_ID: &str = "blogId";
    pub const USER_EMAIL: &str = "userEmail";

    /// Fields covered by full-text search
    pub const TEXT_SEARCH: [&str; 3] = [TITLE, BODY, TAGS];
}

/// Parse a client-supplied blog identifier
pub fn parse_blog_id(raw: &str) -> BlogResult<BlogId> {
    BlogId::parse_str(raw).map_err(|_| BlogError::InvalidId(raw.to_string()))
}

/// Category restriction on a blog listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    /// Interpret the `category` query parameter
    ///
    /// Absent, empty or equal to the "all" sentinel means no restriction.
    /// Anything else is matched byte for byte.
    pub fn from_param(param: Option<&str>, all_sentinel: &str) -> Self {
        match param {
            None | Some("") => CategoryFilter::All,
            Some(category) if category == all_sentinel => CategoryFilter::All,
            Some(category) => CategoryFilter::Only(category.to_string()),
        }
    }
}

/// Blog listing query: optional full-text search plus category filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogListQuery {
    pub search: Option<String>,
    pub category: CategoryFilter,
}

impl BlogListQuery {
    pub fn new(search: Option<&str>, category: CategoryFilter) -> Self {
        let search = search
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string);
        Self { search, category }
    }

    /// Relevance ordering applies only when a search term is present
    pub fn is_text_search(&self) -> bool {
        self.search.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_sentinel() {
        assert_eq!(CategoryFilter::from_param(None, "All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_param(Some("All"), "All"),
            CategoryFilter::All
        );
        assert_eq!(CategoryFilter::from_param(Some(""), "All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_param(Some("Travel"), "All"),
            CategoryFilter::Only("Travel".to_string())
        );
        // Exact match only
        assert_eq!(
            CategoryFilter::from_param(Some("all"), "All"),
            CategoryFilter::Only("all".to_string())
        );
        assert_eq!(
            CategoryFilter::from_param(Some(" Travel "), "All"),
            CategoryFilter::Only(" Travel ".to_string())
        );
        assert_eq!(
            CategoryFilter::from_param(Some("  "), "All"),
            CategoryFilter::Only("  ".to_string())
        );
    }

    #[test]
    fn test_blank_search_is_not_text_search() {
        assert!(!BlogListQuery::new(None, CategoryFilter::All).is_text_search());
        assert!(!BlogListQuery::new(Some("   "), CategoryFilter::All).is_text_search());

        let query = BlogListQuery::new(Some(" rust async "), CategoryFilter::All);
        assert!(query.is_text_search());
        assert_eq!(query.search.as_deref(), Some("rust async"));
    }

    #[test]
    fn test_parse_blog_id() {
        assert!(parse_blog_id("65a1f0c2b4d3e2a1f0c2b4d3").is_ok());
        assert!(matches!(
            parse_blog_id("123"),
            Err(BlogError::InvalidId(raw)) if raw == "123"
        ));
    }
}
