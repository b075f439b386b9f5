//! Application Configuration
//!
//! Configuration for the blog application layer.

/// Blog application configuration
#[derive(Debug, Clone)]
pub struct BlogConfig {
    /// Maximum number of blogs returned by the latest listing
    pub latest_limit: i64,
    /// Maximum number of blogs returned by the featured listing
    pub featured_limit: usize,
    /// Category value meaning "no category filter"
    pub all_categories: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            latest_limit: 6,
            featured_limit: 10,
            all_categories: "All".to_string(),
        }
    }
}

/// Where blog data lives
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub database: String,
    pub blogs: String,
    pub comments: String,
    pub wishlists: String,
}

impl StorageConfig {
    /// Default collection names inside the given database
    pub fn with_database(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            ..Self::default()
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database: "cascadeBlog".to_string(),
            blogs: "blogs".to_string(),
            comments: "comments".to_string(),
            wishlists: "wishlists".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BlogConfig::default();
        assert_eq!(config.latest_limit, 6);
        assert_eq!(config.featured_limit, 10);
        assert_eq!(config.all_categories, "All");

        let storage = StorageConfig::with_database("blogTest");
        assert_eq!(storage.database, "blogTest");
        assert_eq!(storage.wishlists, "wishlists");
    }
}
