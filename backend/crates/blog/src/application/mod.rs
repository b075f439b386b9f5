//! Application Layer
//!
//! One use case per endpoint family.

pub mod add_blog;
pub mod comments;
pub mod config;
pub mod featured_blogs;
pub mod get_blog;
pub mod list_blogs;
pub mod update_blog;
pub mod wishlist;

// Re-exports
pub use add_blog::AddBlogUseCase;
pub use comments::{AddCommentInput, AddCommentUseCase, ListCommentsUseCase};
pub use config::{BlogConfig, StorageConfig};
pub use featured_blogs::FeaturedBlogsUseCase;
pub use get_blog::GetBlogUseCase;
pub use list_blogs::{LatestBlogsUseCase, ListBlogsUseCase};
pub use update_blog::UpdateBlogUseCase;
pub use wishlist::{ListWishlistUseCase, ToggleWishlistUseCase};
