//! Data Transfer Objects
//!
//! Request and response types for the HTTP API. Blog bodies themselves
//! are open JSON objects and need no DTO.

use serde::{Deserialize, Serialize};

/// Query string of `GET /blogs`
#[derive(Debug, Default, Deserialize)]
pub struct ListBlogsParams {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// `POST /comments` body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub blog_id: String,
    pub user_name: String,
    #[serde(default)]
    pub user_photo: Option<String>,
    pub user_email: String,
    pub comment: String,
}

/// `POST /wishlist` body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleWishlistRequest {
    pub blog_id: String,
    pub user_email: String,
}

#[derive(Debug, Serialize)]
pub struct ToggleWishlistResponse {
    pub wished: bool,
}
