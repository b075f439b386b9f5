//! Document ID Types
//!
//! Type-safe identifier wrappers over the document store's native
//! `ObjectId`. Every identifier that crosses the HTTP boundary is parsed
//! into one of these before any storage call is made.

use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type BlogId = Id<markers::Blog>;
/// let id: BlogId = "65a1f0c2b4d3e2a1f0c2b4d3".parse().unwrap();
/// assert_eq!(id.to_hex(), "65a1f0c2b4d3e2a1f0c2b4d3");
/// ```
pub struct Id<T> {
    value: ObjectId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self::from_object_id(ObjectId::new())
    }

    /// Wrap an existing ObjectId
    pub fn from_object_id(value: ObjectId) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Parse a 24 character hex string
    pub fn parse_str(s: &str) -> Result<Self, bson::oid::Error> {
        ObjectId::parse_str(s.trim()).map(Self::from_object_id)
    }

    pub fn as_object_id(&self) -> &ObjectId {
        &self.value
    }

    pub fn into_object_id(self) -> ObjectId {
        self.value
    }

    pub fn to_hex(&self) -> String {
        self.value.to_hex()
    }
}

// Manual impls so `T` does not need to implement these traits itself.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = bson::oid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl<T> From<ObjectId> for Id<T> {
    fn from(value: ObjectId) -> Self {
        Self::from_object_id(value)
    }
}

impl<T> From<Id<T>> for ObjectId {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Serialized as the plain hex string, which is what API clients see.
impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value.to_hex())
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_str(&raw).map_err(serde::de::Error::custom)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for blog post IDs
    pub struct Blog;

    /// Marker for comment IDs
    pub struct Comment;
}

/// Type aliases for common IDs
pub type BlogId = Id<markers::Blog>;
pub type CommentId = Id<markers::Comment>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_hex() {
        let id = BlogId::parse_str("65a1f0c2b4d3e2a1f0c2b4d3").unwrap();
        assert_eq!(id.to_hex(), "65a1f0c2b4d3e2a1f0c2b4d3");
        assert_eq!(id.to_string(), "65a1f0c2b4d3e2a1f0c2b4d3");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(BlogId::parse_str("").is_err());
        assert!(BlogId::parse_str("not-an-id").is_err());
        assert!(BlogId::parse_str("65a1f0c2b4d3e2a1f0c2b4d").is_err());
        assert!(BlogId::parse_str("zza1f0c2b4d3e2a1f0c2b4d3").is_err());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let id = CommentId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.to_hex()));

        let back: CommentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<CommentId>("\"oops\"").is_err());
    }

    #[test]
    fn test_object_id_conversion() {
        let oid = ObjectId::new();
        let id: BlogId = oid.into();
        assert_eq!(id.as_object_id(), &oid);
        assert_eq!(ObjectId::from(id), oid);
    }
}
