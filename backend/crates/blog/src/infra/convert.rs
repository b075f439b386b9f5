//! BSON <-> JSON Conversion
//!
//! Stored documents go out as plain JSON: ObjectIds as hex strings and
//! datetimes as RFC 3339 with millisecond precision.

use bson::{Bson, Document};
use serde_json::Value;

use crate::domain::entities::{JsonDocument, format_timestamp};
use crate::error::{BlogError, BlogResult};

/// Client JSON object to a BSON document
pub fn json_to_document(fields: &JsonDocument) -> BlogResult<Document> {
    bson::to_document(fields).map_err(|e| BlogError::InvalidInput(format!("Unsupported value: {e}")))
}

/// Stored BSON document to a JSON object
pub fn document_to_json(document: Document) -> JsonDocument {
    document
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect()
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(datetime) => Value::String(format_timestamp(&datetime.to_chrono())),
        Bson::Document(document) => Value::Object(document_to_json(document)),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// Identifier reported in write receipts
pub fn receipt_id(id: &Bson) -> BlogResult<String> {
    match id {
        Bson::ObjectId(oid) => Ok(oid.to_hex()),
        Bson::String(s) => Ok(s.clone()),
        other => Err(BlogError::Conversion(format!(
            "unexpected identifier type: {:?}",
            other.element_type()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn test_document_to_json() {
        let oid = ObjectId::parse_str("65a1f0c2b4d3e2a1f0c2b4d3").unwrap();
        let created = bson::DateTime::from_millis(1_714_557_600_250);
        let document = doc! {
            "_id": oid,
            "title": "A",
            "views": 3,
            "createdAt": created,
            "meta": { "ref": oid },
            "tags": ["rust", "axum"],
        };

        let value = Value::Object(document_to_json(document));
        assert_eq!(
            value,
            json!({
                "_id": "65a1f0c2b4d3e2a1f0c2b4d3",
                "title": "A",
                "views": 3,
                "createdAt": "2024-05-01T10:00:00.250Z",
                "meta": { "ref": "65a1f0c2b4d3e2a1f0c2b4d3" },
                "tags": ["rust", "axum"],
            })
        );
    }

    #[test]
    fn test_json_to_document() {
        let fields = json!({ "title": "A", "views": 3, "tags": ["x"], "draft": false });
        let document = json_to_document(fields.as_object().unwrap()).unwrap();
        assert_eq!(document.get_str("title").unwrap(), "A");
        assert_eq!(document.get_i64("views").unwrap(), 3);
        assert!(!document.get_bool("draft").unwrap());
    }

    #[test]
    fn test_receipt_id() {
        let oid = ObjectId::new();
        assert_eq!(receipt_id(&Bson::ObjectId(oid)).unwrap(), oid.to_hex());
        assert_eq!(receipt_id(&Bson::String("abc".into())).unwrap(), "abc");
        assert!(matches!(
            receipt_id(&Bson::Int32(1)),
            Err(BlogError::Conversion(_))
        ));
    }
}
