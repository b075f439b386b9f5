//! Domain Services
//!
//! Featured-blog ranking: an in-process pass over every blog.

use serde_json::Value;

use crate::domain::entities::JsonDocument;
use crate::domain::value_objects::fields;

/// Whitespace-separated token count
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Word count of a blog body; a missing or non-string body counts as zero
pub fn body_word_count(blog: &JsonDocument) -> usize {
    blog.get(fields::BODY)
        .and_then(Value::as_str)
        .map(word_count)
        .unwrap_or(0)
}

/// Order blogs by descending body word count, keep the top `limit`,
/// and attach the computed `wordCount` to each.
///
/// Ties keep their input order.
pub fn rank_by_word_count(blogs: Vec<JsonDocument>, limit: usize) -> Vec<JsonDocument> {
    let mut counted: Vec<(usize, JsonDocument)> = blogs
        .into_iter()
        .map(|blog| (body_word_count(&blog), blog))
        .collect();

    counted.sort_by(|(a, _), (b, _)| b.cmp(a));
    counted.truncate(limit);

    counted
        .into_iter()
        .map(|(count, mut blog)| {
            blog.insert(fields::WORD_COUNT.to_string(), Value::from(count));
            blog
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn blog(title: &str, body: Option<&str>) -> JsonDocument {
        let mut doc = JsonDocument::new();
        doc.insert("title".into(), json!(title));
        if let Some(body) = body {
            doc.insert("blogDetails".into(), json!(body));
        }
        doc
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(word_count("  spaced\tout\nwords  "), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_missing_body_counts_zero() {
        assert_eq!(body_word_count(&blog("x", None)), 0);

        let mut numeric = blog("x", None);
        numeric.insert("blogDetails".into(), json!(42));
        assert_eq!(body_word_count(&numeric), 0);
    }

    #[test]
    fn test_rank_orders_and_truncates() {
        let blogs = vec![
            blog("empty", None),
            blog("short", Some("a b")),
            blog("long", Some("a b c d e")),
            blog("mid", Some("a b c")),
        ];

        let ranked = rank_by_word_count(blogs, 3);
        let titles: Vec<&str> = ranked
            .iter()
            .map(|b| b["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["long", "mid", "short"]);
        assert_eq!(ranked[0]["wordCount"], 5);
        assert_eq!(ranked[2]["wordCount"], 2);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let blogs = vec![
            blog("first", Some("a b")),
            blog("second", Some("c d")),
            blog("none", None),
        ];
        let ranked = rank_by_word_count(blogs, 10);
        assert_eq!(ranked[0]["title"], "first");
        assert_eq!(ranked[1]["title"], "second");
        assert_eq!(ranked[2]["title"], "none");
        assert_eq!(ranked[2]["wordCount"], 0);
    }
}
