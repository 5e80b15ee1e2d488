//! Post model

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// A single authored document: validated metadata plus a prose body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication instant, carrying the author's UTC offset
    pub published_at: DateTime<FixedOffset>,

    /// Last updated instant, if the author recorded one
    pub updated: Option<DateTime<FixedOffset>>,

    /// Category tags, possibly empty
    pub categories: Vec<String>,

    /// Prose body. Embedded tables, code samples and diagrams are
    /// opaque text to the store.
    pub body: String,

    /// Whether the post is published
    pub published: bool,

    /// Source file path relative to the store root
    pub source: String,

    /// Full source file path
    #[serde(skip)]
    pub full_source: PathBuf,

    /// Date-prefixed identifier, unique across the store
    pub slug: String,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(title: String, published_at: DateTime<FixedOffset>, source: String) -> Self {
        let slug = Self::derive_slug(&title, &published_at);
        Self {
            title,
            published_at,
            updated: None,
            categories: Vec::new(),
            body: String::new(),
            published: true,
            source: source.clone(),
            full_source: PathBuf::from(&source),
            slug,
            extra: HashMap::new(),
        }
    }

    /// Derive the identity slug for a title and publication date.
    /// The same title and date always produce the same slug.
    pub fn derive_slug(title: &str, published_at: &DateTime<FixedOffset>) -> String {
        format!(
            "{}-{}",
            published_at.format("%Y-%m-%d"),
            slug::slugify(title)
        )
    }

    /// Get the previous (newer) post in an ordered list
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        if pos > 0 {
            Some(&posts[pos - 1])
        } else {
            None
        }
    }

    /// Get the next (older) post in an ordered list
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        if pos < posts.len() - 1 {
            Some(&posts[pos + 1])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(y, m, d, 12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_derive_slug_is_date_prefixed() {
        let slug = Post::derive_slug("Performance Testing", &date(2024, 4, 30));
        assert_eq!(slug, "2024-04-30-performance-testing");
    }

    #[test]
    fn test_derive_slug_strips_punctuation() {
        let slug = Post::derive_slug("100% Unit Test Coverage versus TDD", &date(2024, 1, 1));
        assert_eq!(slug, "2024-01-01-100-unit-test-coverage-versus-tdd");
    }

    #[test]
    fn test_derive_slug_is_deterministic() {
        let a = Post::derive_slug("Some Title", &date(2024, 2, 2));
        let b = Post::derive_slug("Some Title", &date(2024, 2, 2));
        assert_eq!(a, b);
    }

    #[test]
    fn test_prev_next_navigation() {
        let posts = vec![
            Post::new("Newest".to_string(), date(2024, 3, 1), "a.md".to_string()),
            Post::new("Middle".to_string(), date(2024, 2, 1), "b.md".to_string()),
            Post::new("Oldest".to_string(), date(2024, 1, 1), "c.md".to_string()),
        ];

        let middle = &posts[1];
        assert_eq!(middle.prev(&posts).unwrap().title, "Newest");
        assert_eq!(middle.next(&posts).unwrap().title, "Oldest");
        assert!(posts[0].prev(&posts).is_none());
        assert!(posts[2].next(&posts).is_none());
    }
}
