//! Post loader - loads and validates documents from the source directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, Post};
use crate::error::StoreError;
use crate::Postern;

/// Loads posts from the source directory
pub struct PostLoader<'a> {
    postern: &'a Postern,
}

impl<'a> PostLoader<'a> {
    /// Create a new post loader
    pub fn new(postern: &'a Postern) -> Self {
        Self { postern }
    }

    /// Load every document from source/_posts.
    ///
    /// Validation is all-or-nothing: the first invalid document fails the
    /// whole load, so a broken entry can never reach the rendering
    /// pipeline. Documents are visited in sorted path order to keep error
    /// reporting deterministic.
    pub fn load_all(&self) -> Result<Vec<Post>, StoreError> {
        let posts_dir = self.postern.source_dir.join("_posts");
        if !posts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&posts_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file() && is_text_document(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();
        files.sort();

        let mut posts = Vec::with_capacity(files.len());
        for path in &files {
            let post = self.load_post(path)?;

            if !post.published && !self.postern.config.include_drafts {
                tracing::debug!("Skipping unpublished post: {}", post.source);
                continue;
            }
            if !self.postern.config.future && post.published_at > chrono::Utc::now() {
                tracing::debug!("Skipping future-dated post: {}", post.source);
                continue;
            }
            posts.push(post);
        }

        tracing::info!("Loaded {} posts from {:?}", posts.len(), posts_dir);
        Ok(posts)
    }

    /// Load and validate a single document
    fn load_post(&self, path: &Path) -> Result<Post, StoreError> {
        let content = fs::read_to_string(path)
            .map_err(|e| StoreError::validation(path, format!("unreadable document: {}", e)))?;

        let (fm, body) = FrontMatter::parse(&content)
            .map_err(|e| StoreError::validation(path, e.to_string()))?;

        let title = match fm.title {
            Some(ref t) if !t.trim().is_empty() => t.trim().to_string(),
            Some(_) => {
                return Err(StoreError::validation(path, "field `title` is empty"));
            }
            None => {
                return Err(StoreError::validation(path, "missing required field `title`"));
            }
        };

        let tz = self.postern.timezone();
        let raw_date = fm
            .date
            .as_deref()
            .ok_or_else(|| StoreError::validation(path, "missing required field `date`"))?;
        let published_at = super::frontmatter::parse_date_string(raw_date, tz).ok_or_else(|| {
            StoreError::validation(path, format!("malformed date `{}`", raw_date))
        })?;

        let updated = fm.parse_updated(tz);

        // Source path relative to the store root
        let source = path
            .strip_prefix(&self.postern.base_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let case = self.postern.config.category_case;
        let categories = fm.categories.iter().map(|c| case.apply(c)).collect();

        let mut post = Post::new(title, published_at, source);
        post.updated = updated;
        post.categories = categories;
        post.body = body.to_string();
        post.published = fm.published;
        post.full_source = path.to_path_buf();
        post.extra = fm.extra;

        Ok(post)
    }
}

/// Check if a file is a text document the store recognizes
fn is_text_document(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store_with_posts(docs: &[(&str, &str)]) -> (tempfile::TempDir, Postern) {
        let dir = tempfile::tempdir().unwrap();
        let posts_dir = dir.path().join("source/_posts");
        fs::create_dir_all(&posts_dir).unwrap();
        for (name, content) in docs {
            fs::write(posts_dir.join(name), content).unwrap();
        }
        let postern = Postern::new(dir.path()).unwrap();
        (dir, postern)
    }

    const APRIL: &str = "---\ntitle: Performance Testing\ndate: 2024-04-30\ncategories: testing\n---\n\nLoad generators lie to you.\n";
    const JANUARY: &str = "---\ntitle: 100% Unit Test Coverage versus TDD\ndate: 2024-01-01\n---\n\nCoverage is not a goal.\n";

    #[test]
    fn test_load_all_valid_documents() {
        let (_dir, postern) = store_with_posts(&[("april.md", APRIL), ("january.md", JANUARY)]);
        let posts = PostLoader::new(&postern).load_all().unwrap();
        assert_eq!(posts.len(), 2);

        let april = posts
            .iter()
            .find(|p| p.slug == "2024-04-30-performance-testing")
            .unwrap();
        assert_eq!(april.categories, vec!["testing"]);
        assert!(april.body.contains("Load generators"));
    }

    #[test]
    fn test_missing_title_fails_whole_load() {
        let bad = "---\ndate: 2024-02-02\n---\n\nBody only.\n";
        let (_dir, postern) = store_with_posts(&[("good.md", APRIL), ("zbad.md", bad)]);
        let err = PostLoader::new(&postern).load_all().unwrap_err();
        match err {
            StoreError::Validation { path, reason } => {
                assert!(path.ends_with("zbad.md"));
                assert!(reason.contains("title"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_date_fails_whole_load() {
        let bad = "---\ntitle: No Date\n---\n\nBody.\n";
        let (_dir, postern) = store_with_posts(&[("bad.md", bad)]);
        let err = PostLoader::new(&postern).load_all().unwrap_err();
        assert!(err.to_string().contains("missing required field `date`"));
    }

    #[test]
    fn test_malformed_date_fails_whole_load() {
        let bad = "---\ntitle: Bad Date\ndate: not-a-date\n---\n\nBody.\n";
        let (_dir, postern) = store_with_posts(&[("bad.md", bad)]);
        let err = PostLoader::new(&postern).load_all().unwrap_err();
        assert!(err.to_string().contains("malformed date `not-a-date`"));
    }

    #[test]
    fn test_headerless_document_fails_whole_load() {
        let bad = "Just prose, no metadata header at all.\n";
        let (_dir, postern) = store_with_posts(&[("bad.md", bad)]);
        let err = PostLoader::new(&postern).load_all().unwrap_err();
        assert!(err.to_string().contains("missing required field `title`"));
    }

    #[test]
    fn test_load_is_idempotent() {
        let (_dir, postern) = store_with_posts(&[("april.md", APRIL), ("january.md", JANUARY)]);
        let loader = PostLoader::new(&postern);
        let first = loader.load_all().unwrap();
        let second = loader.load_all().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_loaded_store_lookup_and_order() {
        let (_dir, postern) = store_with_posts(&[("april.md", APRIL), ("january.md", JANUARY)]);
        let store = postern.load().unwrap();

        let titles: Vec<_> = store.ordered().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Performance Testing", "100% Unit Test Coverage versus TDD"]
        );

        let post = store
            .find_by_slug("2024-01-01-100-unit-test-coverage-versus-tdd")
            .unwrap();
        assert_eq!(post.title, "100% Unit Test Coverage versus TDD");
        assert!(store.find_by_slug("2099-01-01-nonexistent").is_err());
    }

    #[test]
    fn test_duplicate_slug_across_documents_fails_load() {
        let (_dir, postern) = store_with_posts(&[("a.md", APRIL), ("b.md", APRIL)]);
        let err = postern.load().unwrap_err();
        assert!(err.to_string().contains("duplicate slug"));
    }

    #[test]
    fn test_drafts_excluded_by_default() {
        let draft = "---\ntitle: Half-formed Thought\ndate: 2024-03-03\npublished: false\n---\n\nNot ready.\n";
        let (dir, postern) = store_with_posts(&[("draft.md", draft), ("april.md", APRIL)]);
        let posts = PostLoader::new(&postern).load_all().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Performance Testing");

        // Still validated, still loadable once drafts are included
        let mut config = postern.config.clone();
        config.include_drafts = true;
        let postern = Postern::with_config(dir.path(), config).unwrap();
        let posts = PostLoader::new(&postern).load_all().unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn test_broken_draft_still_fails_load() {
        let draft = "---\ndate: 2024-03-03\npublished: false\n---\n\nNo title.\n";
        let (_dir, postern) = store_with_posts(&[("draft.md", draft), ("april.md", APRIL)]);
        assert!(PostLoader::new(&postern).load_all().is_err());
    }

    #[test]
    fn test_non_document_files_ignored() {
        let (_dir, postern) = store_with_posts(&[("april.md", APRIL), ("notes.txt", "scratch")]);
        let posts = PostLoader::new(&postern).load_all().unwrap();
        assert_eq!(posts.len(), 1);
    }
}
