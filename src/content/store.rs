//! Post store - the validated, ordered post collection

use indexmap::IndexMap;

use super::Post;
use crate::error::StoreError;

/// The loaded post collection.
///
/// Read-only once built: posts are held newest-first and indexed by slug,
/// so ordered iteration is restartable and lookups are exact-match.
#[derive(Debug)]
pub struct PostStore {
    posts: Vec<Post>,
    slugs: IndexMap<String, usize>,
}

impl PostStore {
    /// Build a store from loaded posts.
    ///
    /// Sorts by publication date descending with title ascending as the
    /// tiebreak, then indexes slugs. A duplicate slug is a validation
    /// failure naming both offending documents.
    pub fn from_posts(mut posts: Vec<Post>) -> Result<Self, StoreError> {
        posts.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| a.title.cmp(&b.title))
        });

        let mut slugs = IndexMap::with_capacity(posts.len());
        for (idx, post) in posts.iter().enumerate() {
            if let Some(&prev) = slugs.get(&post.slug) {
                let other: &Post = &posts[prev];
                return Err(StoreError::validation(
                    &post.full_source,
                    format!("duplicate slug `{}` (also used by {})", post.slug, other.source),
                ));
            }
            slugs.insert(post.slug.clone(), idx);
        }

        Ok(Self { posts, slugs })
    }

    /// Number of posts in the store
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Posts in order, newest first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Iterate over posts newest-first. Each call restarts from the
    /// newest post.
    pub fn ordered(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter()
    }

    /// Exact-match lookup by slug
    pub fn find_by_slug(&self, slug: &str) -> Result<&Post, StoreError> {
        self.slugs
            .get(slug)
            .map(|&idx| &self.posts[idx])
            .ok_or_else(|| StoreError::not_found(slug))
    }

    /// Tally of category tags, in first-seen order
    pub fn categories(&self) -> IndexMap<String, usize> {
        let mut categories: IndexMap<String, usize> = IndexMap::new();
        for post in &self.posts {
            for cat in &post.categories {
                *categories.entry(cat.clone()).or_insert(0) += 1;
            }
        }
        categories
    }
}
