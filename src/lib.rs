//! postern: a validated post store for static blogs
//!
//! This crate loads a directory of prose documents with front-matter
//! metadata, validates that every document carries a well-formed title and
//! publication date, and exposes the collection as a deterministically
//! ordered, slug-addressable store for an external site generator to
//! consume. It renders nothing itself.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use std::path::Path;

pub use content::{Post, PostStore};
pub use error::StoreError;

/// The main Postern application
#[derive(Clone)]
pub struct Postern {
    /// Store configuration
    pub config: config::StoreConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source directory
    pub source_dir: std::path::PathBuf,
    /// Resolved store timezone
    tz: Tz,
}

impl Postern {
    /// Create a new Postern instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::StoreConfig::load(&config_path)?
        } else {
            config::StoreConfig::default()
        };

        Self::with_config(base_dir, config)
    }

    /// Create an instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::StoreConfig) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();

        let tz = if config.timezone.is_empty() {
            Tz::UTC
        } else {
            config
                .timezone
                .parse()
                .map_err(|_| anyhow!("unknown timezone in _config.yml: {}", config.timezone))?
        };

        let source_dir = base_dir.join(&config.source_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            tz,
        })
    }

    /// The timezone applied to front-matter dates without an offset
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Load and validate the whole store.
    ///
    /// Either every document validates or the call fails with the first
    /// offending document; there is no partial success.
    pub fn load(&self) -> Result<PostStore, StoreError> {
        let posts = content::loader::PostLoader::new(self).load_all()?;
        PostStore::from_posts(posts)
    }

    /// Initialize a new store
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Validate the store and report totals
    pub fn check(&self) -> Result<()> {
        commands::check::run(self)
    }

    /// Create a new post or draft
    pub fn new_post(&self, title: &str, draft: bool) -> Result<()> {
        commands::new::run(self, title, draft)
    }
}
