//! Store configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,
    /// IANA timezone applied to front-matter dates that carry no offset
    /// of their own. Empty means UTC.
    pub timezone: String,

    // Directory
    pub source_dir: String,

    // Writing
    pub new_post_name: String,
    pub include_drafts: bool,
    /// Whether posts dated in the future are part of the store
    pub future: bool,
    pub category_case: CategoryCase,

    // Date / Time format
    pub date_format: String,
    pub time_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            title: "Postern".to_string(),
            subtitle: String::new(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),
            timezone: String::new(),

            source_dir: "source".to_string(),

            new_post_name: ":year-:month-:day-:title.md".to_string(),
            include_drafts: false,
            future: true,
            category_case: CategoryCase::default(),

            date_format: "YYYY-MM-DD".to_string(),
            time_format: "HH:mm:ss".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: StoreConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// How category tags from front-matter are normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryCase {
    /// Keep tags exactly as the author wrote them
    #[default]
    Preserve,
    /// Lowercase tags so `Testing` and `testing` collapse into one
    Lower,
}

impl CategoryCase {
    pub fn apply(&self, name: &str) -> String {
        match self {
            CategoryCase::Preserve => name.to_string(),
            CategoryCase::Lower => name.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.title, "Postern");
        assert_eq!(config.source_dir, "source");
        assert_eq!(config.category_case, CategoryCase::Preserve);
        assert!(config.future);
        assert!(!config.include_drafts);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
author: Test User
timezone: Asia/Shanghai
include_drafts: true
category_case: lower
"#;
        let config: StoreConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.timezone, "Asia/Shanghai");
        assert!(config.include_drafts);
        assert_eq!(config.category_case, CategoryCase::Lower);
    }

    #[test]
    fn test_category_case_apply() {
        assert_eq!(CategoryCase::Preserve.apply("Testing"), "Testing");
        assert_eq!(CategoryCase::Lower.apply("Testing"), "testing");
    }
}
