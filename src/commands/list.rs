//! List store content

use anyhow::Result;

use crate::helpers::format_date;
use crate::Postern;

/// List store content by type
pub fn run(postern: &Postern, content_type: &str, json: bool) -> Result<()> {
    let store = postern.load()?;

    match content_type {
        "post" | "posts" => {
            if json {
                // Ordered sequence for the external rendering pipeline
                println!("{}", serde_json::to_string_pretty(store.posts())?);
                return Ok(());
            }
            println!("Posts ({}):", store.len());
            for post in store.ordered() {
                println!(
                    "  {} - {} [{}]",
                    format_date(&post.published_at, &postern.config.date_format),
                    post.title,
                    post.slug
                );
            }
        }
        "category" | "categories" => {
            let categories = store.categories();
            if json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
                return Ok(());
            }
            println!("Categories ({}):", categories.len());
            let mut categories: Vec<_> = categories.into_iter().collect();
            categories.sort_by(|a, b| b.1.cmp(&a.1));
            for (cat, count) in categories {
                println!("  {} ({})", cat, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category",
                content_type
            );
        }
    }

    Ok(())
}
